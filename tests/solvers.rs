//! Cross-solver properties on random instances.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use u_tsp::ga::operators::pmx_crossover_at;
use u_tsp::ga::{GaConfig, GaRunner, Genome, Selection};
use u_tsp::{brute_force, DpSolver, Graph, TspError};

/// A random (possibly asymmetric) graph with a valid start vertex.
fn graph_and_start(min: usize, max: usize) -> impl Strategy<Value = (Graph, usize)> {
    (min..=max).prop_flat_map(|n| {
        (
            prop::collection::vec(0u64..100, n * n),
            0..n,
        )
            .prop_map(move |(flat, start)| {
                let graph = Graph::from_fn(n, |i, j| flat[i * n + j]).unwrap();
                (graph, start)
            })
    })
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_hamiltonian(tour: &[usize], n: usize, start: usize) {
    assert_eq!(tour.len(), n + 1);
    assert_eq!(tour[0], start);
    assert_eq!(tour[n], start);
    let mut inner = tour[..n].to_vec();
    inner.sort_unstable();
    assert_eq!(inner, (0..n).collect::<Vec<_>>());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn dp_matches_brute_force((graph, start) in graph_and_start(3, 8)) {
        let dp = DpSolver::new(&graph, start).unwrap();
        let bf = brute_force::solve(&graph, start).unwrap();

        prop_assert_eq!(dp.cost(), bf.cost);
        assert_hamiltonian(dp.tour(), graph.len(), start);
        prop_assert_eq!(graph.path_cost(dp.tour()), dp.cost());
    }

    #[test]
    fn dp_is_idempotent((graph, start) in graph_and_start(3, 7)) {
        let dp = DpSolver::new(&graph, start).unwrap();
        let first = dp.solve().clone();
        prop_assert_eq!(dp.solve(), &first);
        prop_assert_eq!(dp.tour(), first.tour.as_slice());
        prop_assert_eq!(dp.cost(), first.cost);
    }

    #[test]
    fn crossover_keeps_children_valid(
        (graph, start) in graph_and_start(2, 12),
        seed in any::<u64>(),
        cut in any::<prop::sample::Index>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let p1 = Genome::random(&graph, start, &mut rng).unwrap();
        let p2 = Genome::random(&graph, start, &mut rng).unwrap();
        let breakpoint = cut.index(p1.len());

        let (c1, c2) = pmx_crossover_at(p1.tour(), p2.tour(), breakpoint);
        // Genome::new rejects anything that is not a permutation of the
        // non-start vertices.
        let c1 = Genome::new(&graph, start, c1).unwrap();
        let c2 = Genome::new(&graph, start, c2).unwrap();
        prop_assert_eq!(c1.fitness(), graph.path_cost(&c1.path()));
        prop_assert_eq!(c2.fitness(), graph.path_cost(&c2.path()));
    }

    #[test]
    fn fitness_is_deterministic((graph, start) in graph_and_start(2, 12), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let genome = Genome::random(&graph, start, &mut rng).unwrap();
        let rebuilt = Genome::new(&graph, start, genome.tour().to_vec()).unwrap();
        prop_assert_eq!(genome.fitness(), rebuilt.fitness());
        prop_assert_eq!(genome.fitness(), graph.path_cost(&genome.path()));
    }

    #[test]
    fn full_tournament_returns_population_minimum(
        (graph, start) in graph_and_start(3, 9),
        seed in any::<u64>(),
        size in 1usize..20,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let population: Vec<Genome> = (0..size)
            .map(|_| Genome::random(&graph, start, &mut rng).unwrap())
            .collect();
        let min = population.iter().map(Genome::fitness).min().unwrap();

        let idx = Selection::Tournament(size).select(&population, &mut rng).unwrap();
        prop_assert_eq!(population[idx].fitness(), min);
    }

    #[test]
    fn tournament_returns_sample_minimum(
        (graph, start) in graph_and_start(3, 9),
        seed in any::<u64>(),
        size in 2usize..20,
        k in any::<prop::sample::Index>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let population: Vec<Genome> = (0..size)
            .map(|_| Genome::random(&graph, start, &mut rng).unwrap())
            .collect();
        let k = 1 + k.index(size - 1);

        // Replaying the same draw recovers the exact members of the tournament.
        let mut replay = rng.clone();
        let expected = index::sample(&mut replay, size, k)
            .into_iter()
            .min_by_key(|&i| population[i].fitness())
            .unwrap();

        let idx = Selection::Tournament(k).select(&population, &mut rng).unwrap();
        prop_assert_eq!(idx, expected);
    }

    #[test]
    fn ga_never_beats_the_optimum((graph, start) in graph_and_start(3, 7), seed in any::<u64>()) {
        let config = GaConfig::default()
            .with_population_size(30)
            .with_reproduction_size(10)
            .with_max_generations(10)
            .with_tournament_size(4)
            .with_seed(seed);
        let result = GaRunner::new(&graph, start, config).unwrap().optimize().unwrap();
        let optimum = DpSolver::new(&graph, start).unwrap().cost();

        prop_assert!(result.best_fitness >= optimum);
        prop_assert_eq!(result.generations, 10);
    }
}

#[test]
fn reference_instance_all_solvers() {
    init_logging();
    let graph = Graph::new(vec![
        vec![0, 10, 15, 20],
        vec![10, 0, 35, 25],
        vec![15, 35, 0, 30],
        vec![20, 25, 30, 0],
    ])
    .unwrap();

    let dp = DpSolver::new(&graph, 0).unwrap();
    assert_eq!(dp.cost(), 80);
    assert_eq!(dp.tour(), &[0, 1, 3, 2, 0]);

    assert_eq!(brute_force::solve(&graph, 0).unwrap().cost, 80);

    let config = GaConfig::default()
        .with_population_size(40)
        .with_reproduction_size(10)
        .with_max_generations(20)
        .with_selection(Selection::Roulette)
        .with_seed(1);
    let best = GaRunner::new(&graph, 0, config).unwrap().optimize().unwrap().best;
    assert_eq!(best.fitness(), 80);
    let text = best.to_string();
    assert!(text.starts_with("Path: [0, "), "{text}");
    assert!(text.ends_with(", 0]\nLength: 80"), "{text}");
}

#[test]
fn degenerate_triangle() {
    let graph = Graph::new(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]).unwrap();
    let dp = DpSolver::new(&graph, 0).unwrap();
    assert_eq!(dp.cost(), 3);
    assert!(dp.tour() == [0, 1, 2, 0] || dp.tour() == [0, 2, 1, 0]);
}

#[test]
fn graph_is_shared_between_solvers() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(17);
    let graph = Graph::random(10, &mut rng).unwrap();

    let solvers: Vec<DpSolver> = (0..3)
        .map(|start| DpSolver::new(&graph, start).unwrap())
        .collect();
    let costs: Vec<u64> = solvers.iter().map(DpSolver::cost).collect();
    // The optimal cycle cost does not depend on where it starts.
    assert!(costs.windows(2).all(|w| w[0] == w[1]), "{costs:?}");
}

#[test]
fn configuration_errors_are_eager() {
    let square = Graph::new(vec![vec![0, 1], vec![1, 0]]).unwrap();
    assert!(matches!(
        DpSolver::new(&square, 0),
        Err(TspError::TooFewVertices { vertices: 2, .. })
    ));
    assert!(matches!(
        Graph::new(vec![vec![0, 1, 2], vec![1, 0, 2]]),
        Err(TspError::NotSquare { .. })
    ));

    let config = GaConfig::default().with_population_size(10).with_tournament_size(40);
    assert!(matches!(
        GaRunner::new(&square, 0, config),
        Err(TspError::InvalidConfig(_))
    ));
}
