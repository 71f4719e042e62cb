//! Core trait shared by the GA components.

/// A scored candidate solution.
///
/// Lower fitness is better (minimization). Fitness is fixed once an
/// individual exists.
pub trait Individual {
    /// Cost of this individual.
    fn fitness(&self) -> u64;
}
