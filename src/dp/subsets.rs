//! Fixed-size subset enumeration over bitmasks.
//!
//! Subsets of the universe `{0, …, n-1}` are encoded as `u64` masks where
//! bit `i` is set iff element `i` is a member, so `n` is limited to
//! [`MAX_UNIVERSE`].

/// Largest universe a `u64` mask can encode.
pub const MAX_UNIVERSE: usize = u64::BITS as usize;

/// Returns `true` if element `elem` is a member of `set`.
#[inline]
pub fn contains(set: u64, elem: usize) -> bool {
    set & (1u64 << elem) != 0
}

/// All `n`-bit masks with exactly `r` bits set.
///
/// Masks come out in lexicographic order of their member lists.
///
/// Recursive choose-or-skip generation: each call either places the next
/// set bit at some position `i >= at` or gives up as soon as fewer than
/// `r` positions remain.
///
/// ```
/// use u_tsp::dp::combinations;
///
/// assert_eq!(combinations(3, 4), vec![0b0111, 0b1011, 0b1101, 0b1110]);
/// ```
///
/// # Panics
/// Panics if `n > MAX_UNIVERSE`.
pub fn combinations(r: usize, n: usize) -> Vec<u64> {
    assert!(n <= MAX_UNIVERSE, "universe of {n} elements exceeds a u64 mask");
    let mut subsets = Vec::new();
    if r <= n {
        extend(0, 0, r, n, &mut subsets);
    }
    subsets
}

fn extend(set: u64, at: usize, r: usize, n: usize, subsets: &mut Vec<u64>) {
    if n - at < r {
        return;
    }
    if r == 0 {
        subsets.push(set);
        return;
    }
    for i in at..n {
        extend(set | (1u64 << i), i + 1, r - 1, n, subsets);
    }
}
