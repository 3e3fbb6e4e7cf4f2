//! Genetic operators shared by the built-in problems.
//!
//! # Crossover Operators
//!
//! - [`order_crossover`] (OX): Davis (1985) — copies a slice from one parent
//!   and fills the rest in the other parent's relative order
//! - [`single_point_crossover`]: prefix of one parent, suffix of the other
//!
//! # Mutation Operators
//!
//! - [`adjacent_swap_mutation`]: exchange two neighbouring positions — O(1)
//! - [`reset_mutation`]: independently redraw each gene — O(n)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Order Crossover (OX) for permutations with a fixed prefix.
///
/// The first `fixed` positions are never chosen for the copied slice, so a
/// value pinned there in both parents (e.g. a TSP anchor city) stays put.
///
/// # Algorithm
///
/// 1. Select a random slice `[start, end)` with `fixed <= start < end <= n`
/// 2. Copy parent1's slice to the child at the same positions
/// 3. Fill the remaining positions left to right with parent2's genes that
///    are not in the slice, in parent2's order
///
/// Returns a clone of parent1 when no slice can be chosen (`n - fixed < 1`).
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are not permutations of
/// `0..n`.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    fixed: usize,
    rng: &mut R,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n <= fixed {
        return parent1.to_vec();
    }

    let (start, end) = random_slice(fixed, n, rng);
    ox_build_child(parent1, parent2, start, end)
}

/// Build one OX child: copy `[start, end)` from `template`, fill from `donor`.
pub(crate) fn ox_build_child(
    template: &[usize],
    donor: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut used = vec![false; n];

    for i in start..end {
        child[i] = template[i];
        used[template[i]] = true;
    }

    let mut fill = donor.iter().copied().filter(|&v| !used[v]);
    for slot in child.iter_mut().filter(|c| **c == usize::MAX) {
        *slot = fill
            .next()
            .expect("valid permutation: donor supplies every missing gene");
    }

    child
}

/// Single-point crossover for fixed-length sequences.
///
/// Picks a split uniformly in `[0, n)` and returns
/// `parent1[..split] ++ parent2[split..]`.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> Vec<T> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    if n == 0 {
        return Vec::new();
    }

    let split = rng.random_range(0..n);
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&parent1[..split]);
    child.extend_from_slice(&parent2[split..]);
    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Adjacent swap mutation: exchange positions `i` and `i + 1` for a random
/// `i` in `[fixed, n - 1)`.
///
/// No-op when fewer than two positions lie beyond `fixed`.
///
/// # Complexity
/// O(1)
pub fn adjacent_swap_mutation<T, R: Rng>(perm: &mut [T], fixed: usize, rng: &mut R) {
    let n = perm.len();
    if n < fixed + 2 {
        return;
    }
    let i = rng.random_range(fixed..n - 1);
    perm.swap(i, i + 1);
}

/// Reset mutation: each gene is independently replaced by `fresh()` with
/// probability `rate`.
///
/// # Complexity
/// O(n)
pub fn reset_mutation<T, R, F>(genes: &mut [T], rate: f64, rng: &mut R, mut fresh: F)
where
    R: Rng,
    F: FnMut(&mut R) -> T,
{
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < rate {
            *gene = fresh(&mut *rng);
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random non-empty slice `[start, end)` with `lo <= start < end <= n`.
fn random_slice<R: Rng>(lo: usize, n: usize, rng: &mut R) -> (usize, usize) {
    let start = rng.random_range(lo..n);
    let end = rng.random_range(start + 1..=n);
    (start, end)
}

/// Check that a slice is a permutation of `0..n`.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
