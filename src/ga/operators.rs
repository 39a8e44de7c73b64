//! Permutation crossover and mutation operators.
//!
//! These operate on `&[usize]` stop lists that are permutations of
//! `0..n`, so they work for any ordering problem, not only the TSP.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use rand::Rng;

/// Order Crossover (OX).
///
/// Draws two cut points uniformly in `0..n`, orders them, and delegates to
/// [`ordered_crossover_at`]. Coinciding cuts give an empty slice, so the
/// child is a copy of `parent2`.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn ordered_crossover<R: Rng + ?Sized>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    if n == 0 {
        return Vec::new();
    }
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    ordered_crossover_at(parent1, parent2, a.min(b), a.max(b))
}

/// Deterministic OX with the slice `parent1[start..end]`.
///
/// 1. Copy `parent1[start..end]` into the child at the same positions
/// 2. Fill the remaining slots left to right with `parent2`'s stops, in
///    their original order, skipping those already inherited
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths, if `start > end`, or if
/// `end > n`.
pub fn ordered_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start <= end && end <= n, "invalid slice {start}..{end} for length {n}");

    let mut child = vec![usize::MAX; n];
    let mut inherited = vec![false; n];
    for i in start..end {
        child[i] = parent1[i];
        inherited[parent1[i]] = true;
    }

    let mut donors = parent2.iter().copied().filter(|&s| !inherited[s]);
    for (i, slot) in child.iter_mut().enumerate() {
        if (start..end).contains(&i) {
            continue;
        }
        if let Some(stop) = donors.next() {
            *slot = stop;
        }
    }

    child
}

/// Plans the swaps of a swap mutation.
///
/// Each position `i` is visited once; with probability `rate` it is paired
/// with a uniformly random position `j` (possibly `i` itself).
pub fn swap_plan<R: Rng + ?Sized>(n: usize, rate: f64, rng: &mut R) -> Vec<(usize, usize)> {
    let mut swaps = Vec::new();
    for i in 0..n {
        if rng.random::<f64>() < rate {
            swaps.push((i, rng.random_range(0..n)));
        }
    }
    swaps
}

/// Swap mutation: returns a copy of `stops` with [`swap_plan`] applied.
///
/// A rate of 0 returns an identical sequence.
pub fn swap_mutation<R: Rng + ?Sized>(stops: &[usize], rate: f64, rng: &mut R) -> Vec<usize> {
    let mut mutated = stops.to_vec();
    for (i, j) in swap_plan(stops.len(), rate, rng) {
        mutated.swap(i, j);
    }
    mutated
}
