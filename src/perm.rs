//! Permutation operators shared by the search algorithms.
//!
//! Candidate execution orders are `Vec<usize>` index permutations over an
//! immutable process slice; no algorithm ever clones process data into its
//! candidates. The operators here are the common vocabulary: seeded RNG
//! construction, shuffles, order crossover, swap moves, and the positional
//! distance used by the swarm update.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::process::Process;

/// Creates the run RNG: seeded for reproducible runs, otherwise
/// randomly seeded.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

/// The identity permutation `0..n`.
pub fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Indices sorted by arrival time ascending (stable on ties).
pub fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order = identity(processes.len());
    order.sort_by(|&a, &b| {
        processes[a]
            .arrival_time
            .partial_cmp(&processes[b].arrival_time)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}

/// Indices sorted by burst time ascending (stable on ties).
pub fn burst_order(processes: &[Process]) -> Vec<usize> {
    let mut order = identity(processes.len());
    order.sort_by(|&a, &b| {
        processes[a]
            .burst_time
            .partial_cmp(&processes[b].burst_time)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}

/// A uniformly random permutation of `0..n`.
pub fn random_order<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order = identity(n);
    order.shuffle(rng);
    order
}

/// Order crossover: copy a contiguous segment from `parent1`, then fill
/// the remaining positions left to right with `parent2`'s elements in
/// their relative order, skipping values already placed.
///
/// Returns a clone of `parent1` when there is nothing to recombine.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    debug_assert_eq!(n, parent2.len(), "parents must have equal length");
    if n < 2 {
        return parent1.to_vec();
    }

    let start = rng.random_range(0..n - 1);
    let end = start + 1 + rng.random_range(0..n - start - 1);

    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];
    for i in start..=end {
        child[i] = parent1[i];
        in_segment[parent1[i]] = true;
    }

    let mut donor = parent2.iter().copied().filter(|&v| !in_segment[v]);
    for slot in child.iter_mut() {
        if *slot == usize::MAX {
            *slot = donor.next().expect("donor covers all unplaced values");
        }
    }

    child
}

/// Swaps two distinct random positions in place. No-op for `n < 2`.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let (i, j) = distinct_pair(n, rng);
    perm.swap(i, j);
}

/// A neighbor of `perm` produced by one random swap of distinct positions.
pub fn swap_neighbor<R: Rng>(perm: &[usize], rng: &mut R) -> Vec<usize> {
    let mut neighbor = perm.to_vec();
    swap_mutation(&mut neighbor, rng);
    neighbor
}

/// Number of positions at which two permutations differ.
pub fn position_distance(a: &[usize], b: &[usize]) -> usize {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Two distinct indices in `0..n`. Requires `n >= 2`.
fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }
    (i, j)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        perm.len() == n && perm.iter().copied().collect::<HashSet<_>>().len() == n
            && perm.iter().all(|&v| v < n)
    }

    #[test]
    fn test_arrival_order_stable_on_ties() {
        let ps = vec![
            Process::new("a", 3.0, 1.0),
            Process::new("b", 1.0, 0.0),
            Process::new("c", 2.0, 0.0),
        ];
        // b and c tie at arrival 0; input order kept.
        assert_eq!(arrival_order(&ps), vec![1, 2, 0]);
    }

    #[test]
    fn test_burst_order() {
        let ps = vec![
            Process::new("a", 3.0, 0.0),
            Process::new("b", 1.0, 0.0),
            Process::new("c", 2.0, 0.0),
        ];
        assert_eq!(burst_order(&ps), vec![1, 2, 0]);
    }

    #[test]
    fn test_order_crossover_valid() {
        let mut rng = rng_from_seed(Some(42));
        let p1: Vec<usize> = (0..10).collect();
        let mut p2: Vec<usize> = (0..10).collect();
        p2.reverse();

        for _ in 0..200 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&child, 10), "invalid child: {child:?}");
        }
    }

    #[test]
    fn test_order_crossover_single_element() {
        let mut rng = rng_from_seed(Some(42));
        assert_eq!(order_crossover(&[0], &[0], &mut rng), vec![0]);
    }

    #[test]
    fn test_order_crossover_identical_parents() {
        let mut rng = rng_from_seed(Some(7));
        let p: Vec<usize> = (0..6).collect();
        for _ in 0..50 {
            assert_eq!(order_crossover(&p, &p, &mut rng), p);
        }
    }

    #[test]
    fn test_swap_mutation_changes_exactly_two_positions() {
        let mut rng = rng_from_seed(Some(42));
        for _ in 0..100 {
            let original: Vec<usize> = (0..8).collect();
            let mut perm = original.clone();
            swap_mutation(&mut perm, &mut rng);
            assert!(is_valid_permutation(&perm, 8));
            assert_eq!(position_distance(&original, &perm), 2);
        }
    }

    #[test]
    fn test_swap_mutation_tiny_permutations() {
        let mut rng = rng_from_seed(Some(42));
        let mut one = vec![0];
        swap_mutation(&mut one, &mut rng);
        assert_eq!(one, vec![0]);

        let mut empty: Vec<usize> = vec![];
        swap_mutation(&mut empty, &mut rng);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_position_distance() {
        assert_eq!(position_distance(&[0, 1, 2], &[0, 1, 2]), 0);
        assert_eq!(position_distance(&[0, 1, 2], &[0, 2, 1]), 2);
        assert_eq!(position_distance(&[2, 1, 0], &[0, 1, 2]), 2);
    }

    #[test]
    fn test_random_order_seeded_is_deterministic() {
        let a = random_order(12, &mut rng_from_seed(Some(99)));
        let b = random_order(12, &mut rng_from_seed(Some(99)));
        assert_eq!(a, b);
        assert!(is_valid_permutation(&a, 12));
    }
}
