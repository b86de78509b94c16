//! Genetic operators for integer-vector chromosomes.
//!
//! # Crossover
//!
//! - [`two_point_crossover`]: exchange the segment between two cut points
//!
//! # Mutation
//!
//! - [`shuffle_indexes_mutation`]: swap genes with random other positions
//!
//! Both operators keep every gene value inside its original domain, so a
//! valid port vector stays valid.

use rand::Rng;

/// Two-point crossover.
///
/// Draws two distinct cut points `1 <= a < b <= n` and swaps the segment
/// `[a, b)` between the parents. Chromosomes shorter than two genes are
/// returned unchanged.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn two_point_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    if n < 2 {
        return (child1, child2);
    }

    let mut a = rng.random_range(1..=n);
    let mut b = rng.random_range(1..n);
    if b >= a {
        b += 1;
    } else {
        std::mem::swap(&mut a, &mut b);
    }

    child1[a..b].clone_from_slice(&parent2[a..b]);
    child2[a..b].clone_from_slice(&parent1[a..b]);
    (child1, child2)
}

/// Shuffle-indexes mutation.
///
/// Each position is, with probability `indpb`, swapped with a different
/// position drawn uniformly. Chromosomes shorter than two genes are left
/// untouched.
pub fn shuffle_indexes_mutation<T, R: Rng>(genes: &mut [T], indpb: f64, rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        if rng.random_range(0.0..1.0) < indpb {
            let mut j = rng.random_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            genes.swap(i, j);
        }
    }
}
