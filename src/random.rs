//! Seeded random state shared by the generator and every strategy.
//!
//! All randomness flows through an explicit [`SolverRng`] created from a
//! `u64` seed. Independent streams (one per scenario and strategy) are
//! derived from the global seed with [`derive_seed`], so a result never
//! depends on thread scheduling or on which other strategies ran.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The concrete random state passed to strategies.
pub type SolverRng = StdRng;

/// Creates a reproducible RNG from a seed.
pub fn create_rng(seed: u64) -> SolverRng {
    StdRng::seed_from_u64(seed)
}

/// Derives an independent stream seed from a base seed and a stream id.
///
/// The pair keys a fresh [`StdRng`] whose first output is the new seed.
pub fn derive_seed(base: u64, stream: u64) -> u64 {
    let mut key = <StdRng as SeedableRng>::Seed::default();
    key[..8].copy_from_slice(&base.to_le_bytes());
    key[8..16].copy_from_slice(&stream.to_le_bytes());
    StdRng::from_seed(key).random()
}

/// Samples uniformly from `[lo, hi)`, returning `lo` for an empty range.
///
/// Single-port search spaces have zero-width bounds; `random_range`
/// panics on those.
pub fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

/// Picks an index with probability proportional to `weights`.
///
/// Falls back to a uniform pick when every weight is zero.
///
/// # Panics
/// Panics if `weights` is empty.
pub fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    assert!(!weights.is_empty(), "cannot sample from empty weights");

    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    if total <= 0.0 {
        return rng.random_range(0..weights.len());
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        if w > 0.0 {
            cumulative += w;
            if cumulative > threshold {
                return i;
            }
        }
    }

    // floating-point fallback: last positive weight
    weights
        .iter()
        .rposition(|w| *w > 0.0)
        .unwrap_or(weights.len() - 1)
}
