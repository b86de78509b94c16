//! Common contract for the stochastic assignment searches.
//!
//! The genetic, annealing, swarm and colony searches all explore the same
//! discrete space (one port index per demand-type position) and maximize
//! the same [`Objective`]. Each implements [`AssignmentSearch`]; the
//! strategy layer wraps them and re-evaluates their best assignment so
//! every reported result comes from the evaluator.

use crate::error::StrategyError;
use crate::model::Catalog;
use rand::Rng;

/// Scores an assignment. Higher is better.
///
/// Implementations must be pure: the same assignment always yields the
/// same score.
pub trait Objective: Sync {
    fn score(&self, assignment: &[usize]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[usize]) -> f64 + Sync,
{
    fn score(&self, assignment: &[usize]) -> f64 {
        self(assignment)
    }
}

/// Bounds of the discrete search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSpace {
    positions: usize,
    ports: usize,
}

impl SearchSpace {
    /// Creates a space of `positions` genes, each taking a value in
    /// `0..ports`.
    pub fn new(positions: usize, ports: usize) -> Result<Self, StrategyError> {
        if positions == 0 || ports == 0 {
            return Err(StrategyError::InvalidBounds { positions, ports });
        }
        Ok(Self { positions, ports })
    }

    /// The space spanned by a catalog. Always valid.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            positions: catalog.position_count(),
            ports: catalog.port_count(),
        }
    }

    pub fn positions(&self) -> usize {
        self.positions
    }

    pub fn ports(&self) -> usize {
        self.ports
    }

    /// Upper bound of the continuous relaxation, `ports - 1`.
    pub fn upper(&self) -> f64 {
        (self.ports - 1) as f64
    }

    /// Rounds a continuous point to the nearest valid port indices.
    pub fn round(&self, point: &[f64]) -> Vec<usize> {
        point
            .iter()
            .map(|&x| {
                let x = if x.is_finite() { x } else { 0.0 };
                x.round().clamp(0.0, self.upper()) as usize
            })
            .collect()
    }

    /// Draws a uniformly random assignment.
    pub fn random_assignment<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        (0..self.positions)
            .map(|_| rng.random_range(0..self.ports))
            .collect()
    }
}

/// Result of one search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Best assignment found.
    pub best: Vec<usize>,
    /// Objective score of `best`.
    pub best_score: f64,
    /// Number of iterations (generations, steps) executed.
    pub iterations: usize,
    /// Number of objective evaluations.
    pub evaluations: usize,
    /// Best score after each iteration, starting with the initial best.
    pub score_history: Vec<f64>,
}

/// A stochastic search over port assignments.
pub trait AssignmentSearch: Send + Sync {
    /// Searches `space` for the assignment maximizing `objective`.
    ///
    /// Must be deterministic for a given RNG state.
    fn search<O, R>(
        &self,
        objective: &O,
        space: &SearchSpace,
        rng: &mut R,
    ) -> Result<SearchOutcome, StrategyError>
    where
        O: Objective + ?Sized,
        R: Rng;
}
