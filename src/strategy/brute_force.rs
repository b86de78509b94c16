//! Exhaustive enumeration of every assignment.

use super::{Solution, Strategy, StrategyKind};
use crate::error::StrategyError;
use crate::eval::Evaluator;
use crate::model::{Catalog, Scenario};
use crate::random::SolverRng;
use crate::search::SearchSpace;
use serde::{Deserialize, Serialize};

/// Tunables for [`BruteForceStrategy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BruteForceConfig {
    /// Largest `ports ^ positions` the strategy agrees to enumerate.
    pub max_assignments: u64,
}

impl Default for BruteForceConfig {
    fn default() -> Self {
        Self {
            max_assignments: 1 << 20,
        }
    }
}

impl BruteForceConfig {
    pub fn with_max_assignments(mut self, n: u64) -> Self {
        self.max_assignments = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_assignments == 0 {
            return Err("max_assignments must be at least 1".into());
        }
        Ok(())
    }
}

/// Enumerates `ports ^ positions` assignments in lexicographic order, the
/// last position varying fastest. Only a strictly better total replaces the
/// incumbent, so the first optimum found wins.
#[derive(Debug, Clone, Default)]
pub struct BruteForceStrategy {
    config: BruteForceConfig,
}

impl BruteForceStrategy {
    pub fn new(config: BruteForceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BruteForceConfig {
        &self.config
    }

    /// Number of assignments in `space`, or `None` on overflow.
    fn space_size(space: &SearchSpace) -> Option<u64> {
        let exponent = u32::try_from(space.positions()).ok()?;
        (space.ports() as u64).checked_pow(exponent)
    }
}

/// Advances `digits` to the next assignment in lexicographic order.
/// Returns `false` after the last one.
fn next_assignment(digits: &mut [usize], base: usize) -> bool {
    for d in digits.iter_mut().rev() {
        *d += 1;
        if *d < base {
            return true;
        }
        *d = 0;
    }
    false
}

impl Strategy for BruteForceStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::BruteForce
    }

    fn solve(
        &self,
        catalog: &Catalog,
        scenario: &Scenario,
        _rng: &mut SolverRng,
    ) -> Result<Solution, StrategyError> {
        let space = SearchSpace::for_catalog(catalog);
        let too_large = StrategyError::SearchSpaceTooLarge {
            positions: space.positions(),
            ports: space.ports(),
            limit: self.config.max_assignments,
        };
        match Self::space_size(&space) {
            Some(n) if n <= self.config.max_assignments => {}
            _ => return Err(too_large),
        }

        let evaluator = Evaluator::new(catalog, scenario);
        let mut current = vec![0usize; space.positions()];
        let mut best_load = evaluator.evaluate(&current);
        let mut best = current.clone();
        let mut visited = 1u64;

        while next_assignment(&mut current, space.ports()) {
            let load = evaluator.evaluate(&current);
            visited += 1;
            if load.total() > best_load.total() {
                best.clone_from(&current);
                best_load = load;
            }
        }

        tracing::trace!(visited, total = best_load.total(), "brute force finished");
        Ok(Solution::assigned(best, best_load))
    }
}
