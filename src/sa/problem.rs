//! Continuous relaxation of the assignment problem for SA.
//!
//! Each position holds a real value in `[0, ports - 1]`; the point is
//! rounded to port indices whenever it is scored.

use super::config::SaConfig;
use super::runner::SaRunner;
use super::types::SaProblem;
use crate::error::StrategyError;
use crate::random::uniform;
use crate::search::{AssignmentSearch, Objective, SearchOutcome, SearchSpace};
use rand::Rng;

struct RelaxedAssignment<'a, O: ?Sized> {
    objective: &'a O,
    space: SearchSpace,
}

impl<O: Objective + ?Sized> SaProblem for RelaxedAssignment<'_, O> {
    type Solution = Vec<f64>;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.space.positions())
            .map(|_| uniform(rng, 0.0, self.space.upper()))
            .collect()
    }

    fn cost(&self, point: &Vec<f64>) -> f64 {
        -self.objective.score(&self.space.round(point))
    }

    /// Moves one coordinate by up to one full span, clamped to the bounds.
    fn neighbor<R: Rng>(&self, point: &Vec<f64>, rng: &mut R) -> Vec<f64> {
        let upper = self.space.upper();
        let mut next = point.clone();
        let i = rng.random_range(0..next.len());
        let span = upper.max(1.0);
        next[i] = (next[i] + uniform(rng, -span, span)).clamp(0.0, upper);
        next
    }
}

/// Simulated annealing over the relaxed assignment space.
#[derive(Debug, Clone, Default)]
pub struct AnnealingSearch {
    config: SaConfig,
}

impl AnnealingSearch {
    pub fn new(config: SaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }
}

impl AssignmentSearch for AnnealingSearch {
    fn search<O, R>(
        &self,
        objective: &O,
        space: &SearchSpace,
        rng: &mut R,
    ) -> Result<SearchOutcome, StrategyError>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        let problem = RelaxedAssignment {
            objective,
            space: *space,
        };
        let result = SaRunner::run(&problem, &self.config, rng).map_err(StrategyError::Solver)?;

        Ok(SearchOutcome {
            best: space.round(&result.best),
            best_score: -result.best_cost,
            iterations: result.iterations,
            evaluations: result.iterations + 1,
            score_history: result.cost_history.iter().map(|c| -c).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn count_ones(a: &[usize]) -> f64 {
        a.iter().filter(|&&p| p == 1).count() as f64
    }

    #[test]
    fn test_finds_all_ones() {
        let space = SearchSpace::new(6, 2).unwrap();
        let out = AnnealingSearch::default()
            .search(&count_ones, &space, &mut create_rng(42))
            .unwrap();
        assert_eq!(out.best, vec![1; 6]);
        assert_eq!(out.best_score, 6.0);
    }

    #[test]
    fn test_best_score_matches_rounded_point() {
        let space = SearchSpace::new(5, 3).unwrap();
        let obj = |a: &[usize]| a.iter().map(|&p| if p == 2 { 3.0 } else { p as f64 }).sum();
        let out = AnnealingSearch::new(SaConfig::default().with_max_iterations(50))
            .search(&obj, &space, &mut create_rng(5))
            .unwrap();
        assert!(out.best.iter().all(|&p| p < 3));
        assert_eq!(out.best_score, obj(&out.best));
    }

    #[test]
    fn test_single_port_space() {
        let space = SearchSpace::new(3, 1).unwrap();
        let out = AnnealingSearch::default()
            .search(&count_ones, &space, &mut create_rng(1))
            .unwrap();
        assert_eq!(out.best, vec![0, 0, 0]);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let space = SearchSpace::new(4, 2).unwrap();
        let a = AnnealingSearch::default()
            .search(&count_ones, &space, &mut create_rng(11))
            .unwrap();
        let b = AnnealingSearch::default()
            .search(&count_ones, &space, &mut create_rng(11))
            .unwrap();
        assert_eq!(a, b);
    }
}
