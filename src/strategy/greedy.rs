//! Least-loaded-port-first heuristic.

use super::{Solution, Strategy, StrategyKind};
use crate::error::StrategyError;
use crate::eval::Evaluator;
use crate::model::{Catalog, Scenario};
use crate::random::SolverRng;

/// One deterministic pass over the demand types in catalog order.
///
/// Each type goes to the least-loaded port that can still take its full
/// traffic, ties going to the earlier port. When no port has room the
/// least-loaded port is chosen anyway and the evaluator's overflow rule
/// decides where (or whether) the traffic lands.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Builds the greedy assignment, tracking loads with the evaluator's
    /// own placement step.
    pub fn assignment(&self, evaluator: &Evaluator<'_>) -> Vec<usize> {
        let ports = evaluator.catalog().ports();
        let mut loads = vec![0.0; ports.len()];
        let mut assignment = Vec::with_capacity(evaluator.traffic().len());

        for (position, &traffic) in evaluator.traffic().iter().enumerate() {
            let fitting = least_loaded(&loads, |p| loads[p] + traffic <= ports[p].capacity);
            let port = fitting.or_else(|| least_loaded(&loads, |_| true)).unwrap_or(0);
            evaluator.place(&mut loads, position, port);
            assignment.push(port);
        }
        assignment
    }
}

/// Lowest-load port among those passing `filter`, first index on ties.
fn least_loaded(loads: &[f64], filter: impl Fn(usize) -> bool) -> Option<usize> {
    let mut best: Option<usize> = None;
    for p in (0..loads.len()).filter(|&p| filter(p)) {
        if best.map_or(true, |b| loads[p] < loads[b]) {
            best = Some(p);
        }
    }
    best
}

impl Strategy for GreedyStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Greedy
    }

    fn solve(
        &self,
        catalog: &Catalog,
        scenario: &Scenario,
        _rng: &mut SolverRng,
    ) -> Result<Solution, StrategyError> {
        let evaluator = Evaluator::new(catalog, scenario);
        let assignment = self.assignment(&evaluator);
        let load = evaluator.evaluate(&assignment);
        tracing::trace!(?assignment, total = load.total(), "greedy assignment");
        Ok(Solution::assigned(assignment, load))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DemandType, Port};
    use crate::random::create_rng;

    fn two_by_two() -> Catalog {
        Catalog::new(
            vec![DemandType::new("A", 10.0), DemandType::new("B", 100.0)],
            vec![Port::new("P1", 100.0), Port::new("P2", 100.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_places_small_then_large() {
        let catalog = two_by_two();
        let scenario = Scenario::new().with("A", 5).with("B", 1);
        let solution = GreedyStrategy
            .solve(&catalog, &scenario, &mut create_rng(0))
            .unwrap();
        assert_eq!(solution.assignment, Some(vec![0, 1]));
        assert_eq!(solution.load.loads(), &[50.0, 100.0]);
        assert_eq!(solution.load.unassigned(), 0.0);
    }

    #[test]
    fn test_ties_go_to_first_port() {
        let catalog = two_by_two();
        let evaluator = Evaluator::new(&catalog, &Scenario::new());
        assert_eq!(GreedyStrategy.assignment(&evaluator), vec![0, 0]);
    }

    #[test]
    fn test_no_headroom_falls_back_to_least_loaded() {
        let catalog = Catalog::new(
            vec![
                DemandType::new("A", 10.0),
                DemandType::new("B", 100.0),
                DemandType::new("C", 1.0),
            ],
            vec![Port::new("P1", 100.0), Port::new("P2", 100.0)],
        )
        .unwrap();
        // A:60 -> P1, B:300 fits nowhere -> least loaded P2 and dropped,
        // C:50 -> P2 (P1 has 60 and no room for 50).
        let scenario = Scenario::new().with("A", 6).with("B", 3).with("C", 50);
        let evaluator = Evaluator::new(&catalog, &scenario);
        let assignment = GreedyStrategy.assignment(&evaluator);
        assert_eq!(assignment, vec![0, 1, 1]);
        let load = evaluator.evaluate(&assignment);
        assert_eq!(load.loads(), &[60.0, 50.0]);
        assert_eq!(load.unassigned(), 300.0);
    }

    #[test]
    fn test_uses_full_traffic_not_rate() {
        // Each A instance fits on P1, but the whole A traffic does not.
        let catalog = Catalog::new(
            vec![DemandType::new("A", 10.0)],
            vec![Port::new("P1", 50.0), Port::new("P2", 100.0)],
        )
        .unwrap();
        let scenario = Scenario::new().with("A", 8);
        let evaluator = Evaluator::new(&catalog, &scenario);
        assert_eq!(GreedyStrategy.assignment(&evaluator), vec![1]);
    }
}
