//! Per-run outcomes and the aggregated comparison report.

use crate::model::LoadResult;
use crate::strategy::StrategyKind;
use serde::Serialize;
use std::time::Duration;

/// Result of one (scenario, strategy) run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// The strategy produced a load result, possibly with unassigned
    /// traffic.
    Solved {
        load: LoadResult,
        assignment: Option<Vec<usize>>,
    },
    /// A capability the strategy needs is switched off or missing.
    Unavailable { reason: String },
    /// The strategy returned an error or panicked.
    Failed { reason: String },
}

/// One strategy's outcome on one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyOutcome {
    pub strategy: StrategyKind,
    pub status: OutcomeStatus,
    pub elapsed: Duration,
}

impl StrategyOutcome {
    pub fn load(&self) -> Option<&LoadResult> {
        match &self.status {
            OutcomeStatus::Solved { load, .. } => Some(load),
            _ => None,
        }
    }

    /// Unassigned traffic, for solved runs only.
    pub fn unassigned(&self) -> Option<f64> {
        self.load().map(LoadResult::unassigned)
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.status, OutcomeStatus::Solved { .. })
    }
}

/// All strategies' outcomes on one scenario, in strategy order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioRun {
    pub index: usize,
    pub total_traffic: f64,
    pub outcomes: Vec<StrategyOutcome>,
}

/// One strategy's outcomes across scenarios.
///
/// `outcomes()[i]` belongs to scenario `i` of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategySeries {
    strategy: StrategyKind,
    outcomes: Vec<StrategyOutcome>,
    mean_elapsed_secs: f64,
}

impl StrategySeries {
    fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            outcomes: Vec::new(),
            mean_elapsed_secs: 0.0,
        }
    }

    fn push(&mut self, outcome: StrategyOutcome) {
        let n = (self.outcomes.len() + 1) as f64;
        self.mean_elapsed_secs += (outcome.elapsed.as_secs_f64() - self.mean_elapsed_secs) / n;
        self.outcomes.push(outcome);
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    pub fn outcomes(&self) -> &[StrategyOutcome] {
        &self.outcomes
    }

    /// Load result per scenario, `None` where the run did not solve.
    pub fn loads(&self) -> Vec<Option<&LoadResult>> {
        self.outcomes.iter().map(StrategyOutcome::load).collect()
    }

    /// Unassigned traffic per scenario, `None` where the run did not solve.
    pub fn unassigned(&self) -> Vec<Option<f64>> {
        self.outcomes.iter().map(StrategyOutcome::unassigned).collect()
    }

    /// Running average of elapsed time over all runs.
    pub fn mean_elapsed(&self) -> Duration {
        Duration::from_secs_f64(self.mean_elapsed_secs)
    }

    /// Presentation summary over `ports` ports.
    pub fn summary(&self, ports: usize) -> StrategySummary {
        let solved: Vec<&LoadResult> = self.outcomes.iter().filter_map(|o| o.load()).collect();
        let unavailable = self
            .outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Unavailable { .. }))
            .count();
        let failed = self
            .outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Failed { .. }))
            .count();

        let (mean_load_per_port, mean_unassigned) = if solved.is_empty() {
            (vec![0.0; ports], None)
        } else {
            let n = solved.len() as f64;
            let mut loads = vec![0.0; ports];
            for load in &solved {
                for (acc, &l) in loads.iter_mut().zip(load.loads()) {
                    *acc += l;
                }
            }
            for acc in &mut loads {
                *acc /= n;
            }
            let unassigned = solved.iter().map(|l| l.unassigned()).sum::<f64>() / n;
            (loads, Some(unassigned))
        };

        StrategySummary {
            strategy: self.strategy,
            solved: solved.len(),
            unavailable,
            failed,
            mean_load_per_port,
            mean_unassigned,
            mean_elapsed_secs: self.mean_elapsed_secs,
        }
    }
}

/// Aggregates over a strategy's solved runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategySummary {
    pub strategy: StrategyKind,
    pub solved: usize,
    pub unavailable: usize,
    pub failed: usize,
    /// Mean load per port over solved runs, in catalog port order.
    pub mean_load_per_port: Vec<f64>,
    /// `None` when no run solved.
    pub mean_unassigned: Option<f64>,
    pub mean_elapsed_secs: f64,
}

/// Outcomes of a comparison run, keyed by strategy and scenario index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    port_names: Vec<String>,
    scenario_traffic: Vec<f64>,
    series: Vec<StrategySeries>,
}

impl ComparisonReport {
    pub(crate) fn new(port_names: Vec<String>, strategies: &[StrategyKind]) -> Self {
        Self {
            port_names,
            scenario_traffic: Vec::new(),
            series: strategies.iter().map(|&k| StrategySeries::new(k)).collect(),
        }
    }

    /// Appends one scenario's outcomes. Runs must arrive in index order.
    pub(crate) fn record(&mut self, run: ScenarioRun) {
        debug_assert_eq!(run.index, self.scenario_traffic.len());
        self.scenario_traffic.push(run.total_traffic);
        for outcome in run.outcomes {
            if let Some(series) = self.series.iter_mut().find(|s| s.strategy == outcome.strategy) {
                series.push(outcome);
            }
        }
    }

    pub fn port_names(&self) -> &[String] {
        &self.port_names
    }

    pub fn scenario_count(&self) -> usize {
        self.scenario_traffic.len()
    }

    /// Total demand of each scenario.
    pub fn scenario_traffic(&self) -> &[f64] {
        &self.scenario_traffic
    }

    /// Series in canonical strategy order.
    pub fn series(&self) -> &[StrategySeries] {
        &self.series
    }

    pub fn strategy(&self, kind: StrategyKind) -> Option<&StrategySeries> {
        self.series.iter().find(|s| s.strategy == kind)
    }

    pub fn summaries(&self) -> Vec<StrategySummary> {
        self.series
            .iter()
            .map(|s| s.summary(self.port_names.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved(kind: StrategyKind, loads: Vec<f64>, demand: f64, ms: u64) -> StrategyOutcome {
        StrategyOutcome {
            strategy: kind,
            status: OutcomeStatus::Solved {
                load: LoadResult::new(loads, demand),
                assignment: None,
            },
            elapsed: Duration::from_millis(ms),
        }
    }

    fn report() -> ComparisonReport {
        let mut report = ComparisonReport::new(
            vec!["P1".into(), "P2".into()],
            &[StrategyKind::Ilp, StrategyKind::Greedy],
        );
        report.record(ScenarioRun {
            index: 0,
            total_traffic: 150.0,
            outcomes: vec![
                StrategyOutcome {
                    strategy: StrategyKind::Ilp,
                    status: OutcomeStatus::Unavailable {
                        reason: "ILP solver disabled".into(),
                    },
                    elapsed: Duration::from_millis(0),
                },
                solved(StrategyKind::Greedy, vec![50.0, 100.0], 150.0, 10),
            ],
        });
        report.record(ScenarioRun {
            index: 1,
            total_traffic: 300.0,
            outcomes: vec![
                StrategyOutcome {
                    strategy: StrategyKind::Ilp,
                    status: OutcomeStatus::Failed {
                        reason: "boom".into(),
                    },
                    elapsed: Duration::from_millis(2),
                },
                solved(StrategyKind::Greedy, vec![0.0, 0.0], 300.0, 30),
            ],
        });
        report
    }

    #[test]
    fn test_series_keep_scenario_order() {
        let report = report();
        assert_eq!(report.scenario_count(), 2);
        assert_eq!(report.scenario_traffic(), &[150.0, 300.0]);
        let greedy = report.strategy(StrategyKind::Greedy).unwrap();
        assert_eq!(greedy.unassigned(), vec![Some(0.0), Some(300.0)]);
        let ilp = report.strategy(StrategyKind::Ilp).unwrap();
        assert_eq!(ilp.unassigned(), vec![None, None]);
        assert_eq!(ilp.loads(), vec![None, None]);
    }

    #[test]
    fn test_running_mean_elapsed() {
        let report = report();
        let greedy = report.strategy(StrategyKind::Greedy).unwrap();
        assert!((greedy.mean_elapsed().as_secs_f64() - 0.020).abs() < 1e-9);
    }

    #[test]
    fn test_summaries() {
        let summaries = report().summaries();
        let ilp = &summaries[0];
        assert_eq!((ilp.solved, ilp.unavailable, ilp.failed), (0, 1, 1));
        assert_eq!(ilp.mean_unassigned, None);
        assert_eq!(ilp.mean_load_per_port, vec![0.0, 0.0]);

        let greedy = &summaries[1];
        assert_eq!(greedy.solved, 2);
        assert_eq!(greedy.mean_load_per_port, vec![25.0, 50.0]);
        assert_eq!(greedy.mean_unassigned, Some(150.0));
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = StrategyOutcome {
            strategy: StrategyKind::Ilp,
            status: OutcomeStatus::Unavailable {
                reason: "ILP solver disabled".into(),
            },
            elapsed: Duration::from_millis(1),
        };
        let text = toml::to_string(&outcome).unwrap();
        assert!(text.contains("strategy = \"ILP\""), "{text}");
        assert!(text.contains("status = \"unavailable\""), "{text}");
    }
}
