//! Runs every strategy on every scenario and collects the results.
//!
//! Strategies for one scenario may run concurrently on a bounded rayon
//! pool. Each run gets its own random stream derived from the global seed,
//! the scenario index and the strategy kind, so outcomes do not depend on
//! scheduling or on which other strategies are enabled. A strategy that
//! errors or panics is recorded as failed; the others carry on.

mod report;

pub use report::{
    ComparisonReport, OutcomeStatus, ScenarioRun, StrategyOutcome, StrategySeries,
    StrategySummary,
};

use crate::error::{ScenarioError, StrategyError};
use crate::model::{Catalog, Scenario};
use crate::random::{create_rng, derive_seed};
use crate::strategy::{Strategy, StrategyKind};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

/// Worker pool settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Threads in the pool. Only used when `parallel` is set.
    pub workers: usize,
    /// Run the strategies of one scenario concurrently.
    pub parallel: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            parallel: true,
        }
    }
}

impl HarnessConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.workers == 0 {
            return Err("workers must be at least 1".into());
        }
        Ok(())
    }
}

/// Compares a fixed set of strategies over scenarios of one catalog.
pub struct ComparisonHarness {
    catalog: Catalog,
    strategies: Vec<Box<dyn Strategy>>,
    settings: HarnessConfig,
    seed: u64,
}

impl ComparisonHarness {
    pub fn new(catalog: Catalog, strategies: Vec<Box<dyn Strategy>>, seed: u64) -> Self {
        Self {
            catalog,
            strategies,
            settings: HarnessConfig::default(),
            seed,
        }
    }

    pub fn with_settings(mut self, settings: HarnessConfig) -> Self {
        self.settings = settings;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn strategy_kinds(&self) -> Vec<StrategyKind> {
        self.strategies.iter().map(|s| s.kind()).collect()
    }

    /// Runs every strategy on one scenario.
    pub fn run_scenario(
        &self,
        index: usize,
        scenario: &Scenario,
    ) -> Result<ScenarioRun, ScenarioError> {
        self.catalog.check_scenario(index, scenario)?;
        let pool = self.build_pool();
        Ok(self.run_checked(pool.as_ref(), index, scenario))
    }

    /// Runs every strategy on every scenario, in scenario order.
    ///
    /// All scenarios are checked against the catalog before any strategy
    /// runs.
    pub fn run(&self, scenarios: &[Scenario]) -> Result<ComparisonReport, ScenarioError> {
        for (index, scenario) in scenarios.iter().enumerate() {
            self.catalog.check_scenario(index, scenario)?;
        }

        let started = Instant::now();
        let pool = self.build_pool();
        let port_names = self.catalog.ports().iter().map(|p| p.name.clone()).collect();
        let mut report = ComparisonReport::new(port_names, &self.strategy_kinds());

        for (index, scenario) in scenarios.iter().enumerate() {
            report.record(self.run_checked(pool.as_ref(), index, scenario));
        }

        tracing::info!(
            scenarios = scenarios.len(),
            strategies = self.strategies.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "comparison finished"
        );
        Ok(report)
    }

    fn build_pool(&self) -> Option<ThreadPool> {
        if !self.settings.parallel || self.strategies.len() < 2 {
            return None;
        }
        match ThreadPoolBuilder::new()
            .num_threads(self.settings.workers.max(1))
            .build()
        {
            Ok(pool) => Some(pool),
            Err(err) => {
                tracing::warn!(%err, "failed to build worker pool; running sequentially");
                None
            }
        }
    }

    fn run_checked(&self, pool: Option<&ThreadPool>, index: usize, scenario: &Scenario) -> ScenarioRun {
        let total_traffic = self.catalog.total_traffic(scenario);
        let outcomes: Vec<StrategyOutcome> = match pool {
            Some(pool) => pool.install(|| {
                self.strategies
                    .par_iter()
                    .map(|s| self.run_strategy(index, scenario, s.as_ref()))
                    .collect()
            }),
            None => self
                .strategies
                .iter()
                .map(|s| self.run_strategy(index, scenario, s.as_ref()))
                .collect(),
        };

        tracing::info!(
            scenario = index,
            total_traffic,
            solved = outcomes.iter().filter(|o| o.is_solved()).count(),
            "scenario finished"
        );

        ScenarioRun {
            index,
            total_traffic,
            outcomes,
        }
    }

    fn run_strategy(&self, index: usize, scenario: &Scenario, strategy: &dyn Strategy) -> StrategyOutcome {
        let kind = strategy.kind();
        let seed = derive_seed(derive_seed(self.seed, index as u64), kind.index());
        let mut rng = create_rng(seed);

        let started = Instant::now();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            strategy.solve(&self.catalog, scenario, &mut rng)
        }));
        let elapsed = started.elapsed();

        let status = match result {
            Ok(Ok(solution)) => {
                tracing::debug!(
                    scenario = index,
                    strategy = %kind,
                    total = solution.load.total(),
                    unassigned = solution.load.unassigned(),
                    elapsed_us = elapsed.as_micros() as u64,
                    "strategy solved"
                );
                OutcomeStatus::Solved {
                    load: solution.load,
                    assignment: solution.assignment,
                }
            }
            Ok(Err(StrategyError::Unavailable(reason))) => {
                tracing::warn!(scenario = index, strategy = %kind, %reason, "strategy unavailable");
                OutcomeStatus::Unavailable { reason }
            }
            Ok(Err(err)) => {
                tracing::warn!(scenario = index, strategy = %kind, %err, "strategy failed");
                OutcomeStatus::Failed {
                    reason: err.to_string(),
                }
            }
            Err(payload) => {
                let reason = format!("panicked: {}", panic_message(payload.as_ref()));
                tracing::warn!(scenario = index, strategy = %kind, %reason, "strategy panicked");
                OutcomeStatus::Failed { reason }
            }
        };

        StrategyOutcome {
            strategy: kind,
            status,
            elapsed,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
