//! Integer program over per-port instance counts, solved with `good_lp`.

use super::{Solution, Strategy, StrategyKind};
use crate::error::StrategyError;
use crate::model::{Catalog, LoadResult, Scenario};
use crate::random::SolverRng;
use good_lp::solvers::microlp::microlp;
use good_lp::{
    variable, variables, Expression, ResolutionError, Solution as _, SolverModel, Variable,
};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// Tunables for [`IlpStrategy`].
///
/// ```toml
/// [strategies.ilp]
/// enabled = true
/// time_limit_ms = 5000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IlpConfig {
    /// Capability flag. A disabled solver reports the strategy unavailable.
    pub enabled: bool,

    /// Wall-clock limit for one solve.
    pub time_limit_ms: u64,
}

impl Default for IlpConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            time_limit_ms: 10_000,
        }
    }
}

impl IlpConfig {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }
}

/// Instance-count program for one scenario.
///
/// `x[o][p]` counts instances of demand type `o` placed on port `p` and
/// `u[o]` counts dropped instances. Each type's counts add up to its
/// scenario count, port loads stay within capacity and the placed
/// bandwidth is maximized. Instances of one type may split across ports.
///
/// Holds only owned inputs so it can be moved to the solver thread.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceModel {
    rates: Vec<f64>,
    counts: Vec<u32>,
    capacities: Vec<f64>,
}

impl InstanceModel {
    pub fn new(catalog: &Catalog, scenario: &Scenario) -> Self {
        Self {
            rates: catalog.demand_types().iter().map(|d| d.rate).collect(),
            counts: catalog
                .demand_types()
                .iter()
                .map(|d| scenario.count(&d.name))
                .collect(),
            capacities: catalog.ports().iter().map(|p| p.capacity).collect(),
        }
    }

    /// Placement and drop variables.
    pub fn variable_count(&self) -> usize {
        self.rates.len() * (self.capacities.len() + 1)
    }

    /// Count rows plus capacity rows.
    pub fn constraint_count(&self) -> usize {
        self.rates.len() + self.capacities.len()
    }

    /// Optimal placed instances, indexed `[type][port]`.
    pub fn solve(&self) -> Result<Vec<Vec<u32>>, ResolutionError> {
        let mut vars = variables!();
        let placed: Vec<Vec<Variable>> = self
            .counts
            .iter()
            .enumerate()
            .map(|(o, &count)| {
                (0..self.capacities.len())
                    .map(|p| {
                        vars.add(
                            variable()
                                .integer()
                                .min(0.0)
                                .max(f64::from(count))
                                .name(format!("x_{o}_{p}")),
                        )
                    })
                    .collect()
            })
            .collect();
        let dropped: Vec<Variable> = self
            .counts
            .iter()
            .enumerate()
            .map(|(o, &count)| {
                vars.add(
                    variable()
                        .integer()
                        .min(0.0)
                        .max(f64::from(count))
                        .name(format!("u_{o}")),
                )
            })
            .collect();

        let objective: Expression = placed
            .iter()
            .zip(&self.rates)
            .flat_map(|(row, &rate)| row.iter().map(move |&x| rate * x))
            .sum();
        let mut problem = vars.maximise(objective).using(microlp);

        for ((row, &u), &count) in placed.iter().zip(&dropped).zip(&self.counts) {
            let instances = row.iter().copied().sum::<Expression>() + u;
            problem.add_constraint(instances.eq(f64::from(count)));
        }
        for (p, &capacity) in self.capacities.iter().enumerate() {
            let load: Expression = placed
                .iter()
                .zip(&self.rates)
                .map(|(row, &rate)| rate * row[p])
                .sum();
            problem.add_constraint(load.leq(capacity));
        }

        let solution = problem.solve()?;
        Ok(placed
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&x| solution.value(x).round().max(0.0) as u32)
                    .collect()
            })
            .collect())
    }

    /// Port loads for placed counts, clamped to capacity against solver
    /// rounding.
    fn loads(&self, placed: &[Vec<u32>]) -> Vec<f64> {
        self.capacities
            .iter()
            .enumerate()
            .map(|(p, &capacity)| {
                let load: f64 = placed
                    .iter()
                    .zip(&self.rates)
                    .map(|(row, &rate)| rate * f64::from(row[p]))
                    .sum();
                load.min(capacity)
            })
            .collect()
    }
}

/// Runs the solve on a worker thread and waits at most `limit`.
///
/// A solve that overruns keeps its thread until it finishes; its result is
/// discarded.
fn solve_with_limit(model: InstanceModel, limit: Duration) -> Result<Vec<Vec<u32>>, StrategyError> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("ilp-solver".into())
        .spawn(move || {
            let _ = tx.send(model.solve());
        })
        .map_err(|err| StrategyError::Solver(format!("failed to start solver thread: {err}")))?;

    match rx.recv_timeout(limit) {
        Ok(Ok(placed)) => Ok(placed),
        Ok(Err(err)) => Err(StrategyError::Solver(format!("ILP solve failed: {err}"))),
        Err(RecvTimeoutError::Timeout) => Err(StrategyError::Solver(format!(
            "ILP solver exceeded its time limit of {} ms",
            limit.as_millis()
        ))),
        Err(RecvTimeoutError::Disconnected) => Err(StrategyError::Solver(
            "ILP solver stopped without a result".into(),
        )),
    }
}

/// Exact instance-level optimum via a mixed-integer solver.
///
/// The result carries no assignment: the optimum may split a type's
/// instances over several ports, which a positional assignment cannot
/// express.
#[derive(Debug, Clone, Default)]
pub struct IlpStrategy {
    config: IlpConfig,
}

impl IlpStrategy {
    pub fn new(config: IlpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IlpConfig {
        &self.config
    }
}

impl Strategy for IlpStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Ilp
    }

    fn solve(
        &self,
        catalog: &Catalog,
        scenario: &Scenario,
        _rng: &mut SolverRng,
    ) -> Result<Solution, StrategyError> {
        if !self.config.enabled {
            return Err(StrategyError::Unavailable("ILP solver disabled".into()));
        }

        let model = InstanceModel::new(catalog, scenario);
        let started = Instant::now();
        let placed = solve_with_limit(
            model.clone(),
            Duration::from_millis(self.config.time_limit_ms),
        )?;
        tracing::debug!(
            variables = model.variable_count(),
            constraints = model.constraint_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "ILP solved"
        );

        Ok(Solution::without_assignment(LoadResult::new(
            model.loads(&placed),
            catalog.total_traffic(scenario),
        )))
    }
}
