//! The seven compared assignment strategies.
//!
//! Every strategy implements [`Strategy`]: given a catalog, a scenario and
//! a private random stream it returns a [`Solution`] whose load result is
//! computed by the evaluator (or, for the ILP, from solver values that
//! already respect capacity).
//!
//! | Kind | Type |
//! |------|------|
//! | ILP | [`IlpStrategy`] |
//! | Brute-Force | [`BruteForceStrategy`] |
//! | Greedy | [`GreedyStrategy`] |
//! | Genetic, Simulated Annealing, Particle Swarm, Ant Colony | [`MetaheuristicStrategy`] |

mod brute_force;
mod greedy;
mod ilp;
mod kind;
mod metaheuristic;

pub use brute_force::{BruteForceConfig, BruteForceStrategy};
pub use greedy::GreedyStrategy;
pub use ilp::{IlpConfig, IlpStrategy, InstanceModel};
pub use kind::StrategyKind;
pub use metaheuristic::MetaheuristicStrategy;

use crate::aco::AcoConfig;
use crate::error::{ConfigError, StrategyError};
use crate::ga::GaConfig;
use crate::model::{Catalog, LoadResult, Scenario};
use crate::pso::PsoConfig;
use crate::random::SolverRng;
use crate::sa::SaConfig;
use serde::{Deserialize, Serialize};

/// What a strategy produced for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Winning positional assignment, when the strategy works with one.
    pub assignment: Option<Vec<usize>>,
    pub load: LoadResult,
}

impl Solution {
    pub fn assigned(assignment: Vec<usize>, load: LoadResult) -> Self {
        Self {
            assignment: Some(assignment),
            load,
        }
    }

    pub fn without_assignment(load: LoadResult) -> Self {
        Self {
            assignment: None,
            load,
        }
    }
}

/// A procedure that assigns a scenario's demand to ports.
pub trait Strategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Solves one scenario. Stochastic strategies draw only from `rng`.
    fn solve(
        &self,
        catalog: &Catalog,
        scenario: &Scenario,
        rng: &mut SolverRng,
    ) -> Result<Solution, StrategyError>;
}

/// Per-strategy tunables and the set of strategies to run.
///
/// Mirrors the `[strategies]` table of the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategiesConfig {
    /// Strategies to run. Results are always reported in canonical order.
    pub enabled: Vec<StrategyKind>,
    pub brute_force: BruteForceConfig,
    pub ilp: IlpConfig,
    pub genetic: GaConfig,
    pub annealing: SaConfig,
    pub swarm: PsoConfig,
    pub colony: AcoConfig,
}

impl Default for StrategiesConfig {
    fn default() -> Self {
        Self {
            enabled: StrategyKind::ALL.to_vec(),
            brute_force: BruteForceConfig::default(),
            ilp: IlpConfig::default(),
            genetic: GaConfig::default(),
            annealing: SaConfig::default(),
            swarm: PsoConfig::default(),
            colony: AcoConfig::default(),
        }
    }
}

impl StrategiesConfig {
    pub fn with_enabled(mut self, kinds: impl IntoIterator<Item = StrategyKind>) -> Self {
        self.enabled = kinds.into_iter().collect();
        self
    }

    pub fn with_ilp(mut self, ilp: IlpConfig) -> Self {
        self.ilp = ilp;
        self
    }

    /// Validates every tunable block, naming the offending strategy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lift = |strategy: &'static str, result: Result<(), String>| {
            result.map_err(|message| ConfigError::InvalidTunable { strategy, message })
        };
        if self.enabled.is_empty() {
            return Err(ConfigError::InvalidTunable {
                strategy: "strategies",
                message: "no strategy enabled".into(),
            });
        }
        lift("brute_force", self.brute_force.validate())?;
        lift("genetic", self.genetic.validate())?;
        lift("annealing", self.annealing.validate())?;
        lift("swarm", self.swarm.validate())?;
        lift("colony", self.colony.validate())?;
        Ok(())
    }

    /// Builds the enabled strategies in canonical order.
    pub fn build(&self) -> Vec<Box<dyn Strategy>> {
        StrategyKind::ALL
            .into_iter()
            .filter(|kind| self.enabled.contains(kind))
            .map(|kind| self.build_one(kind))
            .collect()
    }

    fn build_one(&self, kind: StrategyKind) -> Box<dyn Strategy> {
        match kind {
            StrategyKind::Ilp => Box::new(IlpStrategy::new(self.ilp.clone())),
            StrategyKind::BruteForce => {
                Box::new(BruteForceStrategy::new(self.brute_force.clone()))
            }
            StrategyKind::Greedy => Box::new(GreedyStrategy::new()),
            StrategyKind::Genetic => {
                Box::new(MetaheuristicStrategy::genetic(self.genetic.clone()))
            }
            StrategyKind::SimulatedAnnealing => {
                Box::new(MetaheuristicStrategy::annealing(self.annealing.clone()))
            }
            StrategyKind::ParticleSwarm => {
                Box::new(MetaheuristicStrategy::swarm(self.swarm.clone()))
            }
            StrategyKind::AntColony => Box::new(MetaheuristicStrategy::colony(self.colony.clone())),
        }
    }
}
