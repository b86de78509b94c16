//! ODU-to-framer assignment under port capacity.
//!
//! Compares seven strategies for placing typed traffic demand (ODU
//! instances) onto capacity-bounded ports (framers):
//!
//! - **ILP**: exact instance-level optimum of an integer program solved
//!   with `good_lp`.
//! - **Brute-Force**: exhaustive enumeration of positional assignments.
//! - **Greedy**: least-loaded port that still fits, per demand type.
//! - **Genetic Algorithm (GA)**: population search with tournament
//!   selection, two-point crossover and shuffle mutation.
//! - **Simulated Annealing (SA)**: trajectory search over a relaxed
//!   continuous assignment with pluggable cooling schedules.
//! - **Particle Swarm (PSO)**: velocity-based swarm over the same relaxed
//!   space.
//! - **Ant Colony (ACO)**: pheromone-guided sampling of port choices.
//!
//! All assignment strategies are scored by one [`eval::Evaluator`], whose
//! redirect rule keeps every port within capacity and reports the rest as
//! unassigned traffic. The [`harness`] runs every strategy on every
//! scenario with its own random stream and collects a
//! [`harness::ComparisonReport`].
//!
//! # Example
//!
//! ```
//! use odu_assign::config::AssignConfig;
//! use odu_assign::strategy::{StrategiesConfig, StrategyKind};
//!
//! let config = AssignConfig::default()
//!     .with_scenario_count(2)
//!     .with_strategies(
//!         StrategiesConfig::default().with_enabled([StrategyKind::Greedy]),
//!     );
//! let report = config.run().unwrap();
//! assert_eq!(report.scenario_count(), 2);
//! ```

pub mod aco;
pub mod config;
pub mod error;
pub mod eval;
pub mod ga;
pub mod generator;
pub mod harness;
pub mod model;
pub mod pso;
pub mod random;
pub mod sa;
pub mod search;
pub mod strategy;

pub use config::AssignConfig;
pub use error::{ConfigError, ScenarioError, StrategyError};
