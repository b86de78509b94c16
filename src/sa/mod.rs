//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic. Worsening moves are accepted
//! with a probability that decreases with temperature, letting the walk
//! escape local optima. [`AnnealingSearch`] applies it to a continuous
//! relaxation of the assignment space, rounding points to port indices.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod problem;
mod runner;
mod types;

pub use config::{CoolingSchedule, SaConfig};
pub use problem::AnnealingSearch;
pub use runner::{SaResult, SaRunner};
pub use types::SaProblem;
