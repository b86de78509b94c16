//! Ant Colony Optimization (ACO).
//!
//! Ants build assignments position by position, choosing ports in
//! proportion to a pheromone matrix that good assignments reinforce.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

mod config;
mod runner;

pub use config::{AcoConfig, PheromoneUpdate};
pub use runner::AntColonySearch;
