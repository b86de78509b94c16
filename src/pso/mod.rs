//! Particle Swarm Optimization (PSO).
//!
//! A swarm of particles moves through a continuous relaxation of the
//! assignment space, each pulled towards its own best point and the swarm's
//! best point.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"

mod config;
mod runner;

pub use config::PsoConfig;
pub use runner::ParticleSwarmSearch;
