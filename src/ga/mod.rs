//! Genetic Algorithm.
//!
//! A generational GA built on trait-based abstractions ([`Individual`],
//! [`GaProblem`]) and specialised to port assignments by
//! [`GeneticSearch`]: tournament selection, two-point crossover and
//! shuffle-indexes mutation over a fixed generation budget, returning the
//! best individual seen.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod problem;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use problem::{Chromosome, GeneticSearch};
pub use runner::{GaResult, GaRunner};
pub use types::{GaProblem, Individual};
