//! Error types.
//!
//! Capacity overflow is deliberately absent: traffic that fits nowhere is
//! reported as unassigned load, never as an error.

use thiserror::Error;

/// Invalid static configuration. Raised once, before any strategy runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("demand catalog is empty")]
    EmptyDemandCatalog,

    #[error("port catalog is empty")]
    NoPorts,

    #[error("demand type {name} has invalid rate {rate}; rates must be finite and positive")]
    InvalidRate { name: String, rate: f64 },

    #[error("port {name} has invalid capacity {capacity}; capacities must be finite and non-negative")]
    InvalidCapacity { name: String, capacity: f64 },

    #[error("duplicate name in catalog: {0}")]
    DuplicateName(String),

    #[error("scenario ceiling must be finite and non-negative, got {0}")]
    InvalidCeiling(f64),

    #[error("invalid {strategy} settings: {message}")]
    InvalidTunable {
        strategy: &'static str,
        message: String,
    },

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Failure of a single strategy run.
///
/// The harness records these per (scenario, strategy) pair and keeps going.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrategyError {
    /// A capability the strategy needs is not present.
    #[error("strategy unavailable: {0}")]
    Unavailable(String),

    #[error("malformed search bounds: {positions} positions over {ports} ports")]
    InvalidBounds { positions: usize, ports: usize },

    #[error("search space of {ports}^{positions} assignments exceeds the limit of {limit}")]
    SearchSpaceTooLarge {
        positions: usize,
        ports: usize,
        limit: u64,
    },

    #[error("solver error: {0}")]
    Solver(String),
}

/// A scenario that does not match the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("scenario {index} references unknown demand type {name}")]
    UnknownDemandType { index: usize, name: String },
}

