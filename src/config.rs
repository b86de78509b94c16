//! Top-level configuration, loaded from TOML.
//!
//! Every field has a default, so an empty file reproduces the reference
//! study: four ODU types, two 500-unit framers, 30 scenarios under a
//! ceiling of 1000 and seed 42.
//!
//! ```toml
//! seed = 7
//!
//! [[ports]]
//! name = "Framer1"
//! capacity = 500.0
//!
//! [[ports]]
//! name = "Framer2"
//! capacity = 500.0
//!
//! [generator]
//! scenario_count = 10
//!
//! [harness]
//! workers = 2
//!
//! [strategies]
//! enabled = ["ILP", "Greedy", "Genetic"]
//!
//! [strategies.genetic]
//! population_size = 20
//! ```

use crate::error::{ConfigError, ScenarioError};
use crate::generator::ScenarioGenerator;
use crate::harness::{ComparisonHarness, ComparisonReport, HarnessConfig};
use crate::model::{default_demand_types, default_ports, Catalog, DemandType, Port, Scenario};
use crate::random::{create_rng, derive_seed};
use crate::strategy::StrategiesConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Stream id of the scenario generator; strategy streams are derived per
/// scenario index instead.
const GENERATOR_STREAM: u64 = u64::MAX;

/// Scenario generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Traffic ceiling of every generated scenario.
    pub total_capacity: f64,
    pub scenario_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            total_capacity: 1000.0,
            scenario_count: 30,
        }
    }
}

/// Everything a comparison run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignConfig {
    /// Global seed for scenarios and strategy streams.
    pub seed: u64,
    pub demand_types: Vec<DemandType>,
    pub ports: Vec<Port>,
    pub generator: GeneratorConfig,
    pub harness: HarnessConfig,
    pub strategies: StrategiesConfig,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            demand_types: default_demand_types(),
            ports: default_ports(),
            generator: GeneratorConfig::default(),
            harness: HarnessConfig::default(),
            strategies: StrategiesConfig::default(),
        }
    }
}

impl AssignConfig {
    /// Reads, parses and validates a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_ports(mut self, ports: Vec<Port>) -> Self {
        self.ports = ports;
        self
    }

    pub fn with_scenario_count(mut self, count: usize) -> Self {
        self.generator.scenario_count = count;
        self
    }

    pub fn with_strategies(mut self, strategies: StrategiesConfig) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn with_harness(mut self, harness: HarnessConfig) -> Self {
        self.harness = harness;
        self
    }

    /// Checks catalogs, generator, harness and strategy tunables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let catalog = self.catalog()?;
        ScenarioGenerator::new(&catalog, self.generator.total_capacity)?;
        self.harness
            .validate()
            .map_err(|message| ConfigError::InvalidTunable {
                strategy: "harness",
                message,
            })?;
        self.strategies.validate()
    }

    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        Catalog::new(self.demand_types.clone(), self.ports.clone())
    }

    /// The configured number of scenarios, drawn from the generator stream
    /// of `seed`.
    pub fn scenarios(&self, catalog: &Catalog) -> Result<Vec<Scenario>, ConfigError> {
        let generator = ScenarioGenerator::new(catalog, self.generator.total_capacity)?;
        let mut rng = create_rng(derive_seed(self.seed, GENERATOR_STREAM));
        Ok(generator.generate_many(self.generator.scenario_count, &mut rng))
    }

    /// A harness over the configured catalog and enabled strategies.
    pub fn harness(&self) -> Result<ComparisonHarness, ConfigError> {
        self.validate()?;
        Ok(
            ComparisonHarness::new(self.catalog()?, self.strategies.build(), self.seed)
                .with_settings(self.harness.clone()),
        )
    }

    /// Generates the scenarios and compares every enabled strategy on them.
    pub fn run(&self) -> Result<ComparisonReport, RunError> {
        let harness = self.harness()?;
        let scenarios = self.scenarios(harness.catalog())?;
        tracing::info!(
            seed = self.seed,
            scenarios = scenarios.len(),
            "starting comparison"
        );
        Ok(harness.run(&scenarios)?)
    }
}

/// Failure of [`AssignConfig::run`].
#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyKind;

    #[test]
    fn test_empty_file_is_reference_setup() {
        let config = AssignConfig::from_toml_str("").unwrap();
        assert_eq!(config, AssignConfig::default());
        assert_eq!(config.seed, 42);
        assert_eq!(config.generator.scenario_count, 30);
        assert_eq!(config.catalog().unwrap(), Catalog::odu_default());
    }

    #[test]
    fn test_partial_override() {
        let text = r#"
            seed = 7

            [[ports]]
            name = "Only"
            capacity = 250.0

            [generator]
            scenario_count = 3

            [strategies]
            enabled = ["Greedy", "Brute-Force"]

            [strategies.genetic]
            population_size = 20
        "#;
        let config = AssignConfig::from_toml_str(text).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.ports, vec![Port::new("Only", 250.0)]);
        assert_eq!(config.demand_types.len(), 4);
        assert_eq!(config.generator.total_capacity, 1000.0);
        assert_eq!(config.strategies.genetic.population_size, 20);
        assert_eq!(
            config.strategies.enabled,
            vec![StrategyKind::Greedy, StrategyKind::BruteForce]
        );
    }

    #[test]
    fn test_invalid_catalog_rejected() {
        let err = AssignConfig::from_toml_str("ports = []").unwrap_err();
        assert!(matches!(err, ConfigError::NoPorts));

        let text = "[[demand_types]]\nname = \"X\"\nrate = -1.0";
        let err = AssignConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRate { .. }));
    }

    #[test]
    fn test_invalid_tunables_rejected() {
        let err = AssignConfig::from_toml_str("[harness]\nworkers = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTunable { strategy: "harness", .. }
        ));

        let err = AssignConfig::from_toml_str("[generator]\ntotal_capacity = -5.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCeiling(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = AssignConfig::from_toml_str("seed = \"abc\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AssignConfig::from_file("/nonexistent/odu-assign.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_scenarios_are_reproducible() {
        let config = AssignConfig::default().with_scenario_count(5);
        let catalog = config.catalog().unwrap();
        let a = config.scenarios(&catalog).unwrap();
        let b = config.scenarios(&catalog).unwrap();
        assert_eq!(a.len(), 5);
        assert_eq!(a, b);
        assert!(a.iter().all(|s| catalog.total_traffic(s) <= 1000.0));
    }

    #[test]
    fn test_run_small_comparison() {
        let config = AssignConfig::default()
            .with_scenario_count(2)
            .with_strategies(
                StrategiesConfig::default()
                    .with_enabled([StrategyKind::Greedy, StrategyKind::BruteForce]),
            );
        let report = config.run().unwrap();
        assert_eq!(report.scenario_count(), 2);
        assert_eq!(report.series().len(), 2);
        assert_eq!(report.port_names(), &["Framer1", "Framer2"]);
    }
}
