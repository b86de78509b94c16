//! ACO configuration.

use serde::{Deserialize, Serialize};

/// How sampled assignments reinforce the pheromone matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PheromoneUpdate {
    /// Only the cells an ant visited receive its deposit.
    #[default]
    Path,

    /// Every cell receives every ant's deposit. The sampling distribution
    /// then never changes; kept for comparison with the older benchmark
    /// runs.
    Uniform,
}

/// Configuration for ant colony optimization.
///
/// # Examples
///
/// ```
/// use odu_assign::aco::{AcoConfig, PheromoneUpdate};
///
/// // Reproduces the single-ant, no-evaporation colony of the old runs.
/// let legacy = AcoConfig::default()
///     .with_ant_count(1)
///     .with_evaporation(0.0)
///     .with_update(PheromoneUpdate::Uniform);
/// assert!(legacy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    /// Ants sampling an assignment per iteration.
    pub ant_count: usize,

    pub iterations: usize,

    /// Multiplier turning an ant's reward (placed bandwidth) into deposit.
    pub deposit_scale: f64,

    /// Fraction of pheromone lost each iteration, in `[0, 1)`.
    pub evaporation: f64,

    pub update: PheromoneUpdate,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ant_count: 20,
            iterations: 50,
            deposit_scale: 0.01,
            evaporation: 0.1,
            update: PheromoneUpdate::Path,
        }
    }
}

impl AcoConfig {
    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_deposit_scale(mut self, scale: f64) -> Self {
        self.deposit_scale = scale;
        self
    }

    pub fn with_evaporation(mut self, rate: f64) -> Self {
        self.evaporation = rate;
        self
    }

    pub fn with_update(mut self, update: PheromoneUpdate) -> Self {
        self.update = update;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.ant_count == 0 {
            return Err("ant_count must be at least 1".into());
        }
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        if !self.deposit_scale.is_finite() || self.deposit_scale < 0.0 {
            return Err(format!(
                "deposit_scale must be a non-negative number, got {}",
                self.deposit_scale
            ));
        }
        if !(0.0..1.0).contains(&self.evaporation) {
            return Err(format!(
                "evaporation must be in [0, 1), got {}",
                self.evaporation
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert_eq!(config.ant_count, 20);
        assert_eq!(config.iterations, 50);
        assert_eq!(config.update, PheromoneUpdate::Path);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_evaporation_range() {
        assert!(AcoConfig::default().with_evaporation(1.0).validate().is_err());
        assert!(AcoConfig::default().with_evaporation(-0.1).validate().is_err());
        assert!(AcoConfig::default().with_evaporation(f64::NAN).validate().is_err());
        assert!(AcoConfig::default().with_evaporation(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_counts() {
        assert!(AcoConfig::default().with_ant_count(0).validate().is_err());
        assert!(AcoConfig::default().with_iterations(0).validate().is_err());
        assert!(AcoConfig::default().with_deposit_scale(-1.0).validate().is_err());
    }

    #[test]
    fn test_update_from_toml() {
        let config: AcoConfig = toml::from_str("update = \"uniform\"\nant_count = 1").unwrap();
        assert_eq!(config.update, PheromoneUpdate::Uniform);
        assert_eq!(config.ant_count, 1);
    }
}
