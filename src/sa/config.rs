//! SA configuration and cooling schedules.

use serde::{Deserialize, Serialize};

/// Cooling schedule for temperature reduction.
///
/// In TOML: `cooling = { kind = "geometric", alpha = 0.95 }`.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoolingSchedule {
    /// `T_{k+1} = alpha * T_k`. Typical `alpha`: 0.95–0.99.
    Geometric { alpha: f64 },

    /// `T_k = T_0 - k * (T_0 - T_min) / steps`, where `steps` is derived
    /// from the iteration budget.
    Linear,

    /// `T_{k+1} = T_k / (1 + beta * T_k)`, one iteration per step.
    LundyMees { beta: f64 },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

/// Configuration for simulated annealing.
///
/// # Examples
///
/// ```
/// use odu_assign::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.9 })
///     .with_max_iterations(400);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaConfig {
    /// Starting temperature, in objective units (bandwidth).
    pub initial_temperature: f64,

    /// The walk stops once the temperature drops below this.
    pub min_temperature: f64,

    pub cooling: CoolingSchedule,

    /// Iterations at each temperature level. Ignored for `LundyMees`.
    pub iterations_per_temperature: usize,

    /// Hard iteration budget. Must be positive.
    pub max_iterations: usize,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 1e-3,
            cooling: CoolingSchedule::default(),
            iterations_per_temperature: 10,
            max_iterations: 2000,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.initial_temperature > 0.0) {
            return Err("initial_temperature must be positive".into());
        }
        if !(self.min_temperature > 0.0) {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.iterations_per_temperature == 0 {
            return Err("iterations_per_temperature must be at least 1".into());
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(format!("geometric alpha must be in (0, 1), got {alpha}"));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !(beta > 0.0) {
                    return Err(format!("lundy-mees beta must be positive, got {beta}"));
                }
            }
            CoolingSchedule::Linear => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 1000.0).abs() < 1e-10);
        assert_eq!(config.max_iterations, 2000);
        assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.95 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        assert!(SaConfig::default()
            .with_initial_temperature(-1.0)
            .validate()
            .is_err());
        assert!(SaConfig::default()
            .with_initial_temperature(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_budget() {
        assert!(SaConfig::default().with_max_iterations(0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_cooling() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.5 });
        assert!(config.validate().is_err());
        let config = SaConfig::default().with_cooling(CoolingSchedule::LundyMees { beta: -1.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cooling_from_toml() {
        let config: SaConfig =
            toml::from_str("cooling = { kind = \"lundy_mees\", beta = 0.01 }").unwrap();
        assert_eq!(config.cooling, CoolingSchedule::LundyMees { beta: 0.01 });
        let config: SaConfig = toml::from_str("cooling = { kind = \"linear\" }").unwrap();
        assert_eq!(config.cooling, CoolingSchedule::Linear);
    }
}
