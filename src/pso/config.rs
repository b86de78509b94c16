//! PSO configuration.

use serde::{Deserialize, Serialize};

/// Configuration for particle swarm optimization.
///
/// # Examples
///
/// ```
/// use odu_assign::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_swarm_size(40)
///     .with_inertia(0.7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PsoConfig {
    /// Number of particles.
    pub swarm_size: usize,

    /// Number of velocity/position updates.
    pub max_iterations: usize,

    /// Weight of the previous velocity (`w`).
    pub inertia: f64,

    /// Pull towards the particle's own best (`c1`).
    pub cognitive: f64,

    /// Pull towards the swarm's best (`c2`).
    pub social: f64,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            swarm_size: 30,
            max_iterations: 100,
            inertia: 0.5,
            cognitive: 0.5,
            social: 0.5,
        }
    }
}

impl PsoConfig {
    pub fn with_swarm_size(mut self, n: usize) -> Self {
        self.swarm_size = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_inertia(mut self, w: f64) -> Self {
        self.inertia = w;
        self
    }

    pub fn with_cognitive(mut self, c: f64) -> Self {
        self.cognitive = c;
        self
    }

    pub fn with_social(mut self, c: f64) -> Self {
        self.social = c;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.swarm_size == 0 {
            return Err("swarm_size must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a non-negative number, got {value}"));
            }
        }
        Ok(())
    }
}
