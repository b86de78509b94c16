//! GA configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the genetic search.
///
/// # Defaults
///
/// ```
/// use odu_assign::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 100);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use odu_assign::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(5)
///     .with_crossover_rate(0.5)
///     .with_mutation_rate(0.2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Generation budget.
    pub max_generations: usize,

    /// Individuals drawn per parent tournament.
    pub tournament_size: usize,

    /// Fraction of the population copied unchanged into the next
    /// generation (0.0–1.0). Zero gives a plain generational GA.
    pub elite_ratio: f64,

    /// Probability of recombining a selected pair of parents.
    pub crossover_rate: f64,

    /// Probability of mutating an offspring.
    pub mutation_rate: f64,

    /// Per-gene swap probability inside one mutation.
    pub gene_swap_probability: f64,

    /// Whether to evaluate offspring in parallel using rayon.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            tournament_size: 3,
            elite_ratio: 0.0,
            crossover_rate: 0.5,
            mutation_rate: 0.2,
            gene_swap_probability: 0.2,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_gene_swap_probability(mut self, p: f64) -> Self {
        self.gene_swap_probability = p.clamp(0.0, 1.0);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        for (name, value) in [
            ("elite_ratio", self.elite_ratio),
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("gene_swap_probability", self.gene_swap_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be in [0, 1], got {value}"));
            }
        }
        let elite_count = (self.population_size as f64 * self.elite_ratio) as usize;
        if elite_count >= self.population_size {
            return Err("elite_ratio too high: elites fill entire population".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament size must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_study() {
        let config = GaConfig::default();
        assert_eq!(
            (config.population_size, config.max_generations),
            (50, 100)
        );
        assert_eq!(config.tournament_size, 3);
        assert_eq!(
            [config.crossover_rate, config.mutation_rate, config.gene_swap_probability],
            [0.5, 0.2, 0.2]
        );
        assert_eq!(config.elite_ratio, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_probabilities_clamped_by_builders() {
        let config = GaConfig::default()
            .with_tournament_size(5)
            .with_elite_ratio(1.5)
            .with_crossover_rate(-0.5)
            .with_gene_swap_probability(3.0)
            .with_parallel(true);
        assert_eq!(config.tournament_size, 5);
        assert_eq!(config.elite_ratio, 1.0);
        assert_eq!(config.crossover_rate, 0.0);
        assert_eq!(config.gene_swap_probability, 1.0);
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_budgets() {
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
        assert!(GaConfig::default().with_max_generations(0).validate().is_err());
        // elites would fill all 10 slots
        let all_elite = GaConfig::default().with_population_size(10).with_elite_ratio(1.0);
        assert!(all_elite.validate().is_err());
    }

    #[test]
    fn test_validate_rate_out_of_range() {
        // direct field writes bypass builder clamping, as deserialization does
        let config = GaConfig {
            mutation_rate: 1.5,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_tournament() {
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
    }

    #[test]
    fn test_partial_toml() {
        let config: GaConfig = toml::from_str("population_size = 30\nmax_generations = 5").unwrap();
        assert_eq!(config.population_size, 30);
        assert_eq!(config.max_generations, 5);
        assert_eq!(config.tournament_size, 3);
        assert!((config.crossover_rate - 0.5).abs() < 1e-10);
    }
}
