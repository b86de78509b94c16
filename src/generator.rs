//! Random demand scenarios under a traffic ceiling.

use crate::error::ConfigError;
use crate::model::{Catalog, Scenario};
use rand::Rng;

/// Draws scenarios whose total traffic never exceeds `ceiling`.
///
/// Each step picks a demand type uniformly and adds one instance while the
/// running total is below the ceiling. The first draw that would overshoot
/// ends the scenario, so scenarios usually stop short of the ceiling.
///
/// # Examples
///
/// ```
/// use odu_assign::generator::ScenarioGenerator;
/// use odu_assign::model::Catalog;
/// use odu_assign::random::create_rng;
///
/// let catalog = Catalog::odu_default();
/// let generator = ScenarioGenerator::new(&catalog, 1000.0).unwrap();
/// let scenario = generator.generate(&mut create_rng(42));
/// assert!(catalog.total_traffic(&scenario) <= 1000.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScenarioGenerator<'a> {
    catalog: &'a Catalog,
    ceiling: f64,
}

impl<'a> ScenarioGenerator<'a> {
    pub fn new(catalog: &'a Catalog, ceiling: f64) -> Result<Self, ConfigError> {
        if !ceiling.is_finite() || ceiling < 0.0 {
            return Err(ConfigError::InvalidCeiling(ceiling));
        }
        Ok(Self { catalog, ceiling })
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> Scenario {
        let types = self.catalog.demand_types();
        let mut scenario = Scenario::new();
        let mut total = 0.0;

        while total < self.ceiling {
            let demand = &types[rng.random_range(0..types.len())];
            if total + demand.rate > self.ceiling {
                break;
            }
            scenario.add(&demand.name, 1);
            total += demand.rate;
        }

        tracing::trace!(total, instances = scenario.instance_count(), "scenario generated");
        scenario
    }

    /// `count` scenarios drawn in sequence from one stream.
    pub fn generate_many<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Scenario> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}
