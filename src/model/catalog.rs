//! Static demand-type and port catalogs.

use crate::error::{ConfigError, ScenarioError};
use crate::model::Scenario;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A category of traffic with a fixed bandwidth per instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandType {
    /// Unique name, e.g. `"ODU4"`.
    pub name: String,
    /// Bandwidth contributed by one instance.
    pub rate: f64,
}

impl DemandType {
    pub fn new(name: impl Into<String>, rate: f64) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }
}

/// A capacity-bounded aggregation point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    /// Unique name, e.g. `"Framer1"`.
    pub name: String,
    /// Maximum aggregate bandwidth.
    pub capacity: f64,
}

impl Port {
    pub fn new(name: impl Into<String>, capacity: f64) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

/// Ordered demand types and ports.
///
/// Catalog order is significant: assignments are positional over
/// `demand_types`, port indices refer to `ports`, and the evaluator's
/// overflow redirect walks `ports` cyclically.
///
/// A `Catalog` can only be built through [`Catalog::new`], so every
/// instance has at least one demand type with a positive rate and at
/// least one port with a non-negative capacity.
///
/// # Examples
///
/// ```
/// use odu_assign::model::{Catalog, DemandType, Port};
///
/// let catalog = Catalog::new(
///     vec![DemandType::new("A", 10.0), DemandType::new("B", 100.0)],
///     vec![Port::new("P1", 100.0), Port::new("P2", 100.0)],
/// )
/// .unwrap();
/// assert_eq!(catalog.position_count(), 2);
/// assert_eq!(catalog.total_capacity(), 200.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    demand_types: Vec<DemandType>,
    ports: Vec<Port>,
}

impl Catalog {
    /// Validates and builds a catalog.
    pub fn new(demand_types: Vec<DemandType>, ports: Vec<Port>) -> Result<Self, ConfigError> {
        if demand_types.is_empty() {
            return Err(ConfigError::EmptyDemandCatalog);
        }
        if ports.is_empty() {
            return Err(ConfigError::NoPorts);
        }

        let mut seen = HashSet::new();
        for d in &demand_types {
            if !d.rate.is_finite() || d.rate <= 0.0 {
                return Err(ConfigError::InvalidRate {
                    name: d.name.clone(),
                    rate: d.rate,
                });
            }
            if !seen.insert(d.name.as_str()) {
                return Err(ConfigError::DuplicateName(d.name.clone()));
            }
        }

        let mut seen = HashSet::new();
        for p in &ports {
            if !p.capacity.is_finite() || p.capacity < 0.0 {
                return Err(ConfigError::InvalidCapacity {
                    name: p.name.clone(),
                    capacity: p.capacity,
                });
            }
            if !seen.insert(p.name.as_str()) {
                return Err(ConfigError::DuplicateName(p.name.clone()));
            }
        }

        Ok(Self {
            demand_types,
            ports,
        })
    }

    /// The four-ODU, two-framer catalog used by the reference study.
    pub fn odu_default() -> Self {
        Self {
            demand_types: default_demand_types(),
            ports: default_ports(),
        }
    }

    pub fn demand_types(&self) -> &[DemandType] {
        &self.demand_types
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Number of assignment positions (demand types).
    pub fn position_count(&self) -> usize {
        self.demand_types.len()
    }

    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    /// Catalog position of a demand type.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.demand_types.iter().position(|d| d.name == name)
    }

    /// Sum of all port capacities.
    pub fn total_capacity(&self) -> f64 {
        self.ports.iter().map(|p| p.capacity).sum()
    }

    /// Traffic per catalog position: `rate × count`, zero when absent.
    pub fn traffic(&self, scenario: &Scenario) -> Vec<f64> {
        self.demand_types
            .iter()
            .map(|d| d.rate * f64::from(scenario.count(&d.name)))
            .collect()
    }

    /// Total scenario traffic over catalog demand types.
    pub fn total_traffic(&self, scenario: &Scenario) -> f64 {
        self.traffic(scenario).iter().sum()
    }

    /// Rejects scenarios naming demand types outside the catalog.
    pub fn check_scenario(&self, index: usize, scenario: &Scenario) -> Result<(), ScenarioError> {
        for (name, _) in scenario.iter() {
            if self.position(name).is_none() {
                return Err(ScenarioError::UnknownDemandType {
                    index,
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

pub(crate) fn default_demand_types() -> Vec<DemandType> {
    vec![
        DemandType::new("ODU0", 1.25),
        DemandType::new("ODU2", 10.0),
        DemandType::new("ODU4", 100.0),
        DemandType::new("ODUC4", 400.0),
    ]
}

pub(crate) fn default_ports() -> Vec<Port> {
    vec![Port::new("Framer1", 500.0), Port::new("Framer2", 500.0)]
}
