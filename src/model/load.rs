//! Per-port load results.

use crate::model::Catalog;
use serde::{Deserialize, Serialize};

/// Accumulated bandwidth per port under one assignment and scenario.
///
/// `loads[p]` never exceeds the capacity of catalog port `p`; strategies
/// only build results through the evaluator or from solver values that
/// already satisfy the capacity rows. The scenario's total demand is kept
/// alongside so the dropped share is always derivable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    loads: Vec<f64>,
    demand: f64,
}

impl LoadResult {
    pub(crate) fn new(loads: Vec<f64>, demand: f64) -> Self {
        Self { loads, demand }
    }

    /// Load per port, in catalog port order.
    pub fn loads(&self) -> &[f64] {
        &self.loads
    }

    /// Load on port `port`.
    ///
    /// # Panics
    /// Panics if `port` is out of range.
    pub fn load(&self, port: usize) -> f64 {
        self.loads[port]
    }

    /// Total assigned bandwidth.
    pub fn total(&self) -> f64 {
        self.loads.iter().sum()
    }

    /// Total scenario traffic this result was computed for.
    pub fn demand(&self) -> f64 {
        self.demand
    }

    /// Scenario traffic that no port took.
    pub fn unassigned(&self) -> f64 {
        self.demand - self.total()
    }

    /// Pairs each load with its port name.
    pub fn by_port<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = (&'a str, f64)> {
        catalog
            .ports()
            .iter()
            .zip(self.loads.iter())
            .map(|(p, &l)| (p.name.as_str(), l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_and_unassigned() {
        let r = LoadResult::new(vec![100.0, 50.0], 300.0);
        assert_eq!(r.total(), 150.0);
        assert_eq!(r.unassigned(), 150.0);
        assert_eq!(r.load(1), 50.0);
    }

    #[test]
    fn test_by_port_names() {
        let catalog = Catalog::odu_default();
        let r = LoadResult::new(vec![400.0, 100.0], 500.0);
        let named: Vec<(&str, f64)> = r.by_port(&catalog).collect();
        assert_eq!(named, vec![("Framer1", 400.0), ("Framer2", 100.0)]);
    }
}
