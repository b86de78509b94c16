//! Assignment evaluation.
//!
//! [`Evaluator`] turns a positional assignment (one port index per demand
//! type) into per-port loads for a fixed scenario. It is the objective every
//! strategy maximizes.
//!
//! # Placement rule
//!
//! Positions are processed in catalog order. The whole traffic of a position
//! (`rate × count`) goes to the chosen port if it fits, otherwise to the next
//! port in cyclic catalog order if that one fits, otherwise it is dropped.
//! Traffic is never split and never over-allocated.

use crate::model::{Catalog, LoadResult, Scenario};
use crate::search::Objective;

/// Where one position's traffic ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Placed on the chosen port.
    Chosen(usize),
    /// Chosen port was full; placed on the next port.
    Redirected(usize),
    /// Neither port had headroom.
    Dropped,
}

/// Scores assignments for one scenario against one catalog.
///
/// Construction precomputes the traffic per position; evaluation is pure
/// and allocation-light, so the evaluator can be shared across threads.
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    catalog: &'a Catalog,
    traffic: Vec<f64>,
    demand: f64,
}

impl<'a> Evaluator<'a> {
    pub fn new(catalog: &'a Catalog, scenario: &Scenario) -> Self {
        let traffic = catalog.traffic(scenario);
        let demand = traffic.iter().sum();
        Self {
            catalog,
            traffic,
            demand,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Traffic per catalog position.
    pub fn traffic(&self) -> &[f64] {
        &self.traffic
    }

    /// Total scenario traffic.
    pub fn demand(&self) -> f64 {
        self.demand
    }

    /// Places the traffic of `position` given a chosen `port`, updating
    /// `loads` in place.
    ///
    /// `port` is reduced modulo the port count.
    pub fn place(&self, loads: &mut [f64], position: usize, port: usize) -> Placement {
        let ports = self.catalog.ports();
        let traffic = self.traffic[position];
        let chosen = port % ports.len();

        if loads[chosen] + traffic <= ports[chosen].capacity {
            loads[chosen] += traffic;
            return Placement::Chosen(chosen);
        }

        let next = (chosen + 1) % ports.len();
        if next != chosen && loads[next] + traffic <= ports[next].capacity {
            loads[next] += traffic;
            return Placement::Redirected(next);
        }

        Placement::Dropped
    }

    /// Evaluates a full assignment.
    ///
    /// Positions missing from a short assignment default to port 0; extra
    /// entries are ignored.
    pub fn evaluate(&self, assignment: &[usize]) -> LoadResult {
        debug_assert_eq!(
            assignment.len(),
            self.traffic.len(),
            "assignment must have one port per demand type"
        );

        let mut loads = vec![0.0; self.catalog.port_count()];
        for position in 0..self.traffic.len() {
            let port = assignment.get(position).copied().unwrap_or(0);
            self.place(&mut loads, position, port);
        }
        LoadResult::new(loads, self.demand)
    }
}

impl Objective for Evaluator<'_> {
    fn score(&self, assignment: &[usize]) -> f64 {
        self.evaluate(assignment).total()
    }
}
