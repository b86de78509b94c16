//! Demand scenarios.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Instance counts per demand type for one comparison run.
///
/// Types with zero instances may be omitted. Ordered by name so that
/// iteration and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scenario {
    counts: BTreeMap<String, u32>,
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: sets the count for `name`.
    pub fn with(mut self, name: impl Into<String>, count: u32) -> Self {
        self.counts.insert(name.into(), count);
        self
    }

    /// Adds `n` instances of `name`.
    pub fn add(&mut self, name: &str, n: u32) {
        *self.counts.entry(name.to_string()).or_insert(0) += n;
    }

    /// Instance count of `name`, zero when absent.
    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Total number of instances across all types.
    pub fn instance_count(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.instance_count() == 0
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Scenario {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_count() {
        let s = Scenario::new().with("ODU4", 3).with("ODU0", 10);
        assert_eq!(s.count("ODU4"), 3);
        assert_eq!(s.count("ODUC4"), 0);
        assert_eq!(s.instance_count(), 13);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_add_accumulates() {
        let mut s = Scenario::new();
        s.add("ODU2", 1);
        s.add("ODU2", 2);
        assert_eq!(s.count("ODU2"), 3);
    }

    #[test]
    fn test_iteration_is_sorted() {
        let s: Scenario = [("b", 1), ("a", 2)].into_iter().collect();
        let names: Vec<&str> = s.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_zero_counts_are_empty() {
        let s = Scenario::new().with("A", 0);
        assert!(s.is_empty());
    }
}
