//! Strategy identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven compared strategies, in reporting order.
///
/// Serialized under their display names, e.g. `"Simulated Annealing"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    #[serde(rename = "ILP")]
    Ilp,
    #[serde(rename = "Brute-Force")]
    BruteForce,
    Greedy,
    Genetic,
    #[serde(rename = "Simulated Annealing")]
    SimulatedAnnealing,
    #[serde(rename = "Particle Swarm")]
    ParticleSwarm,
    #[serde(rename = "Ant Colony")]
    AntColony,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 7] = [
        StrategyKind::Ilp,
        StrategyKind::BruteForce,
        StrategyKind::Greedy,
        StrategyKind::Genetic,
        StrategyKind::SimulatedAnnealing,
        StrategyKind::ParticleSwarm,
        StrategyKind::AntColony,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Ilp => "ILP",
            StrategyKind::BruteForce => "Brute-Force",
            StrategyKind::Greedy => "Greedy",
            StrategyKind::Genetic => "Genetic",
            StrategyKind::SimulatedAnnealing => "Simulated Annealing",
            StrategyKind::ParticleSwarm => "Particle Swarm",
            StrategyKind::AntColony => "Ant Colony",
        }
    }

    /// Stable ordinal, used to derive the strategy's random stream.
    pub fn index(self) -> u64 {
        self as u64
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_and_index() {
        for (i, kind) in StrategyKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i as u64);
        }
        assert!(StrategyKind::Ilp < StrategyKind::AntColony);
    }

    #[test]
    fn test_serde_names_match_display() {
        #[derive(Deserialize, Serialize)]
        struct Wrapper {
            kinds: Vec<StrategyKind>,
        }
        let text = toml::to_string(&Wrapper {
            kinds: StrategyKind::ALL.to_vec(),
        })
        .unwrap();
        for kind in StrategyKind::ALL {
            assert!(text.contains(&format!("\"{kind}\"")), "{text}");
        }
        let back: Wrapper = toml::from_str(&text).unwrap();
        assert_eq!(back.kinds, StrategyKind::ALL.to_vec());
    }
}
