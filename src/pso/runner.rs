//! PSO execution loop.

use super::config::PsoConfig;
use crate::error::StrategyError;
use crate::random::uniform;
use crate::search::{AssignmentSearch, Objective, SearchOutcome, SearchSpace};
use rand::Rng;

#[derive(Debug, Clone)]
struct Particle {
    position: Vec<f64>,
    velocity: Vec<f64>,
    best_position: Vec<f64>,
    best_score: f64,
}

/// Particle swarm over the relaxed assignment space.
///
/// Positions live in `[0, ports - 1]` per dimension and are rounded to port
/// indices for scoring. Each step applies
/// `v = w·v + c1·r1·(p − x) + c2·r2·(g − x)` and `x = clamp(x + v)`, with
/// fresh `r1, r2 ~ U(0, 1)` per dimension.
#[derive(Debug, Clone, Default)]
pub struct ParticleSwarmSearch {
    config: PsoConfig,
}

impl ParticleSwarmSearch {
    pub fn new(config: PsoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PsoConfig {
        &self.config
    }
}

impl AssignmentSearch for ParticleSwarmSearch {
    fn search<O, R>(
        &self,
        objective: &O,
        space: &SearchSpace,
        rng: &mut R,
    ) -> Result<SearchOutcome, StrategyError>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        self.config.validate().map_err(StrategyError::Solver)?;
        let config = &self.config;
        let upper = space.upper();
        let span = upper.max(1.0);

        let mut swarm: Vec<Particle> = (0..config.swarm_size)
            .map(|_| {
                let position: Vec<f64> = (0..space.positions())
                    .map(|_| uniform(rng, 0.0, upper))
                    .collect();
                let velocity = (0..space.positions())
                    .map(|_| uniform(rng, -span, span))
                    .collect();
                let best_score = objective.score(&space.round(&position));
                Particle {
                    best_position: position.clone(),
                    position,
                    velocity,
                    best_score,
                }
            })
            .collect();
        let mut evaluations = swarm.len();

        // First particle wins ties.
        let mut global = 0;
        for (i, p) in swarm.iter().enumerate() {
            if p.best_score > swarm[global].best_score {
                global = i;
            }
        }
        let mut global_position = swarm[global].best_position.clone();
        let mut global_score = swarm[global].best_score;
        let mut score_history = vec![global_score];

        for _ in 0..config.max_iterations {
            for particle in &mut swarm {
                for d in 0..particle.position.len() {
                    let r1: f64 = rng.random();
                    let r2: f64 = rng.random();
                    let x = particle.position[d];
                    let v = config.inertia * particle.velocity[d]
                        + config.cognitive * r1 * (particle.best_position[d] - x)
                        + config.social * r2 * (global_position[d] - x);
                    particle.velocity[d] = v;
                    particle.position[d] = (x + v).clamp(0.0, upper);
                }

                let score = objective.score(&space.round(&particle.position));
                evaluations += 1;
                if score > particle.best_score {
                    particle.best_score = score;
                    particle.best_position.clone_from(&particle.position);
                }
                if score > global_score {
                    global_score = score;
                    global_position.clone_from(&particle.position);
                }
            }
            score_history.push(global_score);
        }

        tracing::trace!(
            iterations = config.max_iterations,
            evaluations,
            best = global_score,
            "pso finished"
        );

        Ok(SearchOutcome {
            best: space.round(&global_position),
            best_score: global_score,
            iterations: config.max_iterations,
            evaluations,
            score_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn weighted(a: &[usize]) -> f64 {
        a.iter().enumerate().map(|(i, &p)| ((i + 1) * p) as f64).sum()
    }

    #[test]
    fn test_finds_upper_corner() {
        let space = SearchSpace::new(3, 2).unwrap();
        let out = ParticleSwarmSearch::default()
            .search(&weighted, &space, &mut create_rng(42))
            .unwrap();
        assert_eq!(out.best, vec![1, 1, 1]);
        assert_eq!(out.best_score, 6.0);
    }

    #[test]
    fn test_history_non_decreasing() {
        let space = SearchSpace::new(5, 4).unwrap();
        let out = ParticleSwarmSearch::new(PsoConfig::default().with_max_iterations(20))
            .search(&weighted, &space, &mut create_rng(9))
            .unwrap();
        assert_eq!(out.score_history.len(), 21);
        for w in out.score_history.windows(2) {
            assert!(w[1] >= w[0]);
        }
        assert_eq!(out.evaluations, 30 * 21);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let space = SearchSpace::new(6, 2).unwrap();
        let search = ParticleSwarmSearch::default();
        let a = search.search(&weighted, &space, &mut create_rng(3)).unwrap();
        let b = search.search(&weighted, &space, &mut create_rng(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_port_space() {
        let space = SearchSpace::new(2, 1).unwrap();
        let out = ParticleSwarmSearch::default()
            .search(&weighted, &space, &mut create_rng(0))
            .unwrap();
        assert_eq!(out.best, vec![0, 0]);
    }

    #[test]
    fn test_invalid_config_is_solver_error() {
        let space = SearchSpace::new(2, 2).unwrap();
        let err = ParticleSwarmSearch::new(PsoConfig::default().with_swarm_size(0))
            .search(&weighted, &space, &mut create_rng(0))
            .unwrap_err();
        assert!(matches!(err, StrategyError::Solver(_)));
    }
}
