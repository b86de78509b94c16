//! ACO execution loop.

use super::config::{AcoConfig, PheromoneUpdate};
use crate::error::StrategyError;
use crate::random::roulette;
use crate::search::{AssignmentSearch, Objective, SearchOutcome, SearchSpace};
use rand::Rng;

/// Pheromone matrix, one row of port weights per position.
#[derive(Debug, Clone)]
struct Pheromone {
    ports: usize,
    cells: Vec<f64>,
}

impl Pheromone {
    fn new(space: &SearchSpace) -> Self {
        Self {
            ports: space.ports(),
            cells: vec![1.0; space.positions() * space.ports()],
        }
    }

    fn row(&self, position: usize) -> &[f64] {
        &self.cells[position * self.ports..(position + 1) * self.ports]
    }

    fn sample<R: Rng>(&self, positions: usize, rng: &mut R) -> Vec<usize> {
        (0..positions).map(|i| roulette(self.row(i), rng)).collect()
    }

    fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for cell in &mut self.cells {
            *cell *= keep;
        }
    }

    fn deposit(&mut self, path: &[usize], amount: f64, update: PheromoneUpdate) {
        match update {
            PheromoneUpdate::Path => {
                for (i, &port) in path.iter().enumerate() {
                    self.cells[i * self.ports + port] += amount;
                }
            }
            PheromoneUpdate::Uniform => {
                for cell in &mut self.cells {
                    *cell += amount;
                }
            }
        }
    }
}

/// Ant colony over the discrete assignment space.
///
/// Each iteration every ant samples one port per position with probability
/// proportional to that position's pheromone row. After all ants have
/// walked, the matrix evaporates and each ant deposits
/// `score × deposit_scale`. The best sampled assignment is returned.
#[derive(Debug, Clone, Default)]
pub struct AntColonySearch {
    config: AcoConfig,
}

impl AntColonySearch {
    pub fn new(config: AcoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }
}

impl AssignmentSearch for AntColonySearch {
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

        let mut pheromone = Pheromone::new(space);
        let mut best: Option<(Vec<usize>, f64)> = None;
        let mut score_history = Vec::with_capacity(config.iterations);
        let mut evaluations = 0usize;

        for _ in 0..config.iterations {
            let walks: Vec<(Vec<usize>, f64)> = (0..config.ant_count)
                .map(|_| {
                    let path = pheromone.sample(space.positions(), rng);
                    let score = objective.score(&path);
                    (path, score)
                })
                .collect();
            evaluations += walks.len();

            pheromone.evaporate(config.evaporation);
            for (path, score) in &walks {
                pheromone.deposit(path, score * config.deposit_scale, config.update);
            }

            for (path, score) in walks {
                if best.as_ref().map_or(true, |(_, b)| score > *b) {
                    best = Some((path, score));
                }
            }
            if let Some((_, b)) = &best {
                score_history.push(*b);
            }
        }

        let (best, best_score) = best.ok_or_else(|| {
            StrategyError::Solver("ant colony sampled no assignment".into())
        })?;

        tracing::trace!(evaluations, best = best_score, "aco finished");

        Ok(SearchOutcome {
            best,
            best_score,
            iterations: config.iterations,
            evaluations,
            score_history,
        })
    }
}
