//! SA execution loop.

use super::config::{CoolingSchedule, SaConfig};
use super::types::SaProblem;
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Best cost at the end of each temperature level, starting with the
    /// initial solution.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with the caller's random state.
    pub fn run<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>, String> {
        config.validate()?;

        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;

        let linear_steps = linear_steps(config);
        let inner_iters = match config.cooling {
            CoolingSchedule::LundyMees { .. } => 1,
            _ => config.iterations_per_temperature,
        };

        let mut cost_history = vec![best_cost];
        let mut step = 0usize;

        while temperature > config.min_temperature && total_iterations < config.max_iterations {
            for _ in 0..inner_iters {
                if total_iterations >= config.max_iterations {
                    break;
                }

                let neighbor = problem.neighbor(&current, rng);
                let neighbor_cost = problem.cost(&neighbor);
                let delta = neighbor_cost - current_cost;

                // Metropolis acceptance criterion
                let accept =
                    delta < 0.0 || rng.random_range(0.0..1.0) < (-delta / temperature).exp();

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                }

                total_iterations += 1;
            }

            cost_history.push(best_cost);
            temperature = cool(temperature, config, step, linear_steps);
            step += 1;
        }

        tracing::trace!(
            iterations = total_iterations,
            temperature,
            best_cost,
            "sa finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            iterations: total_iterations,
            cost_history,
        })
    }
}

/// Applies the cooling schedule.
fn cool(temperature: f64, config: &SaConfig, step: usize, linear_steps: usize) -> f64 {
    match config.cooling {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,
        CoolingSchedule::Linear => {
            let t = config.initial_temperature
                - (step + 1) as f64 * (config.initial_temperature - config.min_temperature)
                    / linear_steps as f64;
            t.max(config.min_temperature)
        }
        CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
    }
}

/// Temperature steps for linear cooling, spread over the iteration budget.
fn linear_steps(config: &SaConfig) -> usize {
    (config.max_iterations / config.iterations_per_temperature.max(1)).max(1)
}
