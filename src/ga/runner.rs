//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::selection::tournament;
use super::types::{GaProblem, Individual};
use rand::Rng;
use rayon::prelude::*;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual seen during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Number of fitness evaluations.
    pub evaluations: usize,

    /// Best fitness at the end of each generation, starting with the
    /// initial population.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let mut rng = create_rng(42);
/// let result = GaRunner::run(&problem, &GaConfig::default(), &mut rng)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with the caller's random state.
    ///
    /// Returns `Err` with the validation message if the configuration is
    /// invalid.
    pub fn run<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>, String> {
        config.validate()?;

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();

        // 2. Evaluate initial population
        evaluate_all(problem, &mut population, config.parallel);
        let mut evaluations = population.len();

        // 3. Track best
        let mut best = find_best(&population)
            .ok_or("population must not be empty")?
            .clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness());

        let elite_count = (config.population_size as f64 * config.elite_ratio) as usize;

        // 4. Evolutionary loop
        for gen in 0..config.max_generations {
            // Sort population by fitness (ascending = best first)
            population.sort_by(|a, b| {
                a.fitness()
                    .partial_cmp(&b.fitness())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            // Elite preservation
            let mut next_gen: Vec<P::Individual> = population[..elite_count].to_vec();

            // Generate offspring
            while next_gen.len() < config.population_size {
                let p1 = tournament(&population, config.tournament_size, rng);
                let p2 = tournament(&population, config.tournament_size, rng);

                let children = if rng.random_bool(config.crossover_rate) {
                    problem.crossover(&population[p1], &population[p2], rng)
                } else {
                    vec![population[p1].clone(), population[p2].clone()]
                };

                for mut child in children {
                    if next_gen.len() >= config.population_size {
                        break;
                    }
                    if rng.random_bool(config.mutation_rate) {
                        problem.mutate(&mut child, rng);
                    }
                    next_gen.push(child);
                }
            }

            // Elites are already evaluated
            evaluate_all(problem, &mut next_gen[elite_count..], config.parallel);
            evaluations += config.population_size - elite_count;

            population = next_gen;

            if let Some(gen_best) = find_best(&population) {
                if gen_best.fitness() < best.fitness() {
                    best = gen_best.clone();
                }
            }

            fitness_history.push(best.fitness());
            tracing::trace!(generation = gen + 1, best = best.fitness(), "ga generation");
        }

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.max_generations,
            evaluations,
            fitness_history,
        })
    }
}

fn evaluate_all<P: GaProblem>(problem: &P, population: &mut [P::Individual], parallel: bool) {
    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        for ind in population.iter_mut() {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        }
    }
}

/// Lowest fitness; the earliest individual wins ties.
fn find_best<I: Individual>(population: &[I]) -> Option<&I> {
    population.iter().reduce(|best, ind| {
        if ind.fitness() < best.fitness() {
            ind
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    // ---- OneMax: minimize negative count of true bits ----

    #[derive(Clone, Debug)]
    struct BitString {
        bits: Vec<bool>,
        fitness: f64,
    }

    impl Individual for BitString {
        fn fitness(&self) -> f64 {
            self.fitness
        }
        fn set_fitness(&mut self, f: f64) {
            self.fitness = f;
        }
    }

    struct OneMax {
        n: usize,
    }

    impl GaProblem for OneMax {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
            BitString {
                bits: (0..self.n).map(|_| rng.random_bool(0.5)).collect(),
                fitness: f64::INFINITY,
            }
        }

        fn evaluate(&self, ind: &BitString) -> f64 {
            -(ind.bits.iter().filter(|&&b| b).count() as f64)
        }

        fn mutate<R: Rng>(&self, ind: &mut BitString, rng: &mut R) {
            let idx = rng.random_range(0..self.n);
            ind.bits[idx] = !ind.bits[idx];
        }
    }

    #[test]
    fn test_onemax_convergence() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_max_generations(200)
            .with_mutation_rate(0.5)
            .with_elite_ratio(0.1);
        let result = GaRunner::run(&OneMax { n: 20 }, &config, &mut create_rng(42)).unwrap();
        assert!(
            result.best_fitness <= -15.0,
            "expected fitness <= -15.0 for 20-bit OneMax, got {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_best_seen_is_monotone() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(40);
        let result = GaRunner::run(&OneMax { n: 10 }, &config, &mut create_rng(7)).unwrap();
        for w in result.fitness_history.windows(2) {
            assert!(w[1] <= w[0], "best-seen must never get worse");
        }
        assert_eq!(result.fitness_history.len(), 41);
        assert_eq!(result.generations, 40);
    }

    #[test]
    fn test_evaluation_count() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(3)
            .with_elite_ratio(0.2);
        let result = GaRunner::run(&OneMax { n: 4 }, &config, &mut create_rng(1)).unwrap();
        assert_eq!(result.evaluations, 10 + 3 * 8);
    }

    #[test]
    fn test_runs_full_generation_budget() {
        // optimum is found early; the run still spends every generation
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(60);
        let result = GaRunner::run(&OneMax { n: 3 }, &config, &mut create_rng(42)).unwrap();
        assert_eq!(result.generations, 60);
        assert_eq!(result.fitness_history.len(), 61);
        assert_eq!(result.best_fitness, -3.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let base = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(20);
        let seq = GaRunner::run(&OneMax { n: 12 }, &base, &mut create_rng(3)).unwrap();
        let par = GaRunner::run(
            &OneMax { n: 12 },
            &base.clone().with_parallel(true),
            &mut create_rng(3),
        )
        .unwrap();
        assert_eq!(seq.fitness_history, par.fitness_history);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let config = GaConfig::default().with_population_size(1);
        assert!(GaRunner::run(&OneMax { n: 4 }, &config, &mut create_rng(1)).is_err());
    }
}
