//! Port-vector encoding of the assignment problem for the GA.

use super::config::GaConfig;
use super::operators::{shuffle_indexes_mutation, two_point_crossover};
use super::runner::GaRunner;
use super::types::{GaProblem, Individual};
use crate::error::StrategyError;
use crate::search::{AssignmentSearch, Objective, SearchOutcome, SearchSpace};
use rand::Rng;

/// One port index per demand-type position.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    pub genes: Vec<usize>,
    fitness: f64,
}

impl Chromosome {
    pub fn new(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: f64::INFINITY,
        }
    }
}

impl Individual for Chromosome {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Adapts an [`Objective`] to the GA's minimization contract.
struct AssignmentProblem<'a, O: ?Sized> {
    objective: &'a O,
    space: SearchSpace,
    gene_swap_probability: f64,
}

impl<O: Objective + ?Sized> GaProblem for AssignmentProblem<'_, O> {
    type Individual = Chromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Chromosome {
        Chromosome::new(self.space.random_assignment(rng))
    }

    fn evaluate(&self, individual: &Chromosome) -> f64 {
        -self.objective.score(&individual.genes)
    }

    fn crossover<R: Rng>(&self, p1: &Chromosome, p2: &Chromosome, rng: &mut R) -> Vec<Chromosome> {
        let (c1, c2) = two_point_crossover(&p1.genes, &p2.genes, rng);
        vec![Chromosome::new(c1), Chromosome::new(c2)]
    }

    fn mutate<R: Rng>(&self, individual: &mut Chromosome, rng: &mut R) {
        shuffle_indexes_mutation(&mut individual.genes, self.gene_swap_probability, rng);
    }
}

/// Genetic search over port assignments.
#[derive(Debug, Clone, Default)]
pub struct GeneticSearch {
    config: GaConfig,
}

impl GeneticSearch {
    pub fn new(config: GaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

impl AssignmentSearch for GeneticSearch {
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
        let problem = AssignmentProblem {
            objective,
            space: *space,
            gene_swap_probability: self.config.gene_swap_probability,
        };
        let result = GaRunner::run(&problem, &self.config, rng).map_err(StrategyError::Solver)?;

        Ok(SearchOutcome {
            best_score: -result.best_fitness,
            best: result.best.genes,
            iterations: result.generations,
            evaluations: result.evaluations,
            score_history: result.fitness_history.iter().map(|f| -f).collect(),
        })
    }
}
