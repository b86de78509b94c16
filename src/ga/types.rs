//! Core trait definitions for the GA.
//!
//! [`Individual`] and [`GaProblem`] form the contract between the generic
//! evolutionary loop and a concrete encoding. The assignment encoding lives
//! in [`super::problem`].

use rand::Rng;

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness. Lower fitness is better
/// (minimization); maximization problems negate their score.
pub trait Individual: Clone + Send + Sync {
    /// Returns the current fitness of this individual.
    fn fitness(&self) -> f64;

    /// Sets the fitness of this individual.
    ///
    /// Called by the runner after evaluation.
    fn set_fitness(&mut self, fitness: f64);
}

/// Defines a GA optimization problem.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel using rayon.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual. Lower is better.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Produces offspring by recombining two parents.
    ///
    /// The default implementation returns clones of both parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone(), parent2.clone()]
    }

    /// Mutates an individual in place. The default is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}
}
