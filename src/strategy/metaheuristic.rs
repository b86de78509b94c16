//! Adapter from an [`AssignmentSearch`] to a [`Strategy`].

use super::{Solution, Strategy, StrategyKind};
use crate::aco::{AcoConfig, AntColonySearch};
use crate::error::StrategyError;
use crate::eval::Evaluator;
use crate::ga::{GaConfig, GeneticSearch};
use crate::model::{Catalog, Scenario};
use crate::pso::{ParticleSwarmSearch, PsoConfig};
use crate::random::SolverRng;
use crate::sa::{AnnealingSearch, SaConfig};
use crate::search::{AssignmentSearch, SearchSpace};

/// Runs a stochastic search with the evaluator as objective and reports the
/// evaluator's result for the best assignment found.
#[derive(Debug, Clone)]
pub struct MetaheuristicStrategy<S> {
    kind: StrategyKind,
    search: S,
}

impl<S: AssignmentSearch> MetaheuristicStrategy<S> {
    pub fn new(kind: StrategyKind, search: S) -> Self {
        Self { kind, search }
    }

    pub fn search(&self) -> &S {
        &self.search
    }
}

impl MetaheuristicStrategy<GeneticSearch> {
    pub fn genetic(config: GaConfig) -> Self {
        Self::new(StrategyKind::Genetic, GeneticSearch::new(config))
    }
}

impl MetaheuristicStrategy<AnnealingSearch> {
    pub fn annealing(config: SaConfig) -> Self {
        Self::new(StrategyKind::SimulatedAnnealing, AnnealingSearch::new(config))
    }
}

impl MetaheuristicStrategy<ParticleSwarmSearch> {
    pub fn swarm(config: PsoConfig) -> Self {
        Self::new(StrategyKind::ParticleSwarm, ParticleSwarmSearch::new(config))
    }
}

impl MetaheuristicStrategy<AntColonySearch> {
    pub fn colony(config: AcoConfig) -> Self {
        Self::new(StrategyKind::AntColony, AntColonySearch::new(config))
    }
}

impl<S: AssignmentSearch> Strategy for MetaheuristicStrategy<S> {
    fn kind(&self) -> StrategyKind {
        self.kind
    }

    fn solve(
        &self,
        catalog: &Catalog,
        scenario: &Scenario,
        rng: &mut SolverRng,
    ) -> Result<Solution, StrategyError> {
        let evaluator = Evaluator::new(catalog, scenario);
        let space = SearchSpace::for_catalog(catalog);
        let outcome = self.search.search(&evaluator, &space, rng)?;
        let load = evaluator.evaluate(&outcome.best);
        tracing::trace!(
            strategy = %self.kind,
            iterations = outcome.iterations,
            evaluations = outcome.evaluations,
            total = load.total(),
            "search finished"
        );
        Ok(Solution::assigned(outcome.best, load))
    }
}
