//! Core trait definitions for the GA.
//!
//! [`Individual`] and [`GaProblem`] form the contract between the
//! evolutionary loop and a concrete problem such as the TSP.

use rand::Rng;

use crate::error::Result;
use crate::tour::Tour;

/// A candidate solution in the GA population.
///
/// Cost is lower-is-better; fitness is derived from it and is
/// higher-is-better.
pub trait Individual: Clone {
    /// Total cost of this candidate.
    fn cost(&self) -> f64;

    /// Selection weight. Must decrease monotonically with cost.
    fn fitness(&self) -> Result<f64>;
}

impl Individual for Tour {
    fn cost(&self) -> f64 {
        Tour::cost(self)
    }

    fn fitness(&self) -> Result<f64> {
        Tour::fitness(self)
    }
}

/// Defines a GA optimization problem.
///
/// Implementors supply the representation-specific pieces: random
/// initialization, recombination and mutation. Ranking, selection,
/// elitism and the generation loop are handled by the runner.
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Produces one child from two parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Self::Individual;

    /// Returns a mutated copy of `individual`.
    ///
    /// `rate` is the per-gene mutation probability.
    fn mutate<R: Rng>(&self, individual: &Self::Individual, rate: f64, rng: &mut R)
        -> Self::Individual;

    /// Called at the end of each generation with the current best cost.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_cost: f64) {}
}
