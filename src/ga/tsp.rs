//! Travelling-salesman problem for the GA.
//!
//! Candidates are closed tours over every location: a uniformly random
//! permutation at birth, recombined with order crossover and perturbed
//! with per-position swap mutation.

use rand::Rng;

use super::config::GaConfig;
use super::operators::{ordered_crossover, swap_mutation};
use super::runner::{GaResult, GaRunner};
use super::types::GaProblem;
use crate::cost::{Location, Locations};
use crate::error::Result;
use crate::random::permutation;
use crate::tour::Tour;

/// A TSP instance over planar locations with Euclidean distances.
#[derive(Debug, Clone)]
pub struct TspProblem {
    locations: Locations,
}

impl TspProblem {
    /// Validates `points` (non-empty, finite coordinates).
    pub fn new(points: Vec<Location>) -> Result<Self> {
        Ok(Self {
            locations: Locations::new(points)?,
        })
    }

    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    /// Builds a tour from caller-supplied stops, checking it visits every
    /// location exactly once.
    pub fn tour(&self, stops: Vec<usize>) -> Result<Tour> {
        Tour::checked_cycle(stops, &self.locations)
    }
}

impl GaProblem for TspProblem {
    type Individual = Tour;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Tour {
        let n = self.locations.points().len();
        Tour::cycle(permutation(n, rng), &self.locations)
    }

    fn crossover<R: Rng>(&self, parent1: &Tour, parent2: &Tour, rng: &mut R) -> Tour {
        let stops = ordered_crossover(parent1.stops(), parent2.stops(), rng);
        Tour::cycle(stops, &self.locations)
    }

    fn mutate<R: Rng>(&self, individual: &Tour, rate: f64, rng: &mut R) -> Tour {
        let stops = swap_mutation(individual.stops(), rate, rng);
        Tour::cycle(stops, &self.locations)
    }
}

/// Runs the GA on `points` and returns the best closed tour found.
///
/// Tour stops index into `points`.
pub fn solve_tsp(points: Vec<Location>, config: &GaConfig) -> Result<GaResult<Tour>> {
    let problem = TspProblem::new(points)?;
    GaRunner::run(&problem, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptError;
    use crate::random::create_rng;

    fn unit_square() -> Vec<Location> {
        vec![
            Location::new(0.0, 0.0),
            Location::new(0.0, 1.0),
            Location::new(1.0, 1.0),
            Location::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            TspProblem::new(vec![]),
            Err(OptError::EmptyInstance)
        ));
    }

    #[test]
    fn test_tour_validates_stops() {
        let problem = TspProblem::new(unit_square()).unwrap();
        assert!(problem.tour(vec![0, 1, 2, 3]).is_ok());
        assert!(problem.tour(vec![0, 1, 2]).is_err());
        assert!(problem.tour(vec![0, 1, 2, 4]).is_err());
    }

    #[test]
    fn test_zero_rate_mutation_keeps_tour() {
        let problem = TspProblem::new(unit_square()).unwrap();
        let mut rng = create_rng(42);
        let tour = problem.create_individual(&mut rng);
        assert_eq!(problem.mutate(&tour, 0.0, &mut rng), tour);
    }

    #[test]
    fn test_unit_square_converges_to_perimeter() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_elite_size(4)
            .with_generations(50)
            .with_seed(42);
        let result = solve_tsp(unit_square(), &config).unwrap();
        assert!((result.best_cost - 4.0).abs() < 1e-9, "got {}", result.best_cost);
    }
}
