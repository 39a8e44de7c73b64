//! Depot routing problem for SA.
//!
//! A route starts at the depot, visits each assigned stop once and
//! returns: `[depot, s1, .., sk, depot]`. Neighbors come from 2-opt
//! segment reversal on the interior, so the depot endpoints never move.

use rand::Rng;

use super::config::SaConfig;
use super::runner::{SaResult, SaRunner};
use super::types::SaProblem;
use crate::cost::{CostFn, CostMatrix};
use crate::error::{OptError, Result};
use crate::random::shuffle;
use crate::tour::Tour;

/// Returns a copy of `route` with `route[i..=j]` reversed.
///
/// `i == j` leaves the route unchanged.
///
/// # Panics
/// Panics if `i > j` or `j >= route.len()`.
pub fn reverse_segment(route: &[usize], i: usize, j: usize) -> Vec<usize> {
    let mut next = route.to_vec();
    next[i..=j].reverse();
    next
}

/// 2-opt move: reverses the segment between two distinct random interior
/// positions (first and last positions excluded).
///
/// Routes with fewer than two interior stops have no such pair and are
/// returned unchanged.
pub fn two_opt<R: Rng + ?Sized>(route: &[usize], rng: &mut R) -> Vec<usize> {
    let n = route.len();
    if n < 4 {
        return route.to_vec();
    }
    // Two distinct indices in 1..n-1.
    let a = rng.random_range(1..n - 1);
    let mut b = rng.random_range(1..n - 2);
    if b >= a {
        b += 1;
    }
    reverse_segment(route, a.min(b), a.max(b))
}

/// Single-vehicle routing over a cost matrix with a fixed depot.
#[derive(Debug, Clone)]
pub struct RoutingProblem {
    matrix: CostMatrix,
    depot: usize,
}

impl RoutingProblem {
    /// Checks that `depot` indexes into `matrix`.
    pub fn new(matrix: CostMatrix, depot: usize) -> Result<Self> {
        if depot >= matrix.len() {
            return Err(OptError::InvalidRoute(format!(
                "depot {depot} outside matrix of size {}",
                matrix.len()
            )));
        }
        Ok(Self { matrix, depot })
    }

    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Validates `stops` as a depot route and builds it.
    ///
    /// The route must start and end at the depot, hold at least two
    /// interior stops, and visit each interior stop once. The depot may
    /// not appear in the interior.
    pub fn route(&self, stops: Vec<usize>) -> Result<Tour> {
        let n = self.matrix.len();
        if stops.len() < 4 {
            return Err(OptError::InvalidRoute(format!(
                "need at least two stops between depots, got {stops:?}"
            )));
        }
        if stops.first() != Some(&self.depot) || stops.last() != Some(&self.depot) {
            return Err(OptError::InvalidRoute(format!(
                "route must start and end at depot {}, got {stops:?}",
                self.depot
            )));
        }
        let mut seen = vec![false; n];
        for &s in &stops[1..stops.len() - 1] {
            if s >= n {
                return Err(OptError::InvalidRoute(format!(
                    "stop {s} outside matrix of size {n}"
                )));
            }
            if s == self.depot || seen[s] {
                return Err(OptError::InvalidRoute(format!("stop {s} visited twice")));
            }
            seen[s] = true;
        }
        Ok(Tour::path(stops, &self.matrix))
    }

    /// Builds `[depot, shuffled stops.., depot]`.
    pub fn random_route<R: Rng + ?Sized>(&self, stops: &[usize], rng: &mut R) -> Result<Tour> {
        let mut interior = stops.to_vec();
        shuffle(&mut interior, rng);
        let mut route = Vec::with_capacity(interior.len() + 2);
        route.push(self.depot);
        route.extend(interior);
        route.push(self.depot);
        self.route(route)
    }
}

impl SaProblem for RoutingProblem {
    type Solution = Tour;

    fn cost(&self, solution: &Tour) -> f64 {
        solution.cost()
    }

    fn neighbor<R: Rng>(&self, solution: &Tour, rng: &mut R) -> Tour {
        Tour::path(two_opt(solution.stops(), rng), &self.matrix)
    }
}

/// Validates the inputs and anneals `initial_route` over `matrix`.
///
/// The depot is taken from the route's first element.
pub fn optimize_route(
    matrix: CostMatrix,
    initial_route: Vec<usize>,
    config: &SaConfig,
) -> Result<SaResult<Tour>> {
    let depot = *initial_route
        .first()
        .ok_or_else(|| OptError::InvalidRoute("route is empty".into()))?;
    let problem = RoutingProblem::new(matrix, depot)?;
    let initial = problem.route(initial_route)?;
    SaRunner::run(&problem, initial, config)
}
