//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with a probability that
//! shrinks as the temperature cools geometrically, letting the search
//! escape local optima early and settle later.
//!
//! [`RoutingProblem`] applies it to a depot route over a cost matrix with
//! 2-opt neighbors.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems" (2-opt)

mod config;
mod routing;
mod runner;
mod types;

pub use config::SaConfig;
pub use routing::{optimize_route, reverse_segment, two_opt, RoutingProblem};
pub use runner::{metropolis_accept, SaResult, SaRunner};
pub use types::SaProblem;
