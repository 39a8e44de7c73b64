//! Combinatorial optimization core.
//!
//! Three independent optimizers over small discrete problems:
//!
//! - **Search**: breadth-first search for the 8-puzzle. Returns a shortest
//!   move sequence from any solvable board to the goal.
//! - **Genetic Algorithm (GA)**: elitism, roulette-wheel selection, order
//!   crossover and swap mutation over travelling-salesman tours.
//! - **Simulated Annealing (SA)**: 2-opt neighbors, Metropolis acceptance
//!   and geometric cooling over a depot route on a cost matrix.
//!
//! # Shared building blocks
//!
//! - [`cost`]: coordinates, cost matrices and the [`CostFn`] trait
//! - [`tour`]: an ordered list of stops with its eagerly computed cost
//! - [`random`]: seeded RNG construction and permutation helpers
//! - [`error`]: crate-wide error types
//!
//! Every stochastic routine takes an optional seed. With a seed, runs are
//! reproducible for a given `rand` version.
//!
//! # Example
//!
//! ```
//! use combopt::ga::{solve_tsp, GaConfig};
//! use combopt::Location;
//!
//! let square = vec![
//!     Location::new(0.0, 0.0),
//!     Location::new(1.0, 0.0),
//!     Location::new(1.0, 1.0),
//!     Location::new(0.0, 1.0),
//! ];
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_elite_size(4)
//!     .with_generations(50)
//!     .with_seed(42);
//! let result = solve_tsp(square, &config).unwrap();
//! assert!((result.best_cost - 4.0).abs() < 1e-9);
//! ```

pub mod cost;
pub mod error;
pub mod ga;
pub mod random;
pub mod sa;
pub mod search;
pub mod tour;

pub use cost::{CostFn, CostMatrix, Location, Locations};
pub use error::{ConfigError, OptError, Result};
pub use tour::Tour;
