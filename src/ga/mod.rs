//! Genetic Algorithm for ordering problems.
//!
//! A population of candidate tours is ranked, selected, recombined and
//! mutated for a fixed number of generations. Users define their problem by
//! implementing [`GaProblem`]; [`TspProblem`] is the built-in
//! travelling-salesman instance.
//!
//! # Core Traits
//!
//! - [`Individual`]: a candidate solution with cost and fitness
//! - [`GaProblem`]: initialization, crossover, mutation
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, elite size, mutation rate, generations
//! - [`Evolution`]: stepwise population state
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: final best individual with cost history
//!
//! # Submodules
//!
//! - [`operators`]: order crossover and swap mutation on permutations
//! - [`selection`]: ranking, elitism and roulette-wheel sampling
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod tsp;
mod types;

pub use config::GaConfig;
pub use runner::{breed, mutate_population, Evolution, GaPhase, GaResult, GaRunner};
pub use tsp::{solve_tsp, TspProblem};
pub use types::{GaProblem, Individual};
