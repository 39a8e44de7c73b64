//! State-space search for the 8-puzzle.
//!
//! Exhaustive breadth-first search over boards reachable by sliding the
//! blank. Because boards are expanded in order of path length, the first
//! goal reached gives a shortest solution.
//!
//! # Key Types
//!
//! - [`Board`]: an immutable 3×3 configuration
//! - [`Move`]: direction the blank travels
//! - [`Solution`]: the move sequence plus search statistics
//! - [`Playback`]: step-by-step replay for interactive front ends

mod config;
mod runner;
mod types;

use thiserror::Error;

use crate::error::ConfigError;

pub use config::SearchConfig;
pub use runner::{apply_moves, solve, solve_with, Playback, Solution, Step};
pub use types::{Board, Move, BLANK, CELLS, GOAL};

/// Puzzle search failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Input is not a permutation of the symbols 0-8.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// Odd inversion parity: the goal lies in the other half of the state space.
    #[error("board {0} cannot reach the goal")]
    Unsolvable(Board),

    /// The configured expansion budget ran out.
    #[error("node limit of {limit} expanded boards reached")]
    NodeLimit { limit: usize },

    /// Every reachable board was expanded without finding the goal.
    #[error("search space exhausted after {expanded} boards")]
    Exhausted { expanded: usize },

    /// Rejected configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
