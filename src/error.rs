//! Error types shared by all optimizers.
//!
//! Operations that accept caller data validate it up front and report an
//! [`OptError`].

use thiserror::Error;

use crate::search::SearchError;

/// Invalid optimizer parameters, reported by the `validate()` methods.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The population cannot be ranked or bred with fewer than two members.
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// Elites would fill the whole population, leaving no room for children.
    #[error("elite_size ({elite}) must be less than population_size ({population})")]
    EliteTooLarge { elite: usize, population: usize },

    /// A probability outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    /// Temperatures must be finite and strictly positive.
    #[error("{name} must be finite and positive, got {value}")]
    InvalidTemperature { name: &'static str, value: f64 },

    /// The annealing loop would never run or never stop.
    #[error(
        "final_temperature ({final_temperature}) must be less than \
         initial_temperature ({initial_temperature})"
    )]
    TemperatureOrder {
        initial_temperature: f64,
        final_temperature: f64,
    },

    /// Geometric cooling needs a factor strictly inside `(0, 1)`.
    #[error("cooling_rate must be in (0, 1), got {0}")]
    CoolingRate(f64),

    /// A zero node budget cannot expand even the start state.
    #[error("max_expanded must be greater than zero when supplied")]
    ZeroNodeLimit,
}

/// Errors raised by the optimizers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptError {
    /// Rejected configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Puzzle search failure.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Fitness is the reciprocal of cost, so a zero-cost tour has none.
    #[error("division by zero: tour {stops:?} has zero cost")]
    ZeroCostTour { stops: Vec<usize> },

    /// No locations to route through.
    #[error("instance has no locations")]
    EmptyInstance,

    /// A coordinate is NaN or infinite.
    #[error("location {index} has a non-finite coordinate")]
    NonFiniteLocation { index: usize },

    /// A cost matrix row does not match the number of rows.
    #[error("cost matrix is not square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A cost matrix entry is negative, NaN or infinite.
    #[error("cost matrix entry ({from}, {to}) must be finite and non-negative, got {value}")]
    InvalidCost { from: usize, to: usize, value: f64 },

    /// A route violates the depot/interior invariants.
    #[error("invalid route: {0}")]
    InvalidRoute(String),

    /// A tour is not a permutation of `0..n`.
    #[error("not a permutation of 0..{len}: {stops:?}")]
    InvalidPermutation { stops: Vec<usize>, len: usize },
}

/// Shorthand result type.
pub type Result<T, E = OptError> = std::result::Result<T, E>;
