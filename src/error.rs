//! Error types for u-atsp.

use thiserror::Error;

/// Errors raised while building a cost matrix or solving a tour.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// The cost matrix has no rows.
    #[error("cost matrix is empty")]
    EmptyMatrix,

    /// A row of the cost matrix has the wrong number of columns.
    #[error("cost matrix row {row} has {len} entries, expected {size}")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Number of entries in that row.
        len: usize,
        /// Expected row length (number of rows).
        size: usize,
    },

    /// A cost entry is NaN or negative infinity.
    #[error("cost from {from} to {to} is not a valid cost")]
    InvalidCost {
        /// Source location index.
        from: usize,
        /// Destination location index.
        to: usize,
    },

    /// The label list and the matrix disagree on the number of locations.
    #[error("{labels} labels given for a {size}x{size} cost matrix")]
    DimensionMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Matrix dimension.
        size: usize,
    },

    /// The configured start location is outside the matrix.
    #[error("start location {start} is out of range for {size} locations")]
    InvalidStart {
        /// Requested start index.
        start: usize,
        /// Matrix dimension.
        size: usize,
    },

    /// The instance is too large for exact solving.
    #[error("{size} locations exceeds the exact solver limit of {max}")]
    TooManyLocations {
        /// Matrix dimension.
        size: usize,
        /// Configured limit.
        max: usize,
    },

    /// Every candidate cycle uses at least one missing (infinite) edge.
    #[error("no feasible tour: every cycle uses a missing edge")]
    NoFeasibleTour,

    /// A synthetic cost range is empty or not finite.
    #[error("invalid cost range {min}..={max}")]
    InvalidCostRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// A stored tour is not a closed cycle over its locations.
    #[error("malformed tour: {0}")]
    MalformedTour(String),
}

/// Errors raised while loading or validating a [`SolverConfig`](crate::config::SolverConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;
