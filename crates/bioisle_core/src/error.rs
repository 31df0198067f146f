//! Rejection errors surfaced by construction, configuration and placement.
//!
//! Every variant is a caller mistake reported synchronously; the simulation
//! never retries or limps past an invalid input. Operations that take a batch
//! of values validate the whole batch before mutating anything.

use thiserror::Error;

/// Errors raised while parsing a textual island layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("island layout is empty")]
    EmptyLayout,
    #[error("island layout must have consistent row length")]
    RaggedRows,
    #[error("island must be bounded by water")]
    OpenBoundary,
    #[error("'{0}' is not a valid terrain code")]
    UnknownTerrain(char),
}

/// Errors raised by parameter configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("'{0}' is not a recognized parameter")]
    UnknownParameter(String),
    #[error("{name} cannot be negative (got {value})")]
    NegativeValue { name: String, value: f64 },
    #[error("'{0}' is not a recognized species")]
    UnknownSpecies(String),
    #[error("'{0}' is not a valid terrain code")]
    UnknownTerrain(char),
    #[error("invalid configuration file: {0}")]
    Malformed(String),
}

/// Errors raised while inserting animals onto the island.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlacementError {
    #[error("({row}, {col}) is outside the island")]
    OutOfBounds { row: usize, col: usize },
    #[error("({row}, {col}) is a water cell; animals cannot be placed there")]
    WaterCell { row: usize, col: usize },
    #[error("'{0}' is not a recognized species")]
    UnknownSpecies(String),
    #[error("animal weight must be positive (got {0})")]
    NonPositiveWeight(f64),
}
