//! Error types for the basics tour.

use thiserror::Error;

/// Everything that can go wrong while running the tour.
#[derive(Debug, Error)]
pub enum TourError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid {shape} {field}: {value} (must be finite and non-negative)")]
    InvalidDimension {
        shape: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("unknown topic '{0}' (use --list to see the catalogue)")]
    UnknownTopic(String),

    #[error("failed to write tour output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the tour crates.
pub type Result<T> = std::result::Result<T, TourError>;
