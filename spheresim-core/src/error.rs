//! Error types for sphere and world construction/stepping

use thiserror::Error;

/// Errors surfaced by the simulator
#[derive(Debug, Error, PartialEq)]
pub enum PhysicsError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("sphere mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    #[error("boundary radius must be positive and finite, got {0}")]
    InvalidBoundaryRadius(f64),

    /// A registered sphere was dropped by its owner while still in the
    /// world's collection.
    #[error("sphere handle at index {index} is stale (owner dropped it)")]
    StaleSphere { index: usize },
}
