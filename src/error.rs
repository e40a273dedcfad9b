//! Error types.

use thiserror::Error;

/// Structural problems in a request, detected before solving begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A location or container has an empty ID.
    #[error("{role} has an empty id")]
    EmptyId {
        /// "source", "destination" or "container".
        role: &'static str,
    },
    /// Two sources, or two destinations, share an ID.
    #[error("duplicate {role} id `{id}`")]
    DuplicateLocation {
        /// "source" or "destination".
        role: &'static str,
        /// The repeated ID.
        id: String,
    },
    /// Two containers share an ID.
    #[error("duplicate container id `{id}`")]
    DuplicateContainer {
        /// The repeated ID.
        id: String,
    },
    /// Latitude or longitude is missing, non-numeric, non-finite or out of range.
    #[error("location `{id}` has invalid coordinates")]
    InvalidCoordinates {
        /// Location ID.
        id: String,
    },
    /// A container references an undeclared source.
    #[error("container `{container_id}` references unknown source `{source_id}`")]
    UnknownSource {
        /// Container ID.
        container_id: String,
        /// The dangling source ID.
        source_id: String,
    },
    /// A container references an undeclared destination.
    #[error("container `{container_id}` references unknown destination `{destination_id}`")]
    UnknownDestination {
        /// Container ID.
        container_id: String,
        /// The dangling destination ID.
        destination_id: String,
    },
    /// Container size is zero, negative, or too large to represent.
    #[error("container `{container_id}` has invalid size {size}")]
    InvalidSize {
        /// Container ID.
        container_id: String,
        /// The rejected size.
        size: i64,
    },
    /// Temperature code is not `AM` or `RE`.
    #[error("container `{container_id}` has unknown temperature class `{code}`")]
    UnknownTemperature {
        /// Container ID.
        container_id: String,
        /// The rejected code.
        code: String,
    },
    /// A truck compartment capacity is not a positive integer.
    #[error("truck capacity for {compartment} must be positive, got {value}")]
    InvalidCapacity {
        /// Compartment code.
        compartment: &'static str,
        /// The rejected value.
        value: i64,
    },
}

/// Errors returned by the optimization engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// The request failed validation; nothing was solved.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
    /// The caller cancelled the request.
    #[error("optimization cancelled")]
    Cancelled,
}
