//! Error types for store operations.

use thiserror::Error;

use crate::types::{AirlineId, AirportId};

/// Errors that can occur in store operations.
///
/// All variants are local, synchronous, and non-retryable: retrying without
/// changing the input never succeeds. A failed mutation has no effect on the
/// store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An argument was missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No airline matches the given ID or code.
    #[error("airline not found: {0}")]
    AirlineNotFound(String),

    /// No airport matches the given ID or code.
    #[error("airport not found: {0}")]
    AirportNotFound(String),

    /// An airline with the given ID already exists.
    #[error("airline already exists: {0}")]
    AirlineAlreadyExists(AirlineId),

    /// An airport with the given ID already exists.
    #[error("airport already exists: {0}")]
    AirportAlreadyExists(AirportId),

    /// A new route references an airline that does not exist.
    #[error("unknown airline reference: {0}")]
    UnknownAirlineReference(AirlineId),

    /// A new route references an airport that does not exist.
    #[error("unknown airport reference: {0}")]
    UnknownAirportReference(AirportId),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
