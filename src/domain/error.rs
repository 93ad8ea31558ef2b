//! Error types for the showfinder catalog.
//!
//! This module defines the crate-wide error type [`ShowfinderError`], the
//! ledger-facing [`GatewayError`] taxonomy, and a [`Result`] alias. All errors
//! are implemented using the `thiserror` crate.
//!
//! Metadata decoding has its own [`DecodeError`](super::metadata::DecodeError)
//! which never leaves the decoder.

use super::event::EventId;
use thiserror::Error;

/// Failure reaching or reading from the ledger.
///
/// Returned by every [`LedgerGateway`](crate::gateway::LedgerGateway) call and
/// surfaced by a failing [`EventRepository::refresh`](crate::gateway::EventRepository::refresh).
/// The catalog never retries on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The ledger could not be reached (network or connectivity failure).
    #[error("ledger unavailable: {0}")]
    Unavailable(String),

    /// The ledger has no event with this id.
    #[error("unknown event: {0}")]
    UnknownEvent(EventId),

    /// The ledger answered, but the answer could not be read.
    #[error("malformed ledger response: {0}")]
    MalformedResponse(String),
}

/// The main error type for showfinder operations.
///
/// # Examples
///
/// ```
/// use showfinder::domain::{GatewayError, ShowfinderError};
///
/// let err: ShowfinderError = GatewayError::Unavailable("timed out".to_string()).into();
/// assert_eq!(err.to_string(), "Gateway error: ledger unavailable: timed out");
/// ```
#[derive(Debug, Error)]
pub enum ShowfinderError {
    /// A ledger call failed; the whole refresh is abandoned.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A ledger snapshot file is not valid.
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

/// A specialized `Result` type for showfinder operations.
pub type Result<T> = std::result::Result<T, ShowfinderError>;
