//! Error types for Agora
//!
//! Provides a unified error type for all operations.
//!
//! Absence of an entity is a normal, typed outcome (`NotFound`,
//! `ParentNotFound`), never a panic.

use std::time::Duration;

use thiserror::Error;

use crate::entities::EntityKind;
use crate::protocol::Status;

/// Result type alias using AgoraError
pub type Result<T> = std::result::Result<T, AgoraError>;

/// Unified error type for Agora operations
#[derive(Debug, Error)]
pub enum AgoraError {
    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("parent comment not found: {0}")]
    ParentNotFound(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Dispatch Errors
    // -------------------------------------------------------------------------
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Mailbox disconnected: {0}")]
    Disconnected(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AgoraError {
    /// Shorthand for a `NotFound` error
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        AgoraError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Wire status for this error
    ///
    /// Boundary layers translate: NotFound → 404, ParentNotFound and
    /// InvalidInput → 400, Timeout → 503, everything else → 500.
    pub fn status(&self) -> Status {
        match self {
            AgoraError::NotFound { .. } => Status::NotFound,
            AgoraError::ParentNotFound(_) => Status::ParentNotFound,
            AgoraError::InvalidInput(_) => Status::InvalidInput,
            AgoraError::Timeout(_) => Status::Timeout,
            _ => Status::Internal,
        }
    }

    /// Whether the caller may retry the same request
    pub fn is_retryable(&self) -> bool {
        matches!(self, AgoraError::Timeout(_))
    }
}

impl From<bincode::Error> for AgoraError {
    fn from(err: bincode::Error) -> Self {
        AgoraError::Serialization(err.to_string())
    }
}
