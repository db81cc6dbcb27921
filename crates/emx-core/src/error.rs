//! Error types for the EMx core engine
//!
//! This module defines all error types used throughout the EMx core.
//! We use `thiserror` for ergonomic error definitions with automatic
//! Display/Error implementations.
//!
//! The kernel hot path itself is total: stepping never returns `Err`.
//! An unknown operator name on the string entry point is reported in the
//! step outcome, and encoding failures only occur at the boundary where
//! external data is turned into an initial triple.

use thiserror::Error;

/// Result type alias for EMx operations
pub type Result<T> = std::result::Result<T, EmxError>;

/// Main error type for EMx operations
#[derive(Error, Debug)]
pub enum EmxError {
    /// Kernel dispatch errors
    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelError),

    /// Entry-point encoding errors
    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to kernel operator dispatch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// The operator name does not map to a steppable operator.
    ///
    /// O4 and O9 are gate-internal checks, O5 and O8 are reserved slots;
    /// all four take this path alongside genuinely unknown names.
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
}

/// Errors related to entry-point encoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A float vector with no components cannot select any axis bias
    #[error("Cannot encode an empty vector")]
    EmptyVector,

    /// Malformed textual triple such as `--init` input
    #[error("Invalid triple literal: {0}")]
    InvalidTriple(String),
}
