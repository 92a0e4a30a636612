// In: src/error.rs

//! This module defines the single, unified error type for the recoverable edges
//! of the library: descriptor construction, Arrow conversion, configuration and
//! raw buffer handling.
//!
//! Sentinel resolution itself never returns this type. A malformed descriptor
//! reaching a sentinel function is a contract violation and goes through
//! [`crate::violation::ViolationHandler`] instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentinelError {
    // =========================================================================
    // === High-Level, Semantic Errors
    // =========================================================================
    #[error("Unsupported data type for this operation: {0}")]
    UnsupportedType(String),

    #[error("Invalid type descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Buffer length mismatch: expected a multiple of {1}, got {0}")]
    BufferMismatch(usize, usize),

    #[error("Null mask covers {actual} rows, buffer holds {expected}")]
    MaskLength { expected: usize, actual: usize },

    #[error("Logger initialization failed: {0}")]
    Logging(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem, e.g. opening a log file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while reading configuration
    /// or a serialized descriptor.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type SentinelResult<T> = Result<T, SentinelError>;
