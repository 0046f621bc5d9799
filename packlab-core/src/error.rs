//! Error types for PackLab operations.
//!
//! This module provides a single error type shared by all codec crates,
//! covering I/O failures, malformed compressed streams and resource limits.
//! Corrupt input is always surfaced as a typed error; decoders never emit
//! partial output silently.

use std::io;
use thiserror::Error;

/// The main error type for PackLab operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid or inconsistent stream header.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// Corrupted data in the compressed stream.
    #[error("Corrupted data at offset {offset}: {message}")]
    CorruptedData {
        /// Byte offset where corruption was detected.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },

    /// Unexpected end of the compressed stream.
    #[error("Unexpected end of stream: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// A fixed-capacity structure ran out of room.
    #[error("Capacity exceeded: structure holds at most {capacity} items")]
    CapacityExceeded {
        /// The fixed capacity of the structure.
        capacity: usize,
    },
}

/// Result type alias for PackLab operations.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create a corrupted data error.
    pub fn corrupted(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptedData {
            offset,
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create a capacity exceeded error.
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }
}
