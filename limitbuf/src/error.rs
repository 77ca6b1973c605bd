//! Error types for buffer operations.

use std::io;

use thiserror::Error;

/// Buffer operation error.
///
/// Both variants are transient: the buffer stays fully usable afterwards and
/// the same call may succeed once the other side has made progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Nothing to read; the producer has to write first.
    #[error("NotAvailableData")]
    NoAvailableData,
    /// No room to write; the consumer has to drain first.
    #[error("NotAvailableSpace")]
    NoAvailableSpace,
}

impl BufferError {
    /// Returns true if retrying the operation later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BufferError::NoAvailableData | BufferError::NoAvailableSpace)
    }
}

impl From<BufferError> for io::Error {
    fn from(err: BufferError) -> Self {
        io::Error::new(io::ErrorKind::WouldBlock, err)
    }
}

/// Error returned when a buffer cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("capacity must be greater than 0")]
    ZeroCapacity,
}
