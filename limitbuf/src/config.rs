//! Buffer configuration.

use tracing::debug;

use crate::buffer::LimitedBuffer;
use crate::cycle_buffer::CycleBuffer;
use crate::error::ConfigError;
use crate::sync_buffer::SyncBuffer;

/// Default buffer capacity in bytes.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Buffer configuration.
///
/// ```
/// use giztoy_limitbuf::{BufferConfig, LimitedBuffer};
///
/// let mut buf = BufferConfig::new(4096).with_sync(true).build().unwrap();
/// assert_eq!(buf.capacity(), 4096);
/// assert_eq!(buf.write(b"abc").unwrap(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BufferConfig {
    /// Size of the backing array in bytes.
    pub capacity: usize,
    /// Wrap the buffer in a [`SyncBuffer`].
    pub synchronized: bool,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            synchronized: false,
        }
    }
}

impl BufferConfig {
    /// Create a new config for an unsynchronized buffer.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            synchronized: false,
        }
    }

    /// Set whether the buffer is lock-wrapped.
    pub fn with_sync(mut self, synchronized: bool) -> Self {
        self.synchronized = synchronized;
        self
    }

    /// Check the config without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    /// Build the configured buffer.
    pub fn build(&self) -> Result<Box<dyn LimitedBuffer + Send>, ConfigError> {
        self.validate()?;
        debug!(
            capacity = self.capacity,
            synchronized = self.synchronized,
            "building limited buffer"
        );

        let buffer = CycleBuffer::try_new(self.capacity)?;
        if self.synchronized {
            Ok(Box::new(SyncBuffer::new(buffer)))
        } else {
            Ok(Box::new(buffer))
        }
    }
}
