//! Point-in-time occupancy readout.

/// Snapshot of a buffer's occupancy.
///
/// Values are captured when [`status`](crate::LimitedBuffer::status) is called
/// and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BufferStatus {
    pub(crate) capacity: usize,
    pub(crate) unread_size: usize,
    pub(crate) free_write_space: usize,
    pub(crate) total_read: u64,
    pub(crate) total_write: u64,
}

impl BufferStatus {
    /// Size of the backing array.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes available to read.
    pub fn unread_size(&self) -> usize {
        self.unread_size
    }

    /// Bytes that can be written before the buffer is full.
    pub fn free_write_space(&self) -> usize {
        self.free_write_space
    }

    /// Bytes read since construction.
    pub fn total_read(&self) -> u64 {
        self.total_read
    }

    /// Bytes written since construction.
    pub fn total_write(&self) -> u64 {
        self.total_write
    }
}
