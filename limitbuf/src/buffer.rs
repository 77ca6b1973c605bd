//! The capability shared by every limited buffer.

use crate::error::BufferError;
use crate::status::BufferStatus;

/// A fixed-capacity, non-blocking byte FIFO.
///
/// Implemented by [`CycleBuffer`](crate::CycleBuffer) and by the locking
/// decorator [`SyncBuffer`](crate::SyncBuffer), so callers can hold either one
/// behind the same bound or as `Box<dyn LimitedBuffer + Send>`.
///
/// Neither `read` nor `write` ever waits. A call that moves fewer bytes than
/// requested is a success; a call that can move none because the buffer is
/// empty (or full) returns an error and leaves the buffer untouched.
pub trait LimitedBuffer {
    /// Reads up to `buf.len()` bytes.
    ///
    /// Returns [`BufferError::NoAvailableData`] when the buffer is empty,
    /// even if `buf` is empty too.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, BufferError>;

    /// Writes as much of `data` as fits.
    ///
    /// Returns [`BufferError::NoAvailableSpace`] when the buffer is full.
    fn write(&mut self, data: &[u8]) -> Result<usize, BufferError>;

    /// Returns true if a write would fail.
    fn is_full(&self) -> bool;

    /// Returns true if a read would fail.
    fn is_empty(&self) -> bool;

    /// Discards all unread data and rewinds both cursors.
    fn reset(&mut self);

    /// Returns the fixed size of the backing array.
    fn capacity(&self) -> usize;

    /// Returns an occupancy snapshot.
    fn status(&self) -> BufferStatus;
}

impl<T: LimitedBuffer + ?Sized> LimitedBuffer for Box<T> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, BufferError> {
        (**self).read(buf)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, BufferError> {
        (**self).write(data)
    }

    fn is_full(&self) -> bool {
        (**self).is_full()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn status(&self) -> BufferStatus {
        (**self).status()
    }
}
