//! Fixed-capacity cycle buffer with a reserved guard slot.

use std::fmt;
use std::io;

use tracing::trace;

use crate::buffer::LimitedBuffer;
use crate::error::{BufferError, ConfigError};
use crate::status::BufferStatus;

/// A non-blocking, fixed-capacity byte FIFO over one pre-allocated array.
///
/// `CycleBuffer` reuses its backing array cyclically. `read` and `write`
/// return immediately: they either move some bytes or report
/// [`BufferError::NoAvailableData`] / [`BufferError::NoAvailableSpace`].
///
/// # Capacity
///
/// Equal read and write cursors mean "empty", so one slot is normally kept
/// free to tell a full buffer apart. The exception is a read cursor parked at
/// index 0: a write cursor at the end of the array can't be mistaken for one
/// that just wrapped, so the whole array is usable.
///
/// ```
/// use giztoy_limitbuf::{BufferError, CycleBuffer};
///
/// let mut buf = CycleBuffer::new(8);
/// assert_eq!(buf.write(b"0123456789").unwrap(), 8);
///
/// let mut out = [0u8; 1];
/// assert_eq!(buf.read(&mut out).unwrap(), 1);
///
/// // The freed slot is the guard slot.
/// assert_eq!(buf.write(b"x"), Err(BufferError::NoAvailableSpace));
/// ```
///
/// `CycleBuffer` is not synchronized; wrap it in a
/// [`SyncBuffer`](crate::SyncBuffer) to share it between threads.
pub struct CycleBuffer {
    buf: Box<[u8]>,
    // Next byte to read. Always below capacity: a read that consumes the
    // last byte of the array wraps it to 0.
    rpos: usize,
    // Next byte to write. May rest at capacity after filling the tail.
    wpos: usize,
    total_read: u64,
    total_write: u64,
}

impl CycleBuffer {
    /// Creates a new CycleBuffer with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than 0");
        CycleBuffer {
            buf: vec![0u8; capacity].into_boxed_slice(),
            rpos: 0,
            wpos: 0,
            total_read: 0,
            total_write: 0,
        }
    }

    /// Creates a new CycleBuffer, rejecting a zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self::new(capacity))
    }

    /// Returns the buffer capacity.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if there is nothing to read.
    pub fn is_empty(&self) -> bool {
        self.rpos == self.wpos
    }

    /// Returns true if there is no room to write.
    pub fn is_full(&self) -> bool {
        if self.rpos == 0 {
            return self.wpos == self.capacity();
        }
        // wpos == capacity is the same slot as index 0.
        self.wpos % self.capacity() == self.rpos - 1
    }

    /// Returns the number of bytes available to read.
    pub fn unread_size(&self) -> usize {
        if self.is_empty() {
            0
        } else if self.wpos > self.rpos {
            self.wpos - self.rpos
        } else {
            self.capacity() - self.rpos + self.wpos
        }
    }

    /// Returns the number of bytes that can be written before the buffer is full.
    pub fn free_write_space(&self) -> usize {
        let capacity = self.capacity();
        if self.is_full() {
            0
        } else if self.rpos == 0 {
            capacity - self.wpos
        } else if self.wpos == self.rpos {
            capacity - 1
        } else if self.wpos > self.rpos {
            capacity - self.wpos + self.rpos - 1
        } else {
            self.rpos - self.wpos - 1
        }
    }

    /// Reads up to `buf.len()` bytes into `buf`.
    ///
    /// Returns the number of bytes read, which is less than `buf.len()` when
    /// fewer bytes are buffered. Fails with [`BufferError::NoAvailableData`]
    /// when the buffer is empty.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, BufferError> {
        if self.is_empty() {
            return Err(BufferError::NoAvailableData);
        }

        let capacity = self.capacity();
        let n = buf.len().min(self.unread_size());

        if self.wpos > self.rpos {
            buf[..n].copy_from_slice(&self.buf[self.rpos..self.rpos + n]);
            self.rpos += n;
        } else {
            // Unread data is [rpos, capacity) followed by [0, wpos).
            let first = n.min(capacity - self.rpos);
            buf[..first].copy_from_slice(&self.buf[self.rpos..self.rpos + first]);
            let second = n - first;
            buf[first..n].copy_from_slice(&self.buf[..second]);
            self.rpos = if second > 0 { second } else { self.rpos + first };
        }

        if self.rpos == capacity {
            if self.wpos == capacity {
                // Drained with both cursors at the end.
                self.wpos = 0;
            }
            self.rpos = 0;
        }

        self.total_read += n as u64;
        Ok(n)
    }

    /// Writes as much of `data` as fits.
    ///
    /// Returns the number of bytes written, which is less than `data.len()`
    /// when the buffer runs out of room. Fails with
    /// [`BufferError::NoAvailableSpace`] when the buffer is full.
    pub fn write(&mut self, data: &[u8]) -> Result<usize, BufferError> {
        if self.is_full() {
            return Err(BufferError::NoAvailableSpace);
        }

        let capacity = self.capacity();
        let n = data.len().min(self.free_write_space());

        if self.wpos >= self.rpos {
            // Free space is [wpos, capacity) followed by [0, rpos - 1).
            let first = n.min(capacity - self.wpos);
            self.buf[self.wpos..self.wpos + first].copy_from_slice(&data[..first]);
            let second = n - first;
            self.buf[..second].copy_from_slice(&data[first..n]);
            self.wpos = if second > 0 { second } else { self.wpos + first };
        } else {
            self.buf[self.wpos..self.wpos + n].copy_from_slice(&data[..n]);
            self.wpos += n;
        }

        self.total_write += n as u64;
        Ok(n)
    }

    /// Resets both cursors to 0, discarding any unread data.
    ///
    /// The running read/write totals are kept.
    pub fn reset(&mut self) {
        trace!(discarded = self.unread_size(), "cycle buffer reset");
        self.rpos = 0;
        self.wpos = 0;
    }

    /// Returns an occupancy snapshot.
    pub fn status(&self) -> BufferStatus {
        BufferStatus {
            capacity: self.capacity(),
            unread_size: self.unread_size(),
            free_write_space: self.free_write_space(),
            total_read: self.total_read,
            total_write: self.total_write,
        }
    }
}

impl LimitedBuffer for CycleBuffer {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, BufferError> {
        CycleBuffer::read(self, buf)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, BufferError> {
        CycleBuffer::write(self, data)
    }

    fn is_full(&self) -> bool {
        CycleBuffer::is_full(self)
    }

    fn is_empty(&self) -> bool {
        CycleBuffer::is_empty(self)
    }

    fn reset(&mut self) {
        CycleBuffer::reset(self)
    }

    fn capacity(&self) -> usize {
        CycleBuffer::capacity(self)
    }

    fn status(&self) -> BufferStatus {
        CycleBuffer::status(self)
    }
}

impl io::Read for CycleBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(CycleBuffer::read(self, buf)?)
    }
}

impl io::Write for CycleBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(CycleBuffer::write(self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Display for CycleBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<CycleBuffer(cap={} rpos={} wpos={} unread={} freewrite={} totalRead={} totalWrite={})>",
            self.capacity(),
            self.rpos,
            self.wpos,
            self.unread_size(),
            self.free_write_space(),
            self.total_read,
            self.total_write
        )
    }
}

impl fmt::Debug for CycleBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CycleBuffer")
            .field("capacity", &self.capacity())
            .field("rpos", &self.rpos)
            .field("wpos", &self.wpos)
            .field("total_read", &self.total_read)
            .field("total_write", &self.total_write)
            .finish()
    }
}
