//! Lock-serialized wrapper around any limited buffer.

use std::io;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::buffer::LimitedBuffer;
use crate::cycle_buffer::CycleBuffer;
use crate::error::BufferError;
use crate::status::BufferStatus;

/// A thread-safe decorator over a [`LimitedBuffer`].
///
/// Every operation takes one mutex, delegates to the wrapped buffer and
/// returns its result unchanged. Nothing waits for data or space: an empty or
/// full buffer still fails immediately, and callers poll and back off on their
/// own.
///
/// Clones share the same underlying buffer, so a producer and a consumer can
/// each hold a handle.
///
/// # Example
///
/// ```
/// use giztoy_limitbuf::{BufferError, SyncCycleBuffer};
/// use std::thread;
///
/// let buf = SyncCycleBuffer::with_capacity(64);
/// let producer_buf = buf.clone();
///
/// let producer = thread::spawn(move || {
///     let mut data: &[u8] = b"hello from the producer";
///     while !data.is_empty() {
///         match producer_buf.write(data) {
///             Ok(n) => data = &data[n..],
///             Err(BufferError::NoAvailableSpace) => thread::yield_now(),
///             Err(e) => panic!("unexpected: {e}"),
///         }
///     }
/// });
/// producer.join().unwrap();
///
/// let mut out = [0u8; 64];
/// let n = buf.read(&mut out).unwrap();
/// assert_eq!(&out[..n], b"hello from the producer");
/// ```
pub struct SyncBuffer<B> {
    inner: Arc<Mutex<B>>,
}

/// A synchronized [`CycleBuffer`].
pub type SyncCycleBuffer = SyncBuffer<CycleBuffer>;

impl<B> Clone for SyncBuffer<B> {
    fn clone(&self) -> Self {
        SyncBuffer {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SyncBuffer<CycleBuffer> {
    /// Creates a synchronized CycleBuffer with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        SyncBuffer::new(CycleBuffer::new(capacity))
    }
}

impl<B: LimitedBuffer> SyncBuffer<B> {
    /// Wraps `buffer`, taking ownership of it.
    pub fn new(buffer: B) -> Self {
        SyncBuffer {
            inner: Arc::new(Mutex::new(buffer)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, B> {
        self.inner.lock()
    }

    /// Reads up to `buf.len()` bytes. See [`LimitedBuffer::read`].
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, BufferError> {
        self.lock().read(buf)
    }

    /// Writes as much of `data` as fits. See [`LimitedBuffer::write`].
    pub fn write(&self, data: &[u8]) -> Result<usize, BufferError> {
        self.lock().write(data)
    }

    /// Returns true if a write would fail.
    pub fn is_full(&self) -> bool {
        self.lock().is_full()
    }

    /// Returns true if a read would fail.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Resets read and write positions to 0.
    pub fn reset(&self) {
        self.lock().reset()
    }

    /// Returns the fixed buffer size.
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Returns an occupancy snapshot taken under the lock.
    pub fn status(&self) -> BufferStatus {
        self.lock().status()
    }

    /// Runs `f` with exclusive access to the wrapped buffer.
    ///
    /// Use this to make several calls atomic as a group, e.g. checking
    /// [`free_write_space`](BufferStatus::free_write_space) before writing a
    /// frame that must not be split.
    pub fn with_locked<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        f(&mut self.lock())
    }
}

impl<B: LimitedBuffer> LimitedBuffer for SyncBuffer<B> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, BufferError> {
        SyncBuffer::read(self, buf)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, BufferError> {
        SyncBuffer::write(self, data)
    }

    fn is_full(&self) -> bool {
        SyncBuffer::is_full(self)
    }

    fn is_empty(&self) -> bool {
        SyncBuffer::is_empty(self)
    }

    fn reset(&mut self) {
        SyncBuffer::reset(self)
    }

    fn capacity(&self) -> usize {
        SyncBuffer::capacity(self)
    }

    fn status(&self) -> BufferStatus {
        SyncBuffer::status(self)
    }
}

impl<B: LimitedBuffer> io::Read for SyncBuffer<B> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(SyncBuffer::read(self, buf)?)
    }
}

// Also implement for &SyncBuffer so a shared handle can be read from directly.
impl<B: LimitedBuffer> io::Read for &SyncBuffer<B> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(SyncBuffer::read(*self, buf)?)
    }
}

impl<B: LimitedBuffer> io::Write for SyncBuffer<B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(SyncBuffer::write(self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<B: LimitedBuffer> io::Write for &SyncBuffer<B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(SyncBuffer::write(*self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
