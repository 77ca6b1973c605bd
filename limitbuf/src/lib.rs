//! Fixed-capacity, non-blocking cycle byte buffers.
//!
//! This crate provides a bounded FIFO byte channel over one pre-allocated
//! array, for streams that would rather retry than block:
//!
//! - [`CycleBuffer`]: the buffer itself, for single-owner use
//! - [`SyncBuffer<B>`]: a mutex decorator that makes any [`LimitedBuffer`]
//!   shareable between threads ([`SyncCycleBuffer`] wraps a `CycleBuffer`)
//!
//! Both implement the [`LimitedBuffer`] trait, so they are interchangeable
//! behind a generic bound or as `Box<dyn LimitedBuffer + Send>`.
//!
//! # Semantics
//!
//! - **Read**: never blocks; fails with [`BufferError::NoAvailableData`] when empty
//! - **Write**: never blocks; fails with [`BufferError::NoAvailableSpace`] when full
//! - **Partial transfers** are successes and return the smaller count
//! - **Reset**: discards unread data, keeps the running totals
//!
//! ```
//! use giztoy_limitbuf::{BufferError, CycleBuffer};
//!
//! let mut buf = CycleBuffer::new(8);
//! assert_eq!(buf.write(b"0123456789").unwrap(), 8);
//! assert_eq!(buf.write(b"x"), Err(BufferError::NoAvailableSpace));
//!
//! let mut out = [0u8; 3];
//! assert_eq!(buf.read(&mut out).unwrap(), 3);
//! assert_eq!(&out, b"012");
//!
//! let status = buf.status();
//! assert_eq!(status.unread_size(), 5);
//! assert_eq!(status.free_write_space(), 2);
//! ```
//!
//! # Guard Slot
//!
//! Equal cursors mean "empty", so in general one byte of the array stays
//! unused to tell "full" apart. While the read cursor sits at index 0 the
//! full array can be filled.
//!
//! # Standard I/O
//!
//! Both buffer types implement [`std::io::Read`] and [`std::io::Write`]. The
//! empty and full conditions surface as [`std::io::ErrorKind::WouldBlock`].
//!
//! # Configuration
//!
//! [`BufferConfig`] builds either kind from a capacity and a sync flag. With
//! the `serde` feature it can be loaded from any serde format.
//!
//! # Convenience Functions
//!
//! The [`bytes`] module provides pre-sized constructors:
//!
//! ```
//! use giztoy_limitbuf::{cycle_bytes_4kb, sync_cycle_bytes_4kb};
//!
//! let plain = cycle_bytes_4kb();
//! let shared = sync_cycle_bytes_4kb();
//! ```

mod buffer;
pub mod bytes;
mod config;
mod cycle_buffer;
mod error;
mod status;
mod sync_buffer;

pub use buffer::LimitedBuffer;
pub use bytes::*;
pub use config::{BufferConfig, DEFAULT_CAPACITY};
pub use cycle_buffer::CycleBuffer;
pub use error::{BufferError, ConfigError};
pub use status::BufferStatus;
pub use sync_buffer::{SyncBuffer, SyncCycleBuffer};
