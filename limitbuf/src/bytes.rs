//! Convenience functions for creating byte buffers.
//!
//! Pre-sized constructors for the capacities most streams use.

use crate::{CycleBuffer, SyncCycleBuffer};

/// Creates a cycle buffer with the specified capacity.
///
/// # Panics
///
/// Panics if `capacity` is 0.
pub fn cycle_buffer(capacity: usize) -> CycleBuffer {
    CycleBuffer::new(capacity)
}

/// Creates a synchronized cycle buffer with the specified capacity.
///
/// # Panics
///
/// Panics if `capacity` is 0.
pub fn sync_cycle_buffer(capacity: usize) -> SyncCycleBuffer {
    SyncCycleBuffer::with_capacity(capacity)
}

// ============================================================================
// CycleBuffer presets
// ============================================================================

/// Creates a 256B cycle buffer.
pub fn cycle_bytes_256b() -> CycleBuffer {
    CycleBuffer::new(256)
}

/// Creates a 1KB cycle buffer.
pub fn cycle_bytes_1kb() -> CycleBuffer {
    CycleBuffer::new(1024)
}

/// Creates a 4KB cycle buffer.
pub fn cycle_bytes_4kb() -> CycleBuffer {
    CycleBuffer::new(4096)
}

/// Creates a 16KB cycle buffer.
pub fn cycle_bytes_16kb() -> CycleBuffer {
    CycleBuffer::new(16384)
}

/// Creates a 64KB cycle buffer.
pub fn cycle_bytes_64kb() -> CycleBuffer {
    CycleBuffer::new(65536)
}

// ============================================================================
// SyncCycleBuffer presets
// ============================================================================

/// Creates a 1KB synchronized cycle buffer.
pub fn sync_cycle_bytes_1kb() -> SyncCycleBuffer {
    SyncCycleBuffer::with_capacity(1024)
}

/// Creates a 4KB synchronized cycle buffer.
pub fn sync_cycle_bytes_4kb() -> SyncCycleBuffer {
    SyncCycleBuffer::with_capacity(4096)
}

/// Creates a 64KB synchronized cycle buffer.
pub fn sync_cycle_bytes_64kb() -> SyncCycleBuffer {
    SyncCycleBuffer::with_capacity(65536)
}
