//! Size-classed reuse pool for aligned buffers.

use hadal_core::Alignment;

use crate::aligned::AlignedBuffer;
use crate::error::AllocError;

/// A capacity-capped pool of [`AlignedBuffer`]s for reuse.
///
/// Repeatedly allocating and freeing aligned regions is the hot path of
/// callers that stage data for vectorized or device-transfer code.
/// The pool keeps released buffers and hands them back to matching
/// requests, falling through to a fresh allocation otherwise.
///
/// A pooled buffer satisfies a request when its length matches exactly
/// and its boundary is at least as strict as the one requested (any
/// power-of-two boundary implies every smaller one). Reused buffers are
/// re-zeroed so the zero-init guarantee of [`AlignedBuffer::new`] holds
/// either way.
#[derive(Debug)]
pub struct BufferPool {
    capacity: usize,
    buffers: Vec<AlignedBuffer>,
}

impl BufferPool {
    /// Create a pool that retains at most `capacity` released buffers.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            buffers: Vec::with_capacity(capacity),
        }
    }

    /// Maximum number of retained buffers.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of buffers currently available for reuse.
    pub fn available(&self) -> usize {
        self.buffers.len()
    }

    /// Acquire a zeroed buffer of exactly `len` elements on (at least)
    /// the given boundary.
    ///
    /// Reuses a pooled buffer when one matches, otherwise allocates.
    pub fn acquire(&mut self, len: usize, alignment: Alignment) -> Result<AlignedBuffer, AllocError> {
        let found = self
            .buffers
            .iter()
            .position(|b| b.len() == len && b.alignment() >= alignment);
        match found {
            Some(idx) => {
                let mut buf = self.buffers.swap_remove(idx);
                buf.fill(0.0);
                Ok(buf)
            }
            None => AlignedBuffer::new(len, alignment),
        }
    }

    /// Return a buffer to the pool.
    ///
    /// Dropped (freed immediately) if the pool is at capacity.
    pub fn release(&mut self, buffer: AlignedBuffer) {
        if self.buffers.len() < self.capacity {
            self.buffers.push(buffer);
        }
    }

    /// Free all retained buffers.
    pub fn clear(&mut self) {
        self.buffers.clear();
    }
}
