//! Reusable working buffer.
//!
//! Every transfer stages its bytes here instead of allocating per call.
//! The capacity covers the largest device the size register can describe.

use crate::error::{Error, Result};

/// Largest transfer a single call can stage: one full 8-bit address space.
pub const SCRATCH_CAPACITY: usize = 256;

/// Fixed-capacity working buffer, reused across transfers.
pub struct Scratch<const N: usize = SCRATCH_CAPACITY> {
    buf: heapless::Vec<u8, N>,
}

impl<const N: usize> Scratch<N> {
    pub const fn new() -> Self {
        Self {
            buf: heapless::Vec::new(),
        }
    }

    /// Hand out a zeroed region of exactly `len` bytes.
    ///
    /// Fails with [`Error::AllocationFailure`] when `len` exceeds the
    /// capacity; the buffer is left empty in that case.
    pub fn stage(&mut self, len: usize) -> Result<&mut [u8]> {
        self.buf.clear();
        self.buf
            .resize(len, 0)
            .map_err(|()| Error::AllocationFailure)?;
        Ok(self.buf.as_mut_slice())
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for Scratch<N> {
    fn default() -> Self {
        Self::new()
    }
}
