//! Port traits — the hexagonal boundary between the protocol and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ EepromDevice (domain)
//! ```
//!
//! The bus, the caller's buffers and the event sink all sit behind these
//! traits. [`EepromDevice`](super::service::EepromDevice) consumes them via
//! generics, so the protocol core never touches a bus controller directly.

use crate::error::{BufferError, BusError};

// ───────────────────────────────────────────────────────────────
// Bus transport (driven adapter: domain ↔ device)
// ───────────────────────────────────────────────────────────────

/// Single-byte synchronous access to one fixed device on the bus.
///
/// Every call is exactly one bus transaction and blocks until it
/// completes. There is no timeout or retry at this layer.
pub trait BusPort {
    /// Read the byte stored at register `reg`.
    fn read_byte(&mut self, reg: u8) -> Result<u8, BusError>;

    /// Store `value` at register `reg`.
    fn write_byte(&mut self, reg: u8, value: u8) -> Result<(), BusError>;
}

impl<B: BusPort + ?Sized> BusPort for &mut B {
    fn read_byte(&mut self, reg: u8) -> Result<u8, BusError> {
        (**self).read_byte(reg)
    }

    fn write_byte(&mut self, reg: u8, value: u8) -> Result<(), BusError> {
        (**self).write_byte(reg, value)
    }
}

// ───────────────────────────────────────────────────────────────
// Buffer transport (caller buffer ↔ working buffer)
// ───────────────────────────────────────────────────────────────

/// A caller-supplied buffer the device copies input bytes *from*.
///
/// Bindings whose caller memory lives elsewhere (another address space,
/// a DMA region) implement this; plain slices already do.
pub trait SourceBuffer {
    /// Number of bytes the caller offered.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the first `dst.len()` offered bytes into `dst`.
    fn copy_to(&self, dst: &mut [u8]) -> Result<(), BufferError>;
}

/// A caller-supplied buffer the device copies output bytes *into*.
pub trait SinkBuffer {
    /// Number of bytes the caller can accept.
    fn capacity(&self) -> usize;

    /// Copy all of `src` into the front of the caller's buffer.
    fn copy_from(&mut self, src: &[u8]) -> Result<(), BufferError>;
}

impl SourceBuffer for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn copy_to(&self, dst: &mut [u8]) -> Result<(), BufferError> {
        let src = self.get(..dst.len()).ok_or(BufferError::Fault)?;
        dst.copy_from_slice(src);
        Ok(())
    }
}

impl<const N: usize> SourceBuffer for [u8; N] {
    fn len(&self) -> usize {
        N
    }

    fn copy_to(&self, dst: &mut [u8]) -> Result<(), BufferError> {
        self.as_slice().copy_to(dst)
    }
}

impl SinkBuffer for [u8] {
    fn capacity(&self) -> usize {
        self.len()
    }

    fn copy_from(&mut self, src: &[u8]) -> Result<(), BufferError> {
        let dst = self.get_mut(..src.len()).ok_or(BufferError::Fault)?;
        dst.copy_from_slice(src);
        Ok(())
    }
}

impl<const N: usize> SinkBuffer for [u8; N] {
    fn capacity(&self) -> usize {
        N
    }

    fn copy_from(&mut self, src: &[u8]) -> Result<(), BufferError> {
        self.as_mut_slice().copy_from(src)
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`DeviceEvent`](super::events::DeviceEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::DeviceEvent);
}
