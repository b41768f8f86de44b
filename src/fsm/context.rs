//! Per-device session data.
//!
//! One [`DeviceSession`] exists per attached device. It is the only place
//! the protocol state, cursor and size live, and it only changes through
//! the methods below.

use log::debug;

use super::address;
use super::{Direction, SessionState};
use crate::error::Result;

/// Protocol progress for one attached device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSession {
    state: SessionState,
    /// Addressable byte count, fixed at attach.
    size: u8,
    /// Latched address. Only meaningful in a ready state.
    cursor: u8,
}

impl DeviceSession {
    /// Create a session for a device that reported `size` bytes.
    pub fn new(size: u8) -> Self {
        Self {
            state: SessionState::Idle,
            size,
            cursor: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// Start a new sequence, discarding whatever was in progress.
    pub fn begin(&mut self, dir: Direction) {
        self.state = SessionState::begin(dir);
    }

    /// Validate and latch `addr`. On failure nothing changes.
    ///
    /// Returns the direction of the sequence the address belongs to, or
    /// `None` if no address was expected (the call is then a no-op).
    pub fn latch(&mut self, addr: u8) -> Result<Option<Direction>> {
        let (Some(dir), Some(next)) = (self.state.awaiting_address(), self.state.latched()) else {
            return Ok(None);
        };
        address::validate(dir, addr, self.size)?;
        self.cursor = addr;
        self.state = next;
        debug!("session: latched 0x{:02x} for {:?}", addr, dir);
        Ok(Some(dir))
    }

    /// Number of bytes a transfer of `requested` bytes may move from the
    /// latched cursor without crossing the end of the device.
    pub fn transfer_len(&self, requested: usize) -> usize {
        requested.min(self.size.saturating_sub(self.cursor) as usize)
    }

    /// End the current transfer. Always lands in `Idle`.
    pub fn complete(&mut self) {
        self.state = SessionState::Idle;
        self.cursor = 0;
    }
}
