//! Outbound device events.
//!
//! [`EepromDevice`](super::service::EepromDevice) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them.

use crate::error::Error;
use crate::fsm::{Direction, SessionState};

/// Structured events emitted by the protocol core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    /// Size discovery finished; the device is usable.
    Attached { size: u8 },

    /// The session moved between states.
    StateChanged { from: SessionState, to: SessionState },

    /// An address was validated and latched.
    AddressLatched { dir: Direction, addr: u8 },

    /// An address was refused; the session is unchanged.
    AddressRejected { dir: Direction, addr: u8 },

    /// A transfer ran to completion.
    TransferComplete { dir: Direction, start: u8, count: usize },

    /// A transfer stopped early on a bus or buffer fault.
    TransferAborted { dir: Direction, error: Error },

    /// A control code outside the recognised set was refused.
    UnknownControl(u32),
}
