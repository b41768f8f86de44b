//! Protocol state machine.
//!
//! ```text
//!            BeginWrite                latch ok
//!   (any) ─────────────▶ AwaitWriteAddr ───────▶ ReadyWrite ─┐
//!            BeginRead                 latch ok              │ transfer
//!   (any) ─────────────▶ AwaitReadAddr  ───────▶ ReadyRead  ─┤ (always)
//!                                                            ▼
//!                                                           Idle
//! ```
//!
//! Only the edges above exist. A rejected latch leaves the state where it
//! was, and every transfer out of a ready state lands back in `Idle`
//! regardless of how many bytes moved. The data holder that owns the
//! state lives in [`context`].

pub mod address;
pub mod context;

// ---------------------------------------------------------------------------
// Transfer direction
// ---------------------------------------------------------------------------

/// Which way payload bytes flow relative to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Caller → device.
    Write,
    /// Device → caller.
    Read,
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Enumeration of all protocol states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// No sequence in progress.
    #[default]
    Idle,
    /// `BeginWrite` received; waiting for the target address.
    AwaitWriteAddr,
    /// Address latched; the next write-style call streams to the device.
    ReadyWrite,
    /// `BeginRead` received; waiting for the source address.
    AwaitReadAddr,
    /// Address latched; the next read-style call streams from the device.
    ReadyRead,
}

impl SessionState {
    /// State entered by a begin operation. Unconditional from any state.
    pub const fn begin(dir: Direction) -> Self {
        match dir {
            Direction::Write => Self::AwaitWriteAddr,
            Direction::Read => Self::AwaitReadAddr,
        }
    }

    /// Direction of the pending address latch, if one is expected.
    pub const fn awaiting_address(self) -> Option<Direction> {
        match self {
            Self::AwaitWriteAddr => Some(Direction::Write),
            Self::AwaitReadAddr => Some(Direction::Read),
            _ => None,
        }
    }

    /// Direction of the pending transfer, if an address is latched.
    pub const fn ready(self) -> Option<Direction> {
        match self {
            Self::ReadyWrite => Some(Direction::Write),
            Self::ReadyRead => Some(Direction::Read),
            _ => None,
        }
    }

    /// State reached by a successful latch, or `None` when no latch is
    /// expected from `self`.
    pub const fn latched(self) -> Option<Self> {
        match self {
            Self::AwaitWriteAddr => Some(Self::ReadyWrite),
            Self::AwaitReadAddr => Some(Self::ReadyRead),
            _ => None,
        }
    }

    /// Short human-readable name, used in log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitWriteAddr => "await-write-addr",
            Self::ReadyWrite => "ready-write",
            Self::AwaitReadAddr => "await-read-addr",
            Self::ReadyRead => "ready-read",
        }
    }
}
