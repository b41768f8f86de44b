//! Unified error types for the EEPROM protocol.
//!
//! A single `Error` enum that every layer converts into, so the control
//! and data channels report failures the same way. All variants are `Copy`
//! so they can be returned from the hot transfer loop without allocation.
//!
//! A transfer issued in the wrong protocol state is deliberately *not* an
//! error: it reports zero bytes moved (see [`crate::app::service`]).

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible protocol operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Address outside `[0, size)`, or the size register targeted by a write.
    InvalidAddress { addr: u8, size: u8 },
    /// An address latch was attempted with an empty payload.
    MissingAddress,
    /// The working buffer cannot hold the requested transfer.
    AllocationFailure,
    /// Control code outside the recognised set.
    UnknownControl(u32),
    /// A bus transaction failed.
    Bus(BusError),
    /// Copying to or from the caller's buffer failed.
    Buffer(BufferError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAddress { addr, size } => {
                write!(f, "invalid address 0x{addr:02x} (size {size})")
            }
            Self::MissingAddress => write!(f, "address byte missing"),
            Self::AllocationFailure => write!(f, "working buffer unavailable"),
            Self::UnknownControl(code) => write!(f, "unknown control code {code}"),
            Self::Bus(e) => write!(f, "bus: {e}"),
            Self::Buffer(e) => write!(f, "buffer: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Bus errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// The device did not acknowledge its address or a data byte.
    NoAcknowledge,
    /// Another master won arbitration on the shared bus.
    ArbitrationLoss,
    /// Any other controller-reported failure.
    Other,
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAcknowledge => write!(f, "no acknowledge"),
            Self::ArbitrationLoss => write!(f, "arbitration lost"),
            Self::Other => write!(f, "bus fault"),
        }
    }
}

impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Self::Bus(e)
    }
}

// ---------------------------------------------------------------------------
// Buffer errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// The caller's buffer could not be read or written.
    Fault,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fault => write!(f, "caller buffer fault"),
        }
    }
}

impl From<BufferError> for Error {
    fn from(e: BufferError) -> Self {
        Self::Buffer(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
