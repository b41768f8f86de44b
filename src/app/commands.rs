//! Control-channel operations.
//!
//! Out-of-band requests that advance or query the session without moving
//! payload data. The numeric codes exist only at the boundary, for
//! compatibility with existing callers; inside the crate everything is a
//! [`ControlOp`].

use crate::app::ports::SinkBuffer;
use crate::error::{Error, Result};

/// Operations accepted on the control channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ControlOp {
    /// Start a write sequence; the next data-channel write is the address.
    BeginWrite = 35,
    /// Start a read sequence; the next data-channel write is the address.
    BeginRead = 36,
    /// Report the cached device size.
    QuerySize = 37,
}

impl ControlOp {
    /// Wire code for this operation.
    pub const fn code(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for ControlOp {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self> {
        match code {
            35 => Ok(Self::BeginWrite),
            36 => Ok(Self::BeginRead),
            37 => Ok(Self::QuerySize),
            other => Err(Error::UnknownControl(other)),
        }
    }
}

/// What a control operation hands back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlReply {
    /// State advanced; nothing to return.
    Ack,
    /// Cached device size.
    Size(u8),
}

impl ControlReply {
    /// Write the reply payload back to the caller. Only `Size` carries
    /// one; returns the number of bytes written.
    pub fn write_to(&self, out: &mut (impl SinkBuffer + ?Sized)) -> Result<usize> {
        match self {
            Self::Ack => Ok(0),
            Self::Size(size) => {
                out.copy_from(&[*size])?;
                Ok(1)
            }
        }
    }
}
