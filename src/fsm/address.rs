//! Address validation.
//!
//! Register 0 holds the device size. It may be read like any other cell
//! but never targeted by a write.

use super::Direction;
use crate::config::SIZE_REGISTER;
use crate::error::{Error, Result};

/// Check `addr` against the device `size` for a transfer in `dir`.
pub fn validate(dir: Direction, addr: u8, size: u8) -> Result<()> {
    let in_range = addr < size;
    let allowed = match dir {
        Direction::Read => in_range,
        Direction::Write => in_range && addr != SIZE_REGISTER,
    };
    if allowed {
        Ok(())
    } else {
        Err(Error::InvalidAddress { addr, size })
    }
}
