//! Size discovery.
//!
//! The device advertises its addressable byte count in register 0. It is
//! read exactly once, at attach, and cached for the life of the session.

use log::info;

use crate::app::ports::BusPort;
use crate::config::SIZE_REGISTER;
use crate::error::Result;

/// Read the size register.
pub fn discover_size(bus: &mut impl BusPort) -> Result<u8> {
    let size = bus.read_byte(SIZE_REGISTER)?;
    info!("discovery: device reports {} bytes", size);
    Ok(size)
}
