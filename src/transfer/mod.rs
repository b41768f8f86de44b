//! Byte transfer engine.
//!
//! One bus transaction per byte, strictly in address order, no batching.
//! The write path streams bytes already staged from the caller; the read
//! path collects into the working buffer so the caller sees either the
//! whole transfer or nothing.
//!
//! Callers bound the slice lengths with
//! [`DeviceSession::transfer_len`](crate::fsm::context::DeviceSession::transfer_len)
//! so that `start + len` never exceeds the device size.

pub mod scratch;

use log::{trace, warn};

use crate::app::ports::BusPort;
use crate::error::{BusError, Result};

/// Register for the `i`-th byte of a transfer starting at `start`.
fn register(start: u8, i: usize) -> u8 {
    debug_assert!(start as usize + i <= u8::MAX as usize);
    (start as usize + i) as u8
}

/// Write `data` to consecutive registers from `start`. Returns the count.
///
/// Stops at the first failed transaction; bytes before it have already
/// reached the device.
pub fn stream_out(bus: &mut impl BusPort, start: u8, data: &[u8]) -> Result<usize> {
    for (i, &byte) in data.iter().enumerate() {
        let reg = register(start, i);
        bus.write_byte(reg, byte).inspect_err(|e| report(reg, *e))?;
        trace!("xfer: wrote 0x{:02x} -> [0x{:02x}]", byte, reg);
    }
    Ok(data.len())
}

/// Fill `dst` from consecutive registers from `start`. Returns the count.
pub fn collect_in(bus: &mut impl BusPort, start: u8, dst: &mut [u8]) -> Result<usize> {
    for (i, slot) in dst.iter_mut().enumerate() {
        let reg = register(start, i);
        *slot = bus.read_byte(reg).inspect_err(|e| report(reg, *e))?;
        trace!("xfer: read [0x{:02x}] = 0x{:02x}", reg, *slot);
    }
    Ok(dst.len())
}

fn report(reg: u8, e: BusError) {
    warn!("xfer: bus fault at register 0x{:02x}: {}", reg, e);
}
