//! Simulated EEPROM.
//!
//! An in-memory [`BusPort`] with 256 byte cells. Register 0 holds the
//! advertised size like the real part. Every transaction is recorded so
//! tests can assert on the exact bus traffic, and a fault can be injected
//! after a given number of transactions.

use crate::app::ports::BusPort;
use crate::config::SIZE_REGISTER;
use crate::error::BusError;

/// One recorded bus transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    Read(u8),
    Write(u8, u8),
}

pub struct SimEeprom {
    cells: [u8; 256],
    ops: Vec<BusOp>,
    /// Transactions left before every further one fails.
    fail_after: Option<usize>,
}

impl SimEeprom {
    /// Blank device advertising `size` bytes.
    pub fn with_size(size: u8) -> Self {
        let mut cells = [0u8; 256];
        cells[SIZE_REGISTER as usize] = size;
        Self {
            cells,
            ops: Vec::new(),
            fail_after: None,
        }
    }

    /// Device preloaded from `image`; `image[0]` is the size register.
    pub fn with_contents(image: &[u8]) -> Self {
        let mut sim = Self::with_size(0);
        let n = image.len().min(sim.cells.len());
        sim.cells[..n].copy_from_slice(&image[..n]);
        sim
    }

    /// Fail every transaction after the next `n` succeed.
    pub fn fail_after(&mut self, n: usize) {
        self.fail_after = Some(n);
    }

    /// Recorded transactions, oldest first.
    pub fn ops(&self) -> &[BusOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Raw cell contents, bypassing the bus.
    pub fn cell(&self, reg: u8) -> u8 {
        self.cells[reg as usize]
    }

    fn check_fault(&mut self) -> Result<(), BusError> {
        match self.fail_after {
            Some(0) => Err(BusError::NoAcknowledge),
            Some(ref mut n) => {
                *n -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl BusPort for SimEeprom {
    fn read_byte(&mut self, reg: u8) -> Result<u8, BusError> {
        self.check_fault()?;
        self.ops.push(BusOp::Read(reg));
        Ok(self.cells[reg as usize])
    }

    fn write_byte(&mut self, reg: u8, value: u8) -> Result<(), BusError> {
        self.check_fault()?;
        self.ops.push(BusOp::Write(reg, value));
        self.cells[reg as usize] = value;
        Ok(())
    }
}
