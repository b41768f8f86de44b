//! SMBus adapter — bridges any `embedded-hal` I2C controller to [`BusPort`].
//!
//! Uses the SMBus byte-data transactions the EEPROM speaks:
//!
//! ```text
//! read-byte-data:   S addr+W reg  Sr addr+R [data] P
//! write-byte-data:  S addr+W reg data P
//! ```
//!
//! On ESP-IDF the controller is `esp_idf_hal::i2c::I2cDriver`; on the host
//! any `embedded_hal::i2c::I2c` implementation works.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

use crate::app::ports::BusPort;
use crate::error::BusError;

/// One EEPROM at a fixed 7-bit address on an I2C controller.
pub struct SmbusEeprom<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> SmbusEeprom<I> {
    pub fn new(i2c: I, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the controller back (detach).
    pub fn release(self) -> I {
        self.i2c
    }
}

fn map_error(kind: ErrorKind) -> BusError {
    match kind {
        ErrorKind::NoAcknowledge(_) => BusError::NoAcknowledge,
        ErrorKind::ArbitrationLoss => BusError::ArbitrationLoss,
        _ => BusError::Other,
    }
}

impl<I: I2c> BusPort for SmbusEeprom<I> {
    fn read_byte(&mut self, reg: u8) -> Result<u8, BusError> {
        let mut data = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut data)
            .map_err(|e| map_error(e.kind()))?;
        Ok(data[0])
    }

    fn write_byte(&mut self, reg: u8, value: u8) -> Result<(), BusError> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(|e| map_error(e.kind()))
    }
}
