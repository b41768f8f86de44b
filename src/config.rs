//! Device binding configuration
//!
//! Where the EEPROM lives on the bus and how the binding layer names it.
//! Defaults match the stock board wiring; overrides arrive as JSON.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Register holding the device's addressable byte count.
pub const SIZE_REGISTER: u8 = 0x00;

/// Bus binding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    // --- Bus ---
    /// 7-bit device address on the shared bus
    pub bus_address: u8,
    /// Bus clock (Hz)
    pub bus_freq_hz: u32,

    // --- Binding ---
    /// Name the caller-facing entry point is registered under
    pub device_name: heapless::String<16>,
    /// Fixed device number for the entry point
    pub device_number: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        let mut device_name = heapless::String::new();
        let _ = device_name.push_str("i2c_eep");
        Self {
            bus_address: 0x37,
            bus_freq_hz: 100_000, // standard mode
            device_name,
            device_number: 246,
        }
    }
}

impl DeviceConfig {
    /// Parse a JSON override document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed config document"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Range-check every field. Rejects rather than clamps.
    pub fn validate(&self) -> Result<()> {
        // 0x00-0x07 and 0x78-0x7F are reserved by the bus specification.
        if !(0x08..=0x77).contains(&self.bus_address) {
            return Err(Error::Config("bus_address must be 0x08–0x77"));
        }
        if !(10_000..=1_000_000).contains(&self.bus_freq_hz) {
            return Err(Error::Config("bus_freq_hz must be 10 kHz–1 MHz"));
        }
        if self.device_name.is_empty() {
            return Err(Error::Config("device_name must not be empty"));
        }
        Ok(())
    }
}
