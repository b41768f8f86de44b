//! EEPROM dump firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  I2cDriver (I2C0) ──▶ SmbusEeprom ──▶ EepromDevice        │
//! │                                        │                  │
//! │                                        └──▶ LogEventSink  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Attaches the EEPROM, reports its size and dumps every cell through the
//! latched-address protocol.
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::info;

use i2c_eeprom::adapters::i2c_bus::SmbusEeprom;
use i2c_eeprom::adapters::log_sink::LogEventSink;
use i2c_eeprom::config::DeviceConfig;
use i2c_eeprom::{ControlOp, ControlReply, EepromDevice};

/// Cells printed per log line.
const DUMP_ROW: usize = 16;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("i2c-eeprom v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Bus setup ──────────────────────────────────────────
    let config = DeviceConfig::default();
    config.validate()?;

    let peripherals = Peripherals::take()?;
    let i2c_config = I2cConfig::new().baudrate(Hertz(config.bus_freq_hz));
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio8, // SDA
        peripherals.pins.gpio9, // SCL
        &i2c_config,
    )?;
    info!(
        "{}: bus address 0x{:02x} at {} Hz (device {})",
        config.device_name, config.bus_address, config.bus_freq_hz, config.device_number
    );

    // ── 3. Attach (size discovery) ────────────────────────────
    let mut sink = LogEventSink::new();
    let mut device = EepromDevice::attach(SmbusEeprom::new(i2c, config.bus_address), &mut sink)?;

    if let ControlReply::Size(size) = device.control(ControlOp::QuerySize, &mut sink) {
        info!("{}: {} bytes", config.device_name, size);
    }

    // ── 4. Dump through the protocol ──────────────────────────
    if device.size() > 0 {
        device.control(ControlOp::BeginRead, &mut sink);
        device.write(&[0u8], &mut sink)?;
        let mut image = [0u8; 256];
        let n = device.read(&mut image, &mut sink)?;

        for (row, chunk) in image[..n].chunks(DUMP_ROW).enumerate() {
            info!("{:02x}: {:02x?}", row * DUMP_ROW, chunk);
        }
    }

    loop {
        FreeRtos::delay_ms(1000);
    }
}
