//! Bounds-checked byte access to an SMBus EEPROM.
//!
//! A caller selects an operation on the control channel, latches an
//! address with one write-style call, then streams bytes with the next
//! call. The protocol core is pure logic over port traits; adapters
//! connect it to a real `embedded-hal` I2C controller or to an in-memory
//! simulation. ESP-IDF-specific code lives only in the firmware binary.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod discovery;
pub mod error;
pub mod fsm;
pub mod shared;
pub mod transfer;

pub use app::commands::{ControlOp, ControlReply};
pub use app::service::EepromDevice;
pub use error::{Error, Result};
pub use shared::SharedEeprom;
