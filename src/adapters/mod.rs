//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements | Connects to                      |
//! |------------|------------|----------------------------------|
//! | `i2c_bus`  | BusPort    | Any `embedded-hal` I2C controller|
//! | `sim_bus`  | BusPort    | In-memory EEPROM model           |
//! | `log_sink` | EventSink  | `log` facade                     |

pub mod i2c_bus;
pub mod log_sink;
pub mod sim_bus;
