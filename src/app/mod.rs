//! Application core — the protocol, zero direct I/O.
//!
//! Control dispatch, address latching and transfer orchestration live in
//! [`service`]. All interaction with the bus and the caller's buffers
//! happens through **port traits** defined in [`ports`], keeping this
//! layer fully testable against a simulated device.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
