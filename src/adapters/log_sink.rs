//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing device events to the `log` facade
//! (UART / USB-CDC on ESP-IDF, whatever logger the host installed
//! otherwise).

use log::{debug, info, warn};

use crate::app::events::DeviceEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`DeviceEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &DeviceEvent) {
        match event {
            DeviceEvent::Attached { size } => {
                info!("ATTACH | size={} bytes", size);
            }
            DeviceEvent::StateChanged { from, to } => {
                debug!("STATE | {} -> {}", from.name(), to.name());
            }
            DeviceEvent::AddressLatched { dir, addr } => {
                debug!("ADDR | {:?} latched 0x{:02x}", dir, addr);
            }
            DeviceEvent::AddressRejected { dir, addr } => {
                warn!("ADDR | {:?} rejected 0x{:02x}", dir, addr);
            }
            DeviceEvent::TransferComplete { dir, start, count } => {
                debug!("XFER | {:?} {} bytes from 0x{:02x}", dir, count, start);
            }
            DeviceEvent::TransferAborted { dir, error } => {
                warn!("XFER | {:?} aborted: {}", dir, error);
            }
            DeviceEvent::UnknownControl(code) => {
                warn!("CTRL | unknown code {}", code);
            }
        }
    }
}
