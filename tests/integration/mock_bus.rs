//! Shared fixtures for integration tests.
//!
//! A recording event sink, attach helpers for the simulated EEPROM, and a
//! traffic counter that ignores the attach-time size read so tests only
//! count the bus operations they caused.

use i2c_eeprom::EepromDevice;
use i2c_eeprom::adapters::sim_bus::SimEeprom;
use i2c_eeprom::app::events::DeviceEvent;
use i2c_eeprom::app::ports::EventSink;

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<DeviceEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn last(&self) -> Option<&DeviceEvent> {
        self.events.last()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &DeviceEvent) {
        self.events.push(event.clone());
    }
}

// ── Device fixtures ───────────────────────────────────────────

/// Attach to a blank simulated device of `size` bytes.
pub fn attached(size: u8) -> (EepromDevice<SimEeprom>, RecordingSink) {
    attached_with(SimEeprom::with_size(size))
}

/// Attach to a preloaded simulated device.
pub fn attached_with(mut sim: SimEeprom) -> (EepromDevice<SimEeprom>, RecordingSink) {
    let mut sink = RecordingSink::new();
    sim.clear_ops();
    let dev = EepromDevice::attach(sim, &mut sink).expect("attach");
    (dev, sink)
}

/// Number of bus transactions since attach (size read excluded).
pub fn traffic(dev: &EepromDevice<SimEeprom>) -> usize {
    dev.bus().ops().len() - 1
}
