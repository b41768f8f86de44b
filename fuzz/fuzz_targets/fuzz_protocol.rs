//! Fuzz target: arbitrary control/data call sequences
//!
//! The first byte is the device size; every following pair of bytes is
//! one call (`kind`, `arg`). Asserts the session never panics, never
//! addresses past the device end, never writes the size register, and
//! never issues bus traffic outside a ready state.
//!
//! cargo fuzz run fuzz_protocol

#![no_main]

use i2c_eeprom::adapters::log_sink::LogEventSink;
use i2c_eeprom::adapters::sim_bus::{BusOp, SimEeprom};
use i2c_eeprom::EepromDevice;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&size, calls)) = data.split_first() else {
        return;
    };
    let mut sink = LogEventSink::new();
    let Ok(mut dev) = EepromDevice::attach(SimEeprom::with_size(size), &mut sink) else {
        return;
    };

    for call in calls.chunks_exact(2) {
        let (kind, arg) = (call[0], call[1]);
        let ready = dev.state().ready().is_some();
        let before = dev.bus().ops().len();

        let moved = match kind % 3 {
            0 => dev
                .control_raw(33 + u32::from(arg % 7), &mut sink)
                .map(|_| 0),
            1 => {
                let payload = [arg; 8];
                let len = usize::from(kind / 3) % 9;
                dev.write(&payload[..len], &mut sink)
            }
            _ => {
                let mut out = [0u8; 8];
                let len = usize::from(arg) % 9;
                dev.read(&mut out[..len], &mut sink)
            }
        };

        if !ready {
            assert_eq!(dev.bus().ops().len(), before, "bus touched outside a ready state");
        }
        if let Ok(n) = moved {
            assert!(n <= 8, "moved more than requested");
        }
        assert_eq!(dev.size(), size);
    }

    // Skip the attach-time size read.
    for op in &dev.bus().ops()[1..] {
        match *op {
            BusOp::Read(reg) => assert!(reg < size, "read 0x{reg:02x} past end"),
            BusOp::Write(reg, _) => assert!(reg != 0 && reg < size, "bad write 0x{reg:02x}"),
        }
    }
});
