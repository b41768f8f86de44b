//! Integration tests for the control → latch → transfer pipeline.

use i2c_eeprom::adapters::sim_bus::{BusOp, SimEeprom};
use i2c_eeprom::app::events::DeviceEvent;
use i2c_eeprom::fsm::{Direction, SessionState};
use i2c_eeprom::{ControlOp, ControlReply, Error};

use super::mock_bus::{attached, attached_with, traffic};

// ── Writes stream to consecutive registers ───────────────────

#[test]
fn write_sequence_streams_to_consecutive_addresses() {
    let (mut dev, mut sink) = attached(16);

    dev.control(ControlOp::BeginWrite, &mut sink);
    assert_eq!(dev.write(&[5u8], &mut sink), Ok(1));
    assert_eq!(dev.state(), SessionState::ReadyWrite);

    assert_eq!(dev.write(&[0xaau8, 0xbb, 0xcc], &mut sink), Ok(3));
    assert_eq!(dev.state(), SessionState::Idle);
    assert_eq!(
        &dev.bus().ops()[1..],
        &[
            BusOp::Write(5, 0xaa),
            BusOp::Write(6, 0xbb),
            BusOp::Write(7, 0xcc)
        ]
    );
}

// ── The size register is never a write target ────────────────

#[test]
fn write_to_size_register_is_rejected() {
    let (mut dev, mut sink) = attached(16);

    dev.control(ControlOp::BeginWrite, &mut sink);
    assert_eq!(
        dev.write(&[0u8], &mut sink),
        Err(Error::InvalidAddress { addr: 0, size: 16 })
    );
    assert_eq!(dev.state(), SessionState::AwaitWriteAddr);
    assert_eq!(
        sink.last(),
        Some(&DeviceEvent::AddressRejected {
            dir: Direction::Write,
            addr: 0
        })
    );
    assert_eq!(traffic(&dev), 0);
}

// ── Reads clamp at the end of the device ─────────────────────

#[test]
fn read_near_end_moves_only_remaining_bytes() {
    let mut image = [0u8; 16];
    image[0] = 16;
    image[15] = 0x7e;
    let (mut dev, mut sink) = attached_with(SimEeprom::with_contents(&image));

    dev.control(ControlOp::BeginRead, &mut sink);
    assert_eq!(dev.write(&[15u8], &mut sink), Ok(1));
    assert_eq!(dev.state(), SessionState::ReadyRead);

    let mut out = [0u8; 5];
    assert_eq!(dev.read(&mut out, &mut sink), Ok(1));
    assert_eq!(out, [0x7e, 0, 0, 0, 0]);
    assert_eq!(&dev.bus().ops()[1..], &[BusOp::Read(15)]);
    assert_eq!(dev.state(), SessionState::Idle);
}

// ── Out-of-range read address ────────────────────────────────

#[test]
fn read_address_past_end_is_rejected_and_retryable() {
    let (mut dev, mut sink) = attached(16);

    dev.control(ControlOp::BeginRead, &mut sink);
    assert_eq!(
        dev.write(&[20u8], &mut sink),
        Err(Error::InvalidAddress { addr: 20, size: 16 })
    );
    assert_eq!(dev.state(), SessionState::AwaitReadAddr);

    // Retry with a valid address.
    assert_eq!(dev.write(&[0u8], &mut sink), Ok(1));
    assert_eq!(dev.state(), SessionState::ReadyRead);
}

// ── QuerySize answers from cache in any state ────────────────

#[test]
fn query_size_is_cached_in_every_state() {
    let (mut dev, mut sink) = attached(16);

    assert_eq!(dev.control(ControlOp::QuerySize, &mut sink), ControlReply::Size(16));
    dev.control(ControlOp::BeginWrite, &mut sink);
    assert_eq!(dev.control(ControlOp::QuerySize, &mut sink), ControlReply::Size(16));
    assert_eq!(dev.state(), SessionState::AwaitWriteAddr);
    dev.write(&[3u8], &mut sink).unwrap();
    assert_eq!(dev.control_raw(37, &mut sink), Ok(ControlReply::Size(16)));
    assert_eq!(dev.state(), SessionState::ReadyWrite);

    assert_eq!(traffic(&dev), 0);
}

#[test]
fn query_size_reply_writes_one_byte_to_caller() {
    let (mut dev, mut sink) = attached(200);
    let reply = dev.control_raw(37, &mut sink).unwrap();
    let mut out = [0u8; 1];
    assert_eq!(reply.write_to(&mut out), Ok(1));
    assert_eq!(out, [200]);
}

// ── Wrong-state calls are harmless no-ops ────────────────────

#[test]
fn transfer_in_wrong_state_returns_zero() {
    let (mut dev, mut sink) = attached(16);
    let mut out = [0u8; 4];

    // Idle
    assert_eq!(dev.write(&[1u8, 2, 3], &mut sink), Ok(0));
    assert_eq!(dev.read(&mut out, &mut sink), Ok(0));

    // Waiting for a write address: read-style call cannot supply it.
    dev.control(ControlOp::BeginWrite, &mut sink);
    assert_eq!(dev.read(&mut out, &mut sink), Ok(0));
    assert_eq!(dev.state(), SessionState::AwaitWriteAddr);

    // Waiting for a read address.
    dev.control(ControlOp::BeginRead, &mut sink);
    assert_eq!(dev.read(&mut out, &mut sink), Ok(0));
    assert_eq!(dev.state(), SessionState::AwaitReadAddr);

    // Latched for read: write-style call moves nothing.
    dev.write(&[2u8], &mut sink).unwrap();
    assert_eq!(dev.write(&[9u8, 9], &mut sink), Ok(0));
    assert_eq!(dev.state(), SessionState::ReadyRead);

    assert_eq!(traffic(&dev), 0);
}

#[test]
fn begin_discards_pending_sequence() {
    let (mut dev, mut sink) = attached(16);

    dev.control(ControlOp::BeginWrite, &mut sink);
    dev.write(&[4u8], &mut sink).unwrap();
    dev.control(ControlOp::BeginRead, &mut sink);
    assert_eq!(dev.state(), SessionState::AwaitReadAddr);

    // The old write address is gone; this byte is a read address now.
    assert_eq!(dev.write(&[6u8], &mut sink), Ok(1));
    assert_eq!(dev.state(), SessionState::ReadyRead);
}

#[test]
fn zero_length_transfer_still_resets() {
    let (mut dev, mut sink) = attached(16);

    dev.control(ControlOp::BeginRead, &mut sink);
    dev.write(&[3u8], &mut sink).unwrap();
    let mut empty = [0u8; 0];
    assert_eq!(dev.read(&mut empty, &mut sink), Ok(0));
    assert_eq!(dev.state(), SessionState::Idle);
    assert_eq!(traffic(&dev), 0);
}

#[test]
fn address_latch_consumes_only_first_byte() {
    let (mut dev, mut sink) = attached(16);

    dev.control(ControlOp::BeginWrite, &mut sink);
    assert_eq!(dev.write(&[9u8, 1, 2, 3], &mut sink), Ok(1));
    assert_eq!(dev.session().cursor(), 9);
    assert_eq!(traffic(&dev), 0);
}

#[test]
fn written_bytes_read_back() {
    let (mut dev, mut sink) = attached(32);

    dev.control(ControlOp::BeginWrite, &mut sink);
    dev.write(&[10u8], &mut sink).unwrap();
    dev.write(b"hello", &mut sink).unwrap();

    dev.control(ControlOp::BeginRead, &mut sink);
    dev.write(&[10u8], &mut sink).unwrap();
    let mut out = [0u8; 5];
    assert_eq!(dev.read(&mut out, &mut sink), Ok(5));
    assert_eq!(&out, b"hello");
}

#[test]
fn empty_device_accepts_no_address() {
    let (mut dev, mut sink) = attached(0);

    dev.control(ControlOp::BeginRead, &mut sink);
    assert!(matches!(
        dev.write(&[0u8], &mut sink),
        Err(Error::InvalidAddress { .. })
    ));
    dev.control(ControlOp::BeginWrite, &mut sink);
    assert!(dev.write(&[1u8], &mut sink).is_err());
    assert_eq!(traffic(&dev), 0);
}

#[test]
fn unknown_control_code_is_rejected_without_state_change() {
    let (mut dev, mut sink) = attached(16);
    dev.control(ControlOp::BeginWrite, &mut sink);
    assert_eq!(dev.control_raw(0, &mut sink), Err(Error::UnknownControl(0)));
    assert_eq!(dev.state(), SessionState::AwaitWriteAddr);
}

#[test]
fn detach_returns_bus_with_contents() {
    let (mut dev, mut sink) = attached(16);
    dev.control(ControlOp::BeginWrite, &mut sink);
    dev.write(&[2u8], &mut sink).unwrap();
    dev.write(&[0x11u8], &mut sink).unwrap();
    let sim = dev.detach();
    assert_eq!(sim.cell(2), 0x11);
}
