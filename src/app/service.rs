//! Device service — the hexagonal core.
//!
//! [`EepromDevice`] owns the bus transport, the session and the working
//! buffer for one attached EEPROM. It exposes the two caller channels:
//!
//! ```text
//!  control(op)  ──▶ ┌─────────────────────────────┐
//!                   │        EepromDevice          │ ──▶ BusPort
//!  write(buf)   ──▶ │ Session · Latch · Transfer   │
//!  read(buf)    ◀── └─────────────────────────────┘ ──▶ EventSink
//! ```
//!
//! A data-channel call that does not fit the current state is not an
//! error. It moves nothing, touches no bus, and returns `Ok(0)`; callers
//! detect protocol misuse from the count.

use log::{debug, info, warn};

use crate::discovery::discover_size;
use crate::error::{Error, Result};
use crate::fsm::context::DeviceSession;
use crate::fsm::{Direction, SessionState};
use crate::transfer::{self, scratch::{SCRATCH_CAPACITY, Scratch}};

use super::commands::{ControlOp, ControlReply};
use super::events::DeviceEvent;
use super::ports::{BusPort, EventSink, SinkBuffer, SourceBuffer};

// ───────────────────────────────────────────────────────────────
// EepromDevice
// ───────────────────────────────────────────────────────────────

/// One attached EEPROM and its protocol session.
///
/// `N` is the working-buffer capacity. A transfer whose clamped count
/// exceeds it fails with [`Error::AllocationFailure`] before any bus I/O.
pub struct EepromDevice<B, const N: usize = SCRATCH_CAPACITY> {
    bus: B,
    session: DeviceSession,
    scratch: Scratch<N>,
}

impl<B: BusPort> EepromDevice<B> {
    /// Attach to the device behind `bus`: read its size once and start an
    /// idle session.
    pub fn attach(bus: B, sink: &mut impl EventSink) -> Result<Self> {
        Self::attach_with_scratch(bus, sink)
    }
}

impl<B: BusPort, const N: usize> EepromDevice<B, N> {
    // ── Lifecycle ─────────────────────────────────────────────

    /// [`EepromDevice::attach`] with a working buffer of `N` bytes.
    pub fn attach_with_scratch(mut bus: B, sink: &mut impl EventSink) -> Result<Self> {
        let size = discover_size(&mut bus)?;
        let scratch = Scratch::<N>::new();
        if scratch.capacity() < usize::from(size) {
            warn!(
                "eeprom: scratch of {} bytes is smaller than the device ({} bytes)",
                scratch.capacity(),
                size
            );
        }
        sink.emit(&DeviceEvent::Attached { size });
        info!("eeprom: attached, size = {}", size);
        Ok(Self {
            bus,
            session: DeviceSession::new(size),
            scratch,
        })
    }

    /// Drop the session and hand the bus transport back.
    pub fn detach(self) -> B {
        info!("eeprom: detached");
        self.bus
    }

    // ── Control channel ───────────────────────────────────────

    /// Apply a control operation.
    pub fn control(&mut self, op: ControlOp, sink: &mut impl EventSink) -> ControlReply {
        let dir = match op {
            ControlOp::BeginWrite => Direction::Write,
            ControlOp::BeginRead => Direction::Read,
            ControlOp::QuerySize => return ControlReply::Size(self.session.size()),
        };
        let prev = self.session.state();
        self.session.begin(dir);
        note_transition(prev, self.session.state(), sink);
        ControlReply::Ack
    }

    /// Apply a control operation given by its wire code.
    pub fn control_raw(&mut self, code: u32, sink: &mut impl EventSink) -> Result<ControlReply> {
        let op = ControlOp::try_from(code).inspect_err(|_| {
            debug!("eeprom: unknown control code {}", code);
            sink.emit(&DeviceEvent::UnknownControl(code));
        })?;
        Ok(self.control(op, sink))
    }

    // ── Data channel ──────────────────────────────────────────

    /// Write-style call.
    ///
    /// While an address is expected, consumes exactly one byte of `input`
    /// as that address. While `ReadyWrite`, streams up to `input.len()`
    /// bytes to the device. Otherwise does nothing.
    pub fn write(
        &mut self,
        input: &(impl SourceBuffer + ?Sized),
        sink: &mut impl EventSink,
    ) -> Result<usize> {
        let state = self.session.state();
        if let Some(dir) = state.awaiting_address() {
            return self.latch_from(dir, input, sink);
        }
        if state == SessionState::ReadyWrite {
            return self.write_payload(input, sink);
        }
        debug!("eeprom: write ignored in {}", state.name());
        Ok(0)
    }

    /// Read-style call.
    ///
    /// While `ReadyRead`, fills up to `output.capacity()` bytes from the
    /// device. Otherwise does nothing.
    pub fn read(
        &mut self,
        output: &mut (impl SinkBuffer + ?Sized),
        sink: &mut impl EventSink,
    ) -> Result<usize> {
        let state = self.session.state();
        if state != SessionState::ReadyRead {
            debug!("eeprom: read ignored in {}", state.name());
            return Ok(0);
        }

        let start = self.session.cursor();
        let count = self.session.transfer_len(output.capacity());
        let staged = self.scratch.stage(count)?;

        let result = transfer::collect_in(&mut self.bus, start, staged).and_then(|n| {
            output.copy_from(&staged[..n])?;
            Ok(n)
        });
        self.finish(Direction::Read, start, result, sink)
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current protocol state.
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Cached device size.
    pub fn size(&self) -> u8 {
        self.session.size()
    }

    pub fn session(&self) -> &DeviceSession {
        &self.session
    }

    /// The bus transport, for inspection only.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    // ── Internal ──────────────────────────────────────────────

    fn latch_from(
        &mut self,
        dir: Direction,
        input: &(impl SourceBuffer + ?Sized),
        sink: &mut impl EventSink,
    ) -> Result<usize> {
        if input.is_empty() {
            return Err(Error::MissingAddress);
        }
        let staged = self.scratch.stage(1)?;
        input.copy_to(staged)?;
        let addr = staged[0];

        let prev = self.session.state();
        match self.session.latch(addr) {
            Ok(_) => {
                sink.emit(&DeviceEvent::AddressLatched { dir, addr });
                note_transition(prev, self.session.state(), sink);
                Ok(1)
            }
            Err(e) => {
                debug!("eeprom: {}", e);
                sink.emit(&DeviceEvent::AddressRejected { dir, addr });
                Err(e)
            }
        }
    }

    fn write_payload(
        &mut self,
        input: &(impl SourceBuffer + ?Sized),
        sink: &mut impl EventSink,
    ) -> Result<usize> {
        let start = self.session.cursor();
        let count = self.session.transfer_len(input.len());
        let staged = self.scratch.stage(count)?;
        input.copy_to(staged)?;

        let result = transfer::stream_out(&mut self.bus, start, staged);
        self.finish(Direction::Write, start, result, sink)
    }

    /// Close out a transfer: back to `Idle` whatever the outcome.
    fn finish(
        &mut self,
        dir: Direction,
        start: u8,
        result: Result<usize>,
        sink: &mut impl EventSink,
    ) -> Result<usize> {
        let prev = self.session.state();
        self.session.complete();
        match result {
            Ok(count) => sink.emit(&DeviceEvent::TransferComplete { dir, start, count }),
            Err(error) => sink.emit(&DeviceEvent::TransferAborted { dir, error }),
        }
        note_transition(prev, self.session.state(), sink);
        result
    }
}

fn note_transition(from: SessionState, to: SessionState, sink: &mut impl EventSink) {
    if from != to {
        sink.emit(&DeviceEvent::StateChanged { from, to });
    }
}
