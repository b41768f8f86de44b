//! Shared access to one device from several callers.
//!
//! [`EepromDevice`] itself carries no lock and supports exactly one
//! in-flight `Begin → address → transfer` sequence. When more than one
//! caller can reach the same device, wrap it here: the lock is held for
//! the whole sequence passed to [`SharedEeprom::transaction`], so no other
//! caller can re-target the session between the steps.
//!
//! The raw mutex is a type parameter so the binding picks the flavour that
//! fits its execution context (`CriticalSectionRawMutex` across threads
//! and interrupts, `ThreadModeRawMutex` for thread-mode-only firmware).

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::app::ports::BusPort;
use crate::app::service::EepromDevice;

pub struct SharedEeprom<M: RawMutex, B> {
    inner: Mutex<M, RefCell<EepromDevice<B>>>,
}

impl<M: RawMutex, B: BusPort> SharedEeprom<M, B> {
    pub fn new(device: EepromDevice<B>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(device)),
        }
    }

    /// Run a complete protocol sequence with exclusive access.
    ///
    /// Must not be re-entered from inside `f`.
    pub fn transaction<R>(&self, f: impl FnOnce(&mut EepromDevice<B>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Unwrap the device (detach path).
    pub fn into_inner(self) -> EepromDevice<B> {
        self.inner.into_inner().into_inner()
    }
}
