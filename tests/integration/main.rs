//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the protocol against the
//! simulated EEPROM. All tests run on the host with no real bus required.

mod mock_bus;
mod protocol_tests;
