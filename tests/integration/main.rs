//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the driver against a
//! mock or simulated port.  All tests run on the host (x86_64) with no
//! real hardware required.

mod config_tests;
mod rgb_led_tests;
