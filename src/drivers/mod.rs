//! LED drivers.

pub mod rgb_led;
