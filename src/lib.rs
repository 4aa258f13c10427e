//! Driver for 4-pin RGB LEDs on three PWM outputs.
//!
//! Exposes the pure-logic driver and its platform adapters for
//! integration testing.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.
//!
//! ```
//! use rgbled::adapters::hardware::LedcPort;
//! use rgbled::drivers::rgb_led::{RgbLed, Wiring};
//!
//! let mut port = LedcPort::new().unwrap();
//! let led = RgbLed::new(9, 10, 11, Wiring::CommonAnode);
//! led.setup(&mut port);
//! led.write_packed(&mut port, 0xFF8000);
//! assert_eq!(port.duty(9), Some(0));
//! assert_eq!(port.duty(10), Some(127));
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;

pub use app::ports::PwmPort;
pub use config::LedConfig;
pub use drivers::rgb_led::{Rgb, RgbLed, Wiring};
pub use error::{Error, Result};
