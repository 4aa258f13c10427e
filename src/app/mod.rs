//! Application boundary — the traits the LED driver is written against.
//!
//! The driver in [`crate::drivers`] never touches registers or HAL types.
//! It talks to the platform through the **port traits** defined in
//! [`ports`], keeping it fully testable without real peripherals.

pub mod ports;
