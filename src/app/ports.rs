//! Port traits — the hexagonal boundary between the LED driver and the platform.
//!
//! ```text
//!   Adapter ──▶ PwmPort ──▶ RgbLed (domain)
//! ```
//!
//! Driven adapters ([`LedcPort`](crate::adapters::hardware::LedcPort),
//! [`HalPwmPort`](crate::adapters::hal_pwm::HalPwmPort), test mocks)
//! implement [`PwmPort`].  The [`RgbLed`](crate::drivers::rgb_led::RgbLed)
//! driver borrows one per call, so a single port can serve several LEDs.

use crate::pins::PinId;

// ───────────────────────────────────────────────────────────────
// PWM port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Platform primitives the LED driver needs: "configure pin as output"
/// and "write analog value to pin".
///
/// Both calls are infallible at this boundary.  A platform fault is the
/// adapter's concern; it may log it but never hands it back to the driver.
pub trait PwmPort {
    /// Configure `pin` for output-capable PWM driving.
    ///
    /// Must be idempotent: configuring the same pin twice leaves it in the
    /// same state as configuring it once.
    fn configure_output(&mut self, pin: PinId);

    /// Set the duty cycle of `pin` to `value` out of 255.
    ///
    /// Writing to a pin that was never configured has no required
    /// physical effect.
    fn analog_write(&mut self, pin: PinId, value: u8);
}

impl<P: PwmPort + ?Sized> PwmPort for &mut P {
    fn configure_output(&mut self, pin: PinId) {
        (**self).configure_output(pin);
    }

    fn analog_write(&mut self, pin: PinId, value: u8) {
        (**self).analog_write(pin, value);
    }
}
