//! embedded-hal adapter — drives the LED through any HAL's PWM channels.
//!
//! Boards that are not ESP-IDF based (or that already own typed PWM
//! channels) hand three [`SetDutyCycle`] channels to [`HalPwmPort`] and
//! tag them with the pin numbers the [`RgbLed`](crate::drivers::rgb_led::RgbLed)
//! was built with.  As with `LedcPort`, writes reach a channel only after
//! its pin has been configured.

use embedded_hal::pwm::{Error as _, SetDutyCycle};
use log::{debug, trace, warn};

use crate::app::ports::PwmPort;
use crate::pins::{MAX_DUTY, PinId};

/// Three HAL PWM channels addressed by pin number.
pub struct HalPwmPort<R, G, B> {
    pins: [PinId; 3],
    configured: [bool; 3],
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> HalPwmPort<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// `pins` lists the ids for `red`, `green` and `blue` in that order.
    pub fn new(pins: [PinId; 3], red: R, green: G, blue: B) -> Self {
        Self {
            pins,
            configured: [false; 3],
            red,
            green,
            blue,
        }
    }

    pub fn is_configured(&self, pin: PinId) -> bool {
        self.slot(pin).is_some_and(|i| self.configured[i])
    }

    /// Give the channels back.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    fn slot(&self, pin: PinId) -> Option<usize> {
        self.pins.iter().position(|&p| p == pin)
    }
}

impl<R, G, B> PwmPort for HalPwmPort<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn configure_output(&mut self, pin: PinId) {
        // HAL channels are outputs by construction; configuring only
        // enables writes through this port.
        match self.slot(pin) {
            Some(i) => {
                self.configured[i] = true;
                debug!("hal_pwm: pin {} ready", pin);
            }
            None => warn!("hal_pwm: pin {} has no PWM channel", pin),
        }
    }

    fn analog_write(&mut self, pin: PinId, value: u8) {
        let Some(i) = self.slot(pin) else {
            warn!("hal_pwm: write to unknown pin {} ignored", pin);
            return;
        };
        if !self.configured[i] {
            trace!("hal_pwm: write to unconfigured pin {} dropped", pin);
            return;
        }

        let num = u16::from(value);
        let den = u16::from(MAX_DUTY);
        let kind = match i {
            0 => self.red.set_duty_cycle_fraction(num, den).err().map(|e| e.kind()),
            1 => self.green.set_duty_cycle_fraction(num, den).err().map(|e| e.kind()),
            _ => self.blue.set_duty_cycle_fraction(num, den).err().map(|e| e.kind()),
        };
        if let Some(kind) = kind {
            warn!("hal_pwm: pin {} duty write failed: {:?}", pin, kind);
        }
    }
}
