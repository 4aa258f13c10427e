//! 4-pin RGB LED driver.
//!
//! Three PWM outputs drive the red, green and blue dies of a discrete RGB
//! LED.  The driver only knows pin numbers and the wiring polarity; every
//! hardware access goes through a [`PwmPort`].
//!
//! ## Wiring polarity
//!
//! | Wiring          | Shared electrode | Drive value       |
//! |-----------------|------------------|-------------------|
//! | Common cathode  | GND              | `intensity`       |
//! | Common anode    | VCC              | `255 - intensity` |
//!
//! Callers always speak in logical intensity (0 = off, 255 = full); the
//! inversion for common-anode parts happens here.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::app::ports::PwmPort;
use crate::config::LedConfig;
use crate::pins::{MAX_DUTY, PinId};

/// Colour as separate 8-bit channel intensities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const CYAN: Self = Self::new(0, 255, 255);
    pub const MAGENTA: Self = Self::new(255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Split a `0xRRGGBB` colour code into channels.  Bits above bit 23
    /// are ignored.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Pack back into `0x00RRGGBB`.
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl From<u32> for Rgb {
    fn from(packed: u32) -> Self {
        Self::from_packed(packed)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Which electrode the three dies share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wiring {
    /// Shared cathode on GND; duty maps directly to brightness.
    #[default]
    CommonCathode,
    /// Shared anode on VCC; a die lights when its line is pulled low.
    CommonAnode,
}

impl Wiring {
    pub const fn from_common_anode(common_anode: bool) -> Self {
        if common_anode {
            Self::CommonAnode
        } else {
            Self::CommonCathode
        }
    }

    pub const fn is_common_anode(self) -> bool {
        matches!(self, Self::CommonAnode)
    }
}

/// One physical RGB LED bound to three PWM pins.
///
/// Pins and wiring are fixed at construction.  The value owns no
/// resources, so it is `Copy` and needs no teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbLed {
    red_pin: PinId,
    green_pin: PinId,
    blue_pin: PinId,
    wiring: Wiring,
}

impl RgbLed {
    /// Store the pins and wiring.  No hardware is touched until
    /// [`setup`](Self::setup).
    pub const fn new(red_pin: PinId, green_pin: PinId, blue_pin: PinId, wiring: Wiring) -> Self {
        Self {
            red_pin,
            green_pin,
            blue_pin,
            wiring,
        }
    }

    pub const fn from_config(config: &LedConfig) -> Self {
        Self::new(
            config.red_pin,
            config.green_pin,
            config.blue_pin,
            Wiring::from_common_anode(config.common_anode),
        )
    }

    /// Configure the three pins as outputs.  Call once before writing
    /// colours; calling again just reasserts output mode.
    pub fn setup<P: PwmPort>(&self, port: &mut P) {
        for pin in self.pins() {
            port.configure_output(pin);
        }
        debug!(
            "rgb_led: outputs configured (r={}, g={}, b={}, {:?})",
            self.red_pin, self.green_pin, self.blue_pin, self.wiring
        );
    }

    /// Drive the LED with logical intensities, red then green then blue.
    pub fn write_color<P: PwmPort>(&self, port: &mut P, red: u8, green: u8, blue: u8) {
        trace!("rgb_led: colour ({}, {}, {})", red, green, blue);
        port.analog_write(self.red_pin, self.drive_value(red));
        port.analog_write(self.green_pin, self.drive_value(green));
        port.analog_write(self.blue_pin, self.drive_value(blue));
    }

    /// Drive the LED from a `0xRRGGBB` colour code.
    pub fn write_packed<P: PwmPort>(&self, port: &mut P, packed: u32) {
        self.write_rgb(port, Rgb::from_packed(packed));
    }

    pub fn write_rgb<P: PwmPort>(&self, port: &mut P, colour: Rgb) {
        self.write_color(port, colour.r, colour.g, colour.b);
    }

    /// All channels dark, whatever the wiring.
    pub fn off<P: PwmPort>(&self, port: &mut P) {
        self.write_rgb(port, Rgb::OFF);
    }

    /// Duty value that produces `intensity` on this LED's wiring.
    pub const fn drive_value(&self, intensity: u8) -> u8 {
        match self.wiring {
            Wiring::CommonCathode => intensity,
            Wiring::CommonAnode => MAX_DUTY - intensity,
        }
    }

    pub const fn pins(&self) -> [PinId; 3] {
        [self.red_pin, self.green_pin, self.blue_pin]
    }

    pub const fn red_pin(&self) -> PinId {
        self.red_pin
    }

    pub const fn green_pin(&self) -> PinId {
        self.green_pin
    }

    pub const fn blue_pin(&self) -> PinId {
        self.blue_pin
    }

    pub const fn wiring(&self) -> Wiring {
        self.wiring
    }
}
