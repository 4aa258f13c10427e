//! LED wiring configuration.
//!
//! Describes which pins the LED is soldered to and how it is wired.
//! Provisioned as JSON or as a compact postcard blob; defaults match
//! [`crate::pins`].

use serde::{Deserialize, Serialize};

use crate::drivers::rgb_led::Wiring;
use crate::error::ConfigError;
use crate::pins::{self, PinId};

/// Pins and polarity of one RGB LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedConfig {
    /// PWM pin driving the red die
    pub red_pin: PinId,
    /// PWM pin driving the green die
    pub green_pin: PinId,
    /// PWM pin driving the blue die
    pub blue_pin: PinId,
    /// `true` when the shared electrode is on VCC
    #[serde(default)]
    pub common_anode: bool,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            red_pin: pins::LED_R_PIN,
            green_pin: pins::LED_G_PIN,
            blue_pin: pins::LED_B_PIN,
            common_anode: false,
        }
    }
}

impl LedConfig {
    pub const fn wiring(&self) -> Wiring {
        Wiring::from_common_anode(self.common_anode)
    }

    /// Reject configurations where two colours share a pin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.red_pin == self.green_pin || self.red_pin == self.blue_pin {
            return Err(ConfigError::DuplicatePin(self.red_pin));
        }
        if self.green_pin == self.blue_pin {
            return Err(ConfigError::DuplicatePin(self.green_pin));
        }
        Ok(())
    }

    /// Parse and validate a JSON document such as
    /// `{"red_pin":9,"green_pin":10,"blue_pin":11,"common_anode":true}`.
    pub fn from_json(json: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(json).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Compact binary form for flash storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(|_| ConfigError::Malformed)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }
}
