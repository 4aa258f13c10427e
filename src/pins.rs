//! Pin assignments and PWM constants for the RGB LED.
//!
//! Single source of truth for the default wiring. Boards with a different
//! layout override these through [`LedConfig`](crate::config::LedConfig)
//! rather than editing the drivers.

/// Opaque platform channel identifier (GPIO / Arduino pin number).
pub type PinId = u8;

// ---------------------------------------------------------------------------
// Status LED (4-pin discrete RGB, one PWM output per colour)
// ---------------------------------------------------------------------------

pub const LED_R_PIN: PinId = 9;
pub const LED_G_PIN: PinId = 10;
pub const LED_B_PIN: PinId = 11;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC frequency for the RGB LED (1 kHz).
pub const LED_PWM_FREQ_HZ: u32 = 1_000;
/// Low-speed LEDC channels available for LED outputs.
pub const MAX_LED_PINS: usize = 8;
/// Largest duty value the 8-bit PWM accepts.
pub const MAX_DUTY: u8 = u8::MAX;
