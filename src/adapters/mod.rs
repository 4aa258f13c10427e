//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements | Connects to                        |
//! |------------|------------|------------------------------------|
//! | `hardware` | PwmPort    | ESP32 LEDC (in-memory on host)     |
//! | `hal_pwm`  | PwmPort    | embedded-hal `SetDutyCycle` channels |

pub mod hal_pwm;
pub mod hardware;
