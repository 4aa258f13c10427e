//! RGB LED demo firmware.
//!
//! Brings up the LEDC adapter, configures the LED on the default pins and
//! cycles through the named colours.
//!
//! ```text
//!   RgbLed ──▶ PwmPort ──▶ LedcPort ──▶ LEDC timer 1 / CH0-2
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::info;

use rgbled::adapters::hardware::LedcPort;
use rgbled::{LedConfig, Rgb, RgbLed};

/// Time each colour stays on.
const STEP_MS: u32 = 1_000;

const DEMO_CYCLE: [(&str, Rgb); 8] = [
    ("red", Rgb::RED),
    ("green", Rgb::GREEN),
    ("blue", Rgb::BLUE),
    ("yellow", Rgb::YELLOW),
    ("cyan", Rgb::CYAN),
    ("magenta", Rgb::MAGENTA),
    ("white", Rgb::WHITE),
    ("off", Rgb::OFF),
];

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("rgbled v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config + peripherals ───────────────────────────────
    let config = LedConfig::default();
    config.validate().map_err(rgbled::Error::from)?;
    let mut port = LedcPort::new().map_err(rgbled::Error::from)?;

    let led = RgbLed::from_config(&config);
    led.setup(&mut port);
    info!(
        "LED ready on pins {:?} ({:?})",
        led.pins(),
        led.wiring()
    );

    // ── 3. Colour loop ────────────────────────────────────────
    loop {
        for (name, colour) in DEMO_CYCLE {
            info!("colour: {} (#{:06X})", name, colour.packed());
            led.write_rgb(&mut port, colour);
            FreeRtos::delay_ms(STEP_MS);
        }
        // Packed form, as a hex literal.
        led.write_packed(&mut port, 0xFF8000);
        FreeRtos::delay_ms(STEP_MS);
    }
}
