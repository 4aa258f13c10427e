//! Fuzz target: `LedConfig::from_json` / `LedConfig::from_bytes`
//!
//! Feeds arbitrary bytes to both config decoders and asserts that they
//! never panic and that anything accepted drives three distinct pins.
//!
//! cargo fuzz run fuzz_led_config

#![no_main]

use libfuzzer_sys::fuzz_target;
use rgbled::{LedConfig, RgbLed};

fuzz_target!(|data: &[u8]| {
    for config in [LedConfig::from_json(data), LedConfig::from_bytes(data)]
        .into_iter()
        .flatten()
    {
        let [r, g, b] = RgbLed::from_config(&config).pins();
        assert!(r != g && r != b && g != b, "accepted config shares a pin");
    }
});
