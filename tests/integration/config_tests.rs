//! Integration tests: provisioned config → driver wiring.

use rgbled::error::ConfigError;
use rgbled::{Error, LedConfig, RgbLed, Wiring};

use crate::mock_hw::MockPwm;

#[test]
fn json_config_builds_matching_driver() {
    let config =
        LedConfig::from_json(br#"{"red_pin":25,"green_pin":26,"blue_pin":27,"common_anode":true}"#)
            .unwrap();
    let led = RgbLed::from_config(&config);

    assert_eq!(led.pins(), [25, 26, 27]);
    assert_eq!(led.wiring(), Wiring::CommonAnode);

    let mut hw = MockPwm::new();
    led.setup(&mut hw);
    led.write_color(&mut hw, 0, 0, 0);
    assert_eq!(hw.configured(), vec![25, 26, 27]);
    assert_eq!(hw.writes(), vec![(25, 255), (26, 255), (27, 255)]);
}

#[test]
fn stored_config_survives_flash_roundtrip() {
    let config = LedConfig {
        red_pin: 4,
        green_pin: 16,
        blue_pin: 17,
        common_anode: false,
    };
    let blob = config.to_bytes().unwrap();
    let led = RgbLed::from_config(&LedConfig::from_bytes(&blob).unwrap());
    assert_eq!(led, RgbLed::new(4, 16, 17, Wiring::CommonCathode));
}

#[test]
fn config_errors_lift_into_crate_error() {
    let err: Error = LedConfig::from_json(br#"{"red_pin":1,"green_pin":2,"blue_pin":1}"#)
        .unwrap_err()
        .into();
    assert_eq!(err, Error::Config(ConfigError::DuplicatePin(1)));
}
