//! Integration tests: RgbLed → PwmPort call sequences.

use rgbled::adapters::hardware::LedcPort;
use rgbled::{Rgb, RgbLed, Wiring};

use crate::mock_hw::{MockPwm, PortCall, ledc_guard};

fn cathode() -> RgbLed {
    RgbLed::new(9, 10, 11, Wiring::CommonCathode)
}

fn anode() -> RgbLed {
    RgbLed::new(9, 10, 11, Wiring::CommonAnode)
}

// ── setup ─────────────────────────────────────────────────────

#[test]
fn setup_configures_exact_pins_once_per_call() {
    let mut hw = MockPwm::new();
    let led = RgbLed::new(3, 5, 6, Wiring::CommonCathode);

    led.setup(&mut hw);
    assert_eq!(hw.configured(), vec![3, 5, 6]);
    assert!(hw.writes().is_empty(), "setup must not drive any duty");

    hw.clear();
    led.setup(&mut hw);
    assert_eq!(hw.configured(), vec![3, 5, 6]);
}

#[test]
fn construction_alone_touches_nothing() {
    let hw = MockPwm::new();
    let _led = anode();
    assert!(hw.calls.is_empty());
}

// ── write_color scenarios ─────────────────────────────────────

#[test]
fn common_cathode_drives_intensity() {
    let mut hw = MockPwm::new();
    cathode().write_color(&mut hw, 255, 0, 128);
    assert_eq!(
        hw.calls,
        vec![
            PortCall::Write { pin: 9, value: 255 },
            PortCall::Write { pin: 10, value: 0 },
            PortCall::Write { pin: 11, value: 128 },
        ]
    );
}

#[test]
fn common_anode_drives_inverted_intensity() {
    let mut hw = MockPwm::new();
    anode().write_color(&mut hw, 255, 0, 128);
    assert_eq!(hw.writes(), vec![(9, 0), (10, 255), (11, 127)]);
}

#[test]
fn packed_orange_decomposes_then_applies_polarity() {
    let mut hw = MockPwm::new();
    cathode().write_packed(&mut hw, 0xFF8000);
    assert_eq!(hw.writes(), vec![(9, 255), (10, 128), (11, 0)]);

    hw.clear();
    anode().write_packed(&mut hw, 0xFF8000);
    assert_eq!(hw.writes(), vec![(9, 0), (10, 127), (11, 255)]);
}

#[test]
fn packed_black_is_dark_on_both_wirings() {
    let mut hw = MockPwm::new();
    cathode().write_packed(&mut hw, 0x000000);
    assert_eq!(hw.writes(), vec![(9, 0), (10, 0), (11, 0)]);

    hw.clear();
    anode().write_packed(&mut hw, 0x000000);
    assert_eq!(hw.writes(), vec![(9, 255), (10, 255), (11, 255)]);
}

#[test]
fn bits_above_24_are_ignored() {
    let mut hw = MockPwm::new();
    cathode().write_packed(&mut hw, 0xAB_12_34_56);
    assert_eq!(hw.writes(), vec![(9, 0x12), (10, 0x34), (11, 0x56)]);
}

#[test]
fn write_before_setup_still_reaches_port() {
    let mut hw = MockPwm::new();
    cathode().write_rgb(&mut hw, Rgb::BLUE);
    assert!(hw.configured().is_empty());
    assert_eq!(hw.level(11), Some(255));
}

// ── shared port ───────────────────────────────────────────────

#[test]
fn two_leds_share_one_port_without_interference() {
    let mut hw = MockPwm::new();
    let a = RgbLed::new(1, 2, 3, Wiring::CommonCathode);
    let b = RgbLed::new(4, 5, 6, Wiring::CommonAnode);
    a.setup(&mut hw);
    b.setup(&mut hw);

    a.write_rgb(&mut hw, Rgb::RED);
    b.write_rgb(&mut hw, Rgb::RED);

    assert_eq!(hw.level(1), Some(255));
    assert_eq!(hw.level(2), Some(0));
    assert_eq!(hw.level(4), Some(0));
    assert_eq!(hw.level(5), Some(255));
}

#[test]
fn same_pin_last_writer_wins() {
    let mut hw = MockPwm::new();
    let a = RgbLed::new(1, 2, 3, Wiring::CommonCathode);
    let b = RgbLed::new(1, 7, 8, Wiring::CommonCathode);
    a.write_color(&mut hw, 10, 0, 0);
    b.write_color(&mut hw, 20, 0, 0);
    assert_eq!(hw.level(1), Some(20));
}

// ── through the LEDC adapter ──────────────────────────────────

#[test]
fn ledc_port_tracks_driven_duties() {
    let _hw = ledc_guard();
    let mut port = LedcPort::new().unwrap();
    let led = anode();
    led.setup(&mut port);
    led.write_color(&mut port, 255, 0, 128);

    assert_eq!(port.channel(9), Some(0));
    assert_eq!(port.channel(11), Some(2));
    assert_eq!(port.duty(9), Some(0));
    assert_eq!(port.duty(10), Some(255));
    assert_eq!(port.duty(11), Some(127));
}

#[test]
fn ledc_port_ignores_colour_before_setup() {
    let _hw = ledc_guard();
    let mut port = LedcPort::new().unwrap();
    let led = cathode();
    led.write_rgb(&mut port, Rgb::WHITE);
    assert_eq!(port.duty(9), None);

    led.setup(&mut port);
    led.setup(&mut port);
    led.write_rgb(&mut port, Rgb::WHITE);
    assert_eq!(port.configured_pins().count(), 3);
    assert_eq!(port.duty(10), Some(255));
}

#[test]
fn repeated_setup_keeps_current_colour() {
    let _hw = ledc_guard();
    let mut port = LedcPort::new().unwrap();
    let led = cathode();
    led.setup(&mut port);
    led.write_color(&mut port, 255, 0, 128);

    led.setup(&mut port);
    led.setup(&mut port);
    assert_eq!(port.duty(9), Some(255));
    assert_eq!(port.duty(10), Some(0));
    assert_eq!(port.duty(11), Some(128));
}

#[test]
fn leds_on_separate_ports_do_not_interfere() {
    let _hw = ledc_guard();
    let mut port_a = LedcPort::new().unwrap();
    let mut port_b = LedcPort::new().unwrap();
    let a = cathode();
    let b = RgbLed::new(3, 5, 6, Wiring::CommonAnode);
    a.setup(&mut port_a);
    b.setup(&mut port_b);

    for pin in [3, 5, 6] {
        let theirs = port_b.channel(pin);
        assert!(theirs.is_some());
        assert!(
            a.pins().iter().all(|&p| port_a.channel(p) != theirs),
            "pin {pin} landed on a channel already driving the first LED"
        );
    }

    a.write_rgb(&mut port_a, Rgb::RED);
    b.write_rgb(&mut port_b, Rgb::BLUE);
    assert_eq!(port_a.duty(9), Some(255));
    assert_eq!(port_a.duty(11), Some(0));
    assert_eq!(port_b.duty(3), Some(255));
    assert_eq!(port_b.duty(6), Some(0));
}
