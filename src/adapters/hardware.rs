//! LEDC hardware adapter — the default [`PwmPort`] for ESP32 boards.
//!
//! Plays the role of `pinMode(OUTPUT)` + `analogWrite()`: each pin gets
//! a low-speed LEDC channel the first time it is configured, all sharing
//! one 1 kHz / 8-bit timer.
//!
//! The LEDC peripheral belongs to the whole chip, so channel ownership
//! lives in one process-wide table rather than in each port.  Every
//! [`LedcPort`] claims channels from it and hands them back on drop; two
//! ports configuring the same GPIO share that GPIO's channel.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives LEDC timer 1 and channels 0-7 via raw sys calls.
//! On host/test: the table's shadow duty stands in for the duty register.

use core::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use heapless::LinearMap;
use log::{debug, info, trace, warn};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::app::ports::PwmPort;
#[cfg(target_os = "espidf")]
use crate::pins;
use crate::pins::{MAX_LED_PINS, PinId};

// ── Error type ────────────────────────────────────────────────

/// Errors while bringing up the LEDC peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    TimerConfigFailed(i32),
    ChannelConfigFailed(i32),
    NoFreeChannel,
}

impl fmt::Display for HwInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimerConfigFailed(rc)   => write!(f, "LEDC timer config failed (rc={})", rc),
            Self::ChannelConfigFailed(rc) => write!(f, "LEDC channel config failed (rc={})", rc),
            Self::NoFreeChannel           => write!(f, "no free LEDC channel"),
        }
    }
}

// ── Channel table ────────────────────────────────────────────

/// One claimed LEDC channel.
#[derive(Debug, Clone, Copy)]
struct Slot {
    pin: PinId,
    /// Ports currently holding this channel.
    users: u8,
    /// Last duty loaded into the channel.
    duty: u8,
}

/// Channel index → owner.  Shared by every `LedcPort` in the process.
static CHANNELS: Mutex<[Option<Slot>; MAX_LED_PINS]> = Mutex::new([None; MAX_LED_PINS]);

fn channel_table() -> MutexGuard<'static, [Option<Slot>; MAX_LED_PINS]> {
    // Slots stay consistent even if a holder panicked.
    CHANNELS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Reuse the channel already driving `pin`, or take the lowest free one.
fn claim(pin: PinId) -> Result<u8, HwInitError> {
    let mut table = channel_table();
    if let Some(i) = table.iter().position(|s| s.is_some_and(|s| s.pin == pin)) {
        if let Some(slot) = table[i].as_mut() {
            slot.users += 1;
        }
        return Ok(i as u8);
    }
    let i = table
        .iter()
        .position(Option::is_none)
        .ok_or(HwInitError::NoFreeChannel)?;
    table[i] = Some(Slot { pin, users: 1, duty: 0 });
    Ok(i as u8)
}

fn release(channel: u8) {
    let mut table = channel_table();
    let entry = &mut table[usize::from(channel)];
    let Some(slot) = entry.as_mut() else { return };
    if slot.users > 1 {
        slot.users -= 1;
        return;
    }
    *entry = None;
    drop(table);
    stop_channel(channel);
}

fn shadow_duty(channel: u8) -> Option<u8> {
    channel_table()[usize::from(channel)].map(|s| s.duty)
}

fn store_duty(channel: u8, duty: u8) {
    if let Some(slot) = channel_table()[usize::from(channel)].as_mut() {
        slot.duty = duty;
    }
}

// ── LedcPort ─────────────────────────────────────────────────

/// The pins this port has attached, and their channels.
pub struct LedcPort {
    channels: LinearMap<PinId, u8, MAX_LED_PINS>,
}

impl LedcPort {
    /// Configure the shared LED timer.  Pins are attached later through
    /// [`PwmPort::configure_output`].
    pub fn new() -> Result<Self, HwInitError> {
        init_timer()?;
        Ok(Self {
            channels: LinearMap::new(),
        })
    }

    /// LEDC channel assigned to `pin`, if this port has configured it.
    pub fn channel(&self, pin: PinId) -> Option<u8> {
        self.channels.get(&pin).copied()
    }

    /// Duty currently loaded into the channel driving `pin`.
    pub fn duty(&self, pin: PinId) -> Option<u8> {
        self.channel(pin).and_then(shadow_duty)
    }

    pub fn configured_pins(&self) -> impl Iterator<Item = PinId> + '_ {
        self.channels.keys().copied()
    }

    fn attach(&mut self, pin: PinId) -> Result<u8, HwInitError> {
        // Reassert output mode without disturbing the current level.
        if let Some(channel) = self.channel(pin) {
            init_channel(pin, channel, shadow_duty(channel).unwrap_or(0))?;
            return Ok(channel);
        }

        let channel = claim(pin)?;
        let attached = init_channel(pin, channel, shadow_duty(channel).unwrap_or(0)).and_then(|()| {
            self.channels
                .insert(pin, channel)
                .map(|_| ())
                .map_err(|_| HwInitError::NoFreeChannel)
        });
        if let Err(e) = attached {
            release(channel);
            return Err(e);
        }
        Ok(channel)
    }
}

impl Drop for LedcPort {
    fn drop(&mut self) {
        for &channel in self.channels.values() {
            release(channel);
        }
    }
}

impl PwmPort for LedcPort {
    fn configure_output(&mut self, pin: PinId) {
        match self.attach(pin) {
            Ok(channel) => debug!("ledc: pin {} -> CH{}", pin, channel),
            Err(e) => warn!("ledc: pin {} not attached: {}", pin, e),
        }
    }

    fn analog_write(&mut self, pin: PinId, value: u8) {
        let Some(channel) = self.channel(pin) else {
            trace!("ledc: write to unconfigured pin {} dropped", pin);
            return;
        };
        set_duty(channel, value);
        store_duty(channel, value);
    }
}

// ── LEDC primitives ──────────────────────────────────────────

#[cfg(target_os = "espidf")]
fn init_timer() -> Result<(), HwInitError> {
    let timer = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_1,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
        freq_hz: pins::LED_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    // SAFETY: plain config struct passed by reference; reconfiguring the
    // same timer with identical settings is harmless.
    let ret = unsafe { ledc_timer_config(&timer) };
    if ret != ESP_OK as i32 { return Err(HwInitError::TimerConfigFailed(ret)); }

    info!(
        "ledc: timer 1 configured ({} Hz, {}-bit)",
        pins::LED_PWM_FREQ_HZ,
        pins::PWM_RESOLUTION_BITS
    );
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn init_timer() -> Result<(), HwInitError> {
    info!("ledc(sim): timer init skipped");
    Ok(())
}

/// Bind `pin` to `channel`, loading `duty` as the starting level.
#[cfg(target_os = "espidf")]
fn init_channel(pin: PinId, channel: u8, duty: u8) -> Result<(), HwInitError> {
    let cfg = ledc_channel_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        channel: ledc_channel_t_LEDC_CHANNEL_0 + u32::from(channel),
        timer_sel: ledc_timer_t_LEDC_TIMER_1,
        gpio_num: i32::from(pin),
        duty: u32::from(duty),
        hpoint: 0,
        ..Default::default()
    };
    // SAFETY: timer 1 was configured in init_timer(); channel index is
    // bounded by MAX_LED_PINS.
    let ret = unsafe { ledc_channel_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::ChannelConfigFailed(ret)); }
    store_duty(channel, duty);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn init_channel(_pin: PinId, channel: u8, duty: u8) -> Result<(), HwInitError> {
    store_duty(channel, duty);
    Ok(())
}

#[cfg(target_os = "espidf")]
fn set_duty(channel: u8, duty: u8) {
    // SAFETY: channel was configured in init_channel(); duty register
    // writes are race-free since only the main loop calls this.
    unsafe {
        ledc_set_duty(
            ledc_mode_t_LEDC_LOW_SPEED_MODE,
            u32::from(channel),
            u32::from(duty),
        );
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, u32::from(channel));
    }
}

#[cfg(not(target_os = "espidf"))]
fn set_duty(channel: u8, duty: u8) {
    trace!("ledc(sim): CH{} duty={}", channel, duty);
}

#[cfg(target_os = "espidf")]
fn stop_channel(channel: u8) {
    // SAFETY: the channel has no remaining users; idle level low.
    unsafe { ledc_stop(ledc_mode_t_LEDC_LOW_SPEED_MODE, u32::from(channel), 0); }
}

#[cfg(not(target_os = "espidf"))]
fn stop_channel(channel: u8) {
    trace!("ledc(sim): CH{} released", channel);
}
