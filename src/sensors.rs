//! Sensor collaborators: clock, heart-rate monitor, and battery gauge.
//!
//! The renderer depends only on the three traits here, so tests (and any
//! future hardware port) can substitute their own implementations. The
//! simulator implementations generate plausible readings from slow sine
//! signals, with no hardware behind them.
//!
//! # No Data vs Zero
//!
//! The heart-rate monitor reports `Option<u16>`: `None` means "no reading
//! yet" (sensor warming up, disabled, or absent), which is a different thing
//! from a genuine `Some(0)`. Callers must render both without error.

use chrono::{Local, Timelike};

use crate::config::{
    BATTERY_MAX_PERCENT, BATTERY_MIN_PERCENT, BATTERY_SIGNAL_FREQ, HR_MAX_BPM, HR_MIN_BPM, HR_SIGNAL_FREQ,
    HR_WARMUP_FRAMES,
};

// =============================================================================
// Readings
// =============================================================================

/// A wall-clock reading, hours 0-23.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// The hour on a 12-hour dial: 0 and 12 both read as 12.
    pub const fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }
}

// =============================================================================
// Sensor Traits
// =============================================================================

/// Clock source: current local time plus the host's clock-style preference.
pub trait Clock {
    fn now(&self) -> TimeOfDay;
    /// True for 24-hour style ("14:05"), false for 12-hour ("02:05").
    fn is_24h(&self) -> bool;
}

/// Heart-rate monitor with synchronous peek semantics.
pub trait HeartRateMonitor {
    /// Last known reading, or `None` when the sensor has no data.
    fn peek(&self) -> Option<u16>;

    /// Ask the sensor to sample every `secs` seconds (0 restores its
    /// default). Best-effort: returns false when the capability is absent,
    /// which callers must tolerate.
    fn set_sample_period(&mut self, _secs: u16) -> bool {
        false
    }
}

/// Battery gauge reporting the last known charge percentage, 0-100.
pub trait BatteryGauge {
    fn charge_percent(&self) -> u8;
}

/// The sensor trio handed to the renderer's refresh methods.
pub struct SensorHub<C: Clock, H: HeartRateMonitor, B: BatteryGauge> {
    pub clock: C,
    pub heart_rate: H,
    pub battery: B,
}

// =============================================================================
// System Clock
// =============================================================================

/// Clock backed by the local wall clock.
pub struct SystemClock {
    use_24h: bool,
}

impl SystemClock {
    pub const fn new(use_24h: bool) -> Self {
        Self { use_24h }
    }

    /// Flip the clock-style preference. The change takes effect on the next
    /// refresh; nothing is cached.
    pub fn set_24h(&mut self, use_24h: bool) {
        self.use_24h = use_24h;
    }
}

impl Clock for SystemClock {
    fn now(&self) -> TimeOfDay {
        let now = Local::now();
        TimeOfDay::new(now.hour() as u8, now.minute() as u8)
    }

    fn is_24h(&self) -> bool {
        self.use_24h
    }
}

// =============================================================================
// Simulated Sensors
// =============================================================================

/// Sinusoidal signal oscillating between `min` and `max`, used to fake
/// sensor readings in simulator mode.
fn fake_signal(t: f32, min: f32, max: f32, freq: f32) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// Simulated optical heart-rate monitor.
///
/// Warms up for [`HR_WARMUP_FRAMES`] frames before producing its first
/// reading, and loses its reading (and restarts the warmup) whenever it is
/// toggled off and on again.
pub struct SimulatedHeartRate {
    t: f32,
    warmup_remaining: u32,
    available: bool,
    sample_period_secs: u16,
}

impl SimulatedHeartRate {
    pub const fn new() -> Self {
        Self {
            t: 0.0,
            warmup_remaining: HR_WARMUP_FRAMES,
            available: true,
            sample_period_secs: 0,
        }
    }

    /// Advance the signal by one host frame.
    pub fn tick(&mut self) {
        self.t += 1.0;
        if self.available {
            self.warmup_remaining = self.warmup_remaining.saturating_sub(1);
        }
    }

    /// Enable or disable the sensor. Re-enabling restarts the warmup.
    pub fn set_available(&mut self, available: bool) {
        if available && !self.available {
            self.warmup_remaining = HR_WARMUP_FRAMES;
        }
        self.available = available;
    }

    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// The configured sampling period, seconds. 0 means default cadence.
    pub const fn sample_period_secs(&self) -> u16 {
        self.sample_period_secs
    }
}

impl Default for SimulatedHeartRate {
    fn default() -> Self {
        Self::new()
    }
}

impl HeartRateMonitor for SimulatedHeartRate {
    fn peek(&self) -> Option<u16> {
        if !self.available || self.warmup_remaining > 0 {
            return None;
        }
        Some(fake_signal(self.t, HR_MIN_BPM, HR_MAX_BPM, HR_SIGNAL_FREQ) as u16)
    }

    fn set_sample_period(&mut self, secs: u16) -> bool {
        self.sample_period_secs = secs;
        true
    }
}

/// Simulated battery gauge drifting slowly over a plausible range.
pub struct SimulatedBattery {
    t: f32,
}

impl SimulatedBattery {
    pub const fn new() -> Self {
        Self { t: 0.0 }
    }

    /// Advance the signal by one host frame.
    pub fn tick(&mut self) {
        self.t += 1.0;
    }
}

impl Default for SimulatedBattery {
    fn default() -> Self {
        Self::new()
    }
}

impl BatteryGauge for SimulatedBattery {
    fn charge_percent(&self) -> u8 {
        fake_signal(self.t, BATTERY_MIN_PERCENT, BATTERY_MAX_PERCENT, BATTERY_SIGNAL_FREQ).clamp(0.0, 100.0) as u8
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
