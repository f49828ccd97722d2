//! Application configuration constants.
//!
//! Layout arithmetic like `percent * height / 100` only happens when the
//! drawable bounds actually change; everything that is fixed at compile time
//! (surface geometry, element heights, buffer capacities, timing) lives here
//! as `const` so the rest of the code never re-derives it.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Watch surface width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Watch surface height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Integer scale factor for the simulator window.
pub const DISPLAY_SCALE: u32 = 3;

// =============================================================================
// Layout Configuration
// =============================================================================
//
// Each text element sits at a fixed percentage of the *unobstructed* height.
// The percentages are the contract; pixel offsets are always recomputed from
// the current bounds and never stored independently.

/// Battery element top offset, in percent of unobstructed height.
pub const BATTERY_OFFSET_PERCENT: u32 = 10;

/// Time element top offset, in percent of unobstructed height.
pub const TIME_OFFSET_PERCENT: u32 = 31;

/// Heart-rate element top offset, in percent of unobstructed height.
pub const HEART_RATE_OFFSET_PERCENT: u32 = 76;

/// Height of the time element's frame.
pub const TIME_ELEMENT_HEIGHT: u32 = 50;

/// Height of the heart-rate and battery element frames.
pub const INFO_ELEMENT_HEIGHT: u32 = 25;

/// Height of the system notification overlay (quick-view banner). While the
/// banner is up, the unobstructed height shrinks by this much.
pub const OVERLAY_HEIGHT: u32 = 51;

/// Smallest surface width the renderer accepts ("00:00" in the time font).
pub const MIN_SURFACE_WIDTH: u32 = 80;

/// Smallest surface height the renderer accepts. Below this the heart-rate
/// frame (76% offset + 25px) no longer fits inside the surface.
pub const MIN_SURFACE_HEIGHT: u32 = 101;

// =============================================================================
// Text Buffer Capacities
// =============================================================================
//
// Fixed-capacity heapless buffers. Formatting that would exceed a capacity
// truncates silently; it can never overflow.

/// Time text capacity ("HH:MM" plus slack).
pub const TIME_TEXT_CAP: usize = 8;

/// Heart-rate text capacity ("999 BPM" is the widest expected value).
pub const INFO_TEXT_CAP: usize = 8;

/// Battery text capacity ("100%" exactly fills it).
pub const BATTERY_TEXT_CAP: usize = 4;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Host loop frame time. The watchface redraws on events, not per frame, so
/// this only bounds input latency.
pub const FRAME_TIME: Duration = Duration::from_millis(100);

/// Frames between simulated movement health events (ignored by the
/// renderer, but delivered to exercise the event filter).
pub const MOVEMENT_EVENT_FRAMES: u32 = 300;

// =============================================================================
// Simulated Sensor Signals
// =============================================================================

/// Lowest heart rate the simulated monitor produces.
pub const HR_MIN_BPM: f32 = 55.0;

/// Highest heart rate the simulated monitor produces.
pub const HR_MAX_BPM: f32 = 165.0;

/// Oscillation frequency of the simulated heart-rate signal.
pub const HR_SIGNAL_FREQ: f32 = 0.03;

/// Frames before the simulated heart-rate monitor has its first reading.
/// Until then it reports no data, like a real optical sensor warming up.
pub const HR_WARMUP_FRAMES: u32 = 40;

/// Lowest charge percentage the simulated battery reports.
pub const BATTERY_MIN_PERCENT: f32 = 20.0;

/// Highest charge percentage the simulated battery reports.
pub const BATTERY_MAX_PERCENT: f32 = 100.0;

/// Oscillation frequency of the simulated battery signal. Very slow; the
/// reading should look near-constant between minute ticks.
pub const BATTERY_SIGNAL_FREQ: f32 = 0.002;

// =============================================================================
// Unit Tests
// =============================================================================
