// Crate-level lints: allow the usual embedded/graphics cast patterns
#![allow(clippy::cast_possible_truncation)] // intentional f32->u8/u16 and u128->u32 casts
#![allow(clippy::cast_possible_wrap)] // u32->i32 is fine for our coordinate ranges
#![allow(clippy::cast_sign_loss)] // f32->u8 where the signal is known non-negative

//! Heart-rate watchface for a wrist-wearable surface, hosted in the
//! embedded-graphics simulator.
//!
//! The watchface shows the current time, the last heart-rate reading, and
//! the battery percentage over a sunrise background. When a system overlay
//! (the quick-view notification banner) obstructs the screen, the layout
//! compresses into the unobstructed region: the background hides and the
//! time text flips to a light color over the plain black window.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ main: host loop (window, timers, sensors)    │
//! │   │ Event::MinuteTick / Health / Obstruction │
//! │   ▼                                          │
//! │ Watchface (owns background + 3 text elements)│
//! │   │ draw()                                   │
//! │   ▼                                          │
//! │ SimulatorDisplay<Rgb565>  (+ banner on top)  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The renderer never touches the window or the wall clock directly; it
//! reads sensors through the traits in [`sensors`] and draws through
//! `DrawTarget`, so tests run it against fakes.
//!
//! # Controls (Simulator Mode)
//!
//! | Key | Action |
//! |-----|--------|
//! | `N` | Toggle the notification banner (obstruction on/off) |
//! | `T` | Toggle 12/24-hour clock style |
//! | `H` | Toggle heart-rate sensor availability |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

mod colors;
mod config;
mod elements;
mod events;
mod layout;
mod sensors;
mod styles;
mod watchface;
mod widgets;

use std::thread;
use std::time::Instant;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode};
use log::{debug, error, info};

use colors::BLACK;
use config::{DISPLAY_SCALE, FRAME_TIME, MOVEMENT_EVENT_FRAMES, OVERLAY_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
use events::{Event, HealthEventKind};
use layout::DisplayBounds;
use sensors::{Clock, HeartRateMonitor, SensorHub, SimulatedBattery, SimulatedHeartRate, SystemClock};
use watchface::Watchface;
use widgets::draw_notification_banner;

fn main() {
    env_logger::init();
    info!("starting watchface host");

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(DISPLAY_SCALE).build();
    let mut window = Window::new("HRM Watchface", &output_settings);

    // Subscribe to sensors. The sample-period call is best-effort; a host
    // without the capability just keeps its default cadence.
    let mut sensors = SensorHub {
        clock: SystemClock::new(true),
        heart_rate: SimulatedHeartRate::new(),
        battery: SimulatedBattery::new(),
    };
    if sensors.heart_rate.set_sample_period(1) {
        debug!("heart-rate sample period set to 1s");
    }

    let full = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut overlay_active = false;
    let mut bounds = DisplayBounds::unobstructed(full);

    // Window load: build the renderer, then the initial layout+text pass
    let mut face = match Watchface::create(bounds) {
        Ok(face) => face,
        Err(err) => {
            error!("watchface load failed: {err}");
            return;
        }
    };
    face.refresh_layout(bounds, &sensors);
    info!("watchface loaded");

    // First frame must be on screen before the event loop starts polling
    display.clear(BLACK).ok();
    face.draw(&mut display);
    window.update(&display);

    let mut frame_count: u32 = 0;
    let mut last_minute = sensors.clock.now().minute;
    let mut dirty = false;

    // ==========================================================================
    // Host Event Loop
    // ==========================================================================

    'host: loop {
        let frame_start = Instant::now();

        // Window events (close, host keys)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'host,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam
                    if repeat {
                        continue;
                    }
                    match keycode {
                        // N: toggle the notification banner; the renderer
                        // hears about it through the obstruction subscription
                        Keycode::N => {
                            overlay_active = !overlay_active;
                            bounds = if overlay_active {
                                DisplayBounds::with_bottom_overlay(full, OVERLAY_HEIGHT)
                            } else {
                                DisplayBounds::unobstructed(full)
                            };
                            info!("overlay {}", if overlay_active { "shown" } else { "dismissed" });
                            face.handle_event(Event::ObstructionChanged(bounds), &sensors);
                            dirty = true;
                        }
                        // T: flip the host clock-style preference
                        Keycode::T => {
                            let use_24h = !sensors.clock.is_24h();
                            sensors.clock.set_24h(use_24h);
                            info!("clock style: {}", if use_24h { "24h" } else { "12h" });
                            face.refresh_text(&sensors);
                            dirty = true;
                        }
                        // H: toggle the heart-rate sensor on/off
                        Keycode::H => {
                            let available = !sensors.heart_rate.is_available();
                            sensors.heart_rate.set_available(available);
                            info!("heart-rate sensor {}", if available { "enabled" } else { "disabled" });
                            face.handle_event(Event::Health(HealthEventKind::HeartRate), &sensors);
                            dirty = true;
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Advance the simulated sensor signals
        sensors.heart_rate.tick();
        sensors.battery.tick();

        // Timer service: one tick per wall-clock minute
        let minute = sensors.clock.now().minute;
        if minute != last_minute {
            last_minute = minute;
            debug!("minute tick");
            face.handle_event(Event::MinuteTick, &sensors);
            dirty = true;
        }

        // Health service: heart-rate updates at the configured cadence, plus
        // occasional movement events the renderer is expected to ignore
        if frame_count % hr_event_cadence(&sensors.heart_rate) == 0 {
            face.handle_event(Event::Health(HealthEventKind::HeartRate), &sensors);
            dirty = true;
        }
        if frame_count % MOVEMENT_EVENT_FRAMES == 0 {
            face.handle_event(Event::Health(HealthEventKind::Movement), &sensors);
        }

        // Redraw only when an event changed something
        if dirty {
            debug!(
                "redraw: time={} hr={} battery={} obstructed={}",
                face.time_text(),
                face.heart_rate_text(),
                face.battery_text(),
                face.bounds().is_obstructed()
            );
            display.clear(BLACK).ok();
            face.draw(&mut display);
            if overlay_active {
                draw_notification_banner(&mut display);
            }
            dirty = false;
        }
        window.update(&display);

        frame_count = frame_count.wrapping_add(1);

        // Sleep out the rest of the frame
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }

    // Stop: best-effort sample-period reset; dropping the watchface and the
    // window releases everything else
    if sensors.heart_rate.set_sample_period(0) {
        debug!("heart-rate sample period restored");
    }
    info!("watchface stopped");
}

/// Frames between simulated heart-rate events, derived from the configured
/// sampling period (minimum one second).
fn hr_event_cadence(heart_rate: &SimulatedHeartRate) -> u32 {
    let frames_per_sec = (1000 / FRAME_TIME.as_millis()) as u32;
    u32::from(heart_rate.sample_period_secs().max(1)) * frames_per_sec
}
