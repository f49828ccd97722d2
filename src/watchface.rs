//! The watchface renderer.
//!
//! Owns every visual element between window load and unload and answers the
//! host's notifications with the narrowest refresh that keeps the screen
//! true: minute ticks and heart-rate updates rewrite text buffers, an
//! obstruction change recomputes the layout (and then the text, so a layout
//! pass never leaves stale strings behind).
//!
//! Creation is checked: a surface the elements cannot fit on fails the load
//! cleanly instead of producing a half-built renderer. Unload is ownership:
//! dropping the `Watchface` releases the elements exactly once, and the
//! fonts they reference are `'static` so no separate font unload exists.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};
use log::debug;
use thiserror::Error;

use crate::colors::{BLACK, WHITE};
use crate::config::{
    BATTERY_OFFSET_PERCENT, BATTERY_TEXT_CAP, HEART_RATE_OFFSET_PERCENT, INFO_ELEMENT_HEIGHT, INFO_TEXT_CAP,
    MIN_SURFACE_HEIGHT, MIN_SURFACE_WIDTH, TIME_ELEMENT_HEIGHT, TIME_OFFSET_PERCENT, TIME_TEXT_CAP,
};
use crate::elements::{BackgroundElement, TextElement};
use crate::events::{Event, HealthEventKind};
use crate::layout::{DisplayBounds, element_frame, relative_pixel};
use crate::sensors::{BatteryGauge, Clock, HeartRateMonitor, SensorHub};
use crate::styles::{INFO_FONT, TIME_FONT};

// =============================================================================
// Element Colors
// =============================================================================

/// Time text over the background image (dark on the bright band).
const TIME_COLOR_UNOBSTRUCTED: Rgb565 = BLACK;

/// Time text while the screen is obstructed (light on the black window).
const TIME_COLOR_OBSTRUCTED: Rgb565 = WHITE;

/// Heart-rate and battery text color in both states.
const INFO_COLOR: Rgb565 = WHITE;

// =============================================================================
// Load Errors
// =============================================================================

/// Reasons the load hook can refuse a surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The surface is too small for the element layout.
    #[error(
        "surface {width}x{height} is smaller than the minimum {min_width}x{min_height}",
        min_width = MIN_SURFACE_WIDTH,
        min_height = MIN_SURFACE_HEIGHT
    )]
    SurfaceTooSmall { width: u32, height: u32 },

    /// The unobstructed region is not a width-preserving subregion of the
    /// full bounds.
    #[error("unobstructed bounds do not fit inside the full surface bounds")]
    InvalidBounds,
}

// =============================================================================
// Watchface
// =============================================================================

/// All renderer state: the background layer, the three text elements, and
/// the bounds they were last laid out against.
pub struct Watchface {
    bounds: DisplayBounds,
    background: BackgroundElement,
    time: TextElement<TIME_TEXT_CAP>,
    heart_rate: TextElement<INFO_TEXT_CAP>,
    battery: TextElement<BATTERY_TEXT_CAP>,
}

impl Watchface {
    /// Window-load hook: validate the surface and build every element with
    /// its initial frame and placeholder text.
    ///
    /// The caller follows up with [`refresh_layout`](Self::refresh_layout)
    /// so the first frame already reflects the obstruction state and live
    /// sensor values.
    pub fn create(bounds: DisplayBounds) -> Result<Self, LoadError> {
        let full = bounds.full.size;
        if full.width < MIN_SURFACE_WIDTH || full.height < MIN_SURFACE_HEIGHT {
            return Err(LoadError::SurfaceTooSmall {
                width: full.width,
                height: full.height,
            });
        }
        if bounds.unobstructed.top_left != bounds.full.top_left
            || bounds.unobstructed.size.width != full.width
            || bounds.unobstructed.size.height > full.height
        {
            return Err(LoadError::InvalidBounds);
        }

        let width = full.width;
        let height = bounds.unobstructed_height();
        Ok(Self {
            bounds,
            background: BackgroundElement::new(),
            time: TextElement::new(
                element_frame(width, height, TIME_OFFSET_PERCENT, TIME_ELEMENT_HEIGHT),
                TIME_FONT,
                TIME_COLOR_UNOBSTRUCTED,
                "00:00",
            ),
            heart_rate: TextElement::new(
                element_frame(width, height, HEART_RATE_OFFSET_PERCENT, INFO_ELEMENT_HEIGHT),
                INFO_FONT,
                INFO_COLOR,
                "Loading",
            ),
            battery: TextElement::new(
                element_frame(width, height, BATTERY_OFFSET_PERCENT, INFO_ELEMENT_HEIGHT),
                INFO_FONT,
                INFO_COLOR,
                "--%",
            ),
        })
    }

    /// Re-read all three sensors and rewrite the text buffers. Idempotent;
    /// safe at any frequency. The clock-style preference is re-evaluated on
    /// every call.
    pub fn refresh_text<C, H, B>(&mut self, sensors: &SensorHub<C, H, B>)
    where
        C: Clock,
        H: HeartRateMonitor,
        B: BatteryGauge,
    {
        let now = sensors.clock.now();
        if sensors.clock.is_24h() {
            self.time.set_text(format_args!("{:02}:{:02}", now.hour, now.minute));
        } else {
            self.time.set_text(format_args!("{:02}:{:02}", now.hour12(), now.minute));
        }

        // No reading is not the same thing as a zero reading
        match sensors.heart_rate.peek() {
            Some(bpm) => self.heart_rate.set_text(format_args!("{bpm} BPM")),
            None => self.heart_rate.set_text(format_args!("-- BPM")),
        }

        self.battery.set_text(format_args!("{}%", sensors.battery.charge_percent()));
    }

    /// Re-derive the layout from the given bounds, then refresh the text.
    ///
    /// While an overlay is up, the background hides and the time text flips
    /// to the light color; every element's y offset is recomputed from the
    /// unobstructed height. Horizontal placement never changes.
    pub fn refresh_layout<C, H, B>(&mut self, bounds: DisplayBounds, sensors: &SensorHub<C, H, B>)
    where
        C: Clock,
        H: HeartRateMonitor,
        B: BatteryGauge,
    {
        self.bounds = bounds;

        if bounds.is_obstructed() {
            self.background.set_hidden(true);
            self.time.set_color(TIME_COLOR_OBSTRUCTED);
        } else {
            self.background.set_hidden(false);
            self.time.set_color(TIME_COLOR_UNOBSTRUCTED);
        }

        let height = bounds.unobstructed_height();
        debug!(
            "layout pass: obstructed={}, unobstructed_height={height}",
            bounds.is_obstructed()
        );
        self.battery.set_y(relative_pixel(BATTERY_OFFSET_PERCENT, height) as i32);
        self.time.set_y(relative_pixel(TIME_OFFSET_PERCENT, height) as i32);
        self.heart_rate.set_y(relative_pixel(HEART_RATE_OFFSET_PERCENT, height) as i32);

        // A layout pass never leaves stale text behind
        self.refresh_text(sensors);
    }

    /// Dispatch a host event to the narrowest matching refresh.
    pub fn handle_event<C, H, B>(&mut self, event: Event, sensors: &SensorHub<C, H, B>)
    where
        C: Clock,
        H: HeartRateMonitor,
        B: BatteryGauge,
    {
        match event {
            Event::MinuteTick => self.refresh_text(sensors),
            Event::Health(HealthEventKind::HeartRate) => self.refresh_text(sensors),
            Event::Health(kind) => debug!("ignoring health event {kind:?}"),
            Event::ObstructionChanged(bounds) => self.refresh_layout(bounds, sensors),
        }
    }

    /// Render the retained state: background first (unless hidden), then the
    /// three text elements.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) {
        self.background.draw(display);
        self.time.draw(display);
        self.heart_rate.draw(display);
        self.battery.draw(display);
    }

    // -------------------------------------------------------------------------
    // State Accessors
    // -------------------------------------------------------------------------

    pub fn time_text(&self) -> &str {
        self.time.text()
    }

    pub fn heart_rate_text(&self) -> &str {
        self.heart_rate.text()
    }

    pub fn battery_text(&self) -> &str {
        self.battery.text()
    }

    pub const fn bounds(&self) -> DisplayBounds {
        self.bounds
    }
}

// Layout introspection, exercised by the unit tests
#[allow(dead_code)]
impl Watchface {
    pub const fn is_background_hidden(&self) -> bool {
        self.background.is_hidden()
    }

    pub const fn time_color(&self) -> Rgb565 {
        self.time.color()
    }

    pub const fn time_frame(&self) -> Rectangle {
        self.time.frame()
    }

    pub const fn heart_rate_frame(&self) -> Rectangle {
        self.heart_rate.frame()
    }

    pub const fn battery_frame(&self) -> Rectangle {
        self.battery.frame()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::{
        geometry::{Point, Size},
        primitives::Rectangle,
    };

    use super::*;
    use crate::config::OVERLAY_HEIGHT;
    use crate::sensors::TimeOfDay;

    // -------------------------------------------------------------------------
    // Fake Sensors
    // -------------------------------------------------------------------------

    struct FixedClock {
        hour: u8,
        minute: u8,
        h24: bool,
    }

    impl Clock for FixedClock {
        fn now(&self) -> TimeOfDay {
            TimeOfDay::new(self.hour, self.minute)
        }

        fn is_24h(&self) -> bool {
            self.h24
        }
    }

    struct FixedHeartRate(Option<u16>);

    impl HeartRateMonitor for FixedHeartRate {
        fn peek(&self) -> Option<u16> {
            self.0
        }
    }

    struct FixedBattery(u8);

    impl BatteryGauge for FixedBattery {
        fn charge_percent(&self) -> u8 {
            self.0
        }
    }

    fn hub(hour: u8, minute: u8, h24: bool, bpm: Option<u16>, charge: u8) -> SensorHub<FixedClock, FixedHeartRate, FixedBattery> {
        SensorHub {
            clock: FixedClock { hour, minute, h24 },
            heart_rate: FixedHeartRate(bpm),
            battery: FixedBattery(charge),
        }
    }

    fn bounds(width: u32, height: u32) -> DisplayBounds {
        DisplayBounds::unobstructed(Rectangle::new(Point::zero(), Size::new(width, height)))
    }

    // -------------------------------------------------------------------------
    // Load Hook Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_create_rejects_tiny_surface() {
        assert_eq!(
            Watchface::create(bounds(144, 80)).err(),
            Some(LoadError::SurfaceTooSmall { width: 144, height: 80 })
        );
        assert_eq!(
            Watchface::create(bounds(40, 168)).err(),
            Some(LoadError::SurfaceTooSmall { width: 40, height: 168 })
        );
    }

    #[test]
    fn test_create_rejects_inconsistent_bounds() {
        let full = Rectangle::new(Point::zero(), Size::new(144, 168));
        // An unobstructed region wider than the surface is nonsense
        let bad = DisplayBounds {
            full,
            unobstructed: Rectangle::new(Point::zero(), Size::new(200, 168)),
        };
        assert_eq!(Watchface::create(bad).err(), Some(LoadError::InvalidBounds));

        // Taller than the surface is equally nonsense
        let bad = DisplayBounds {
            full,
            unobstructed: Rectangle::new(Point::zero(), Size::new(144, 200)),
        };
        assert_eq!(Watchface::create(bad).err(), Some(LoadError::InvalidBounds));
    }

    #[test]
    fn test_create_accepts_obstructed_surface() {
        let full = Rectangle::new(Point::zero(), Size::new(144, 168));
        let face = Watchface::create(DisplayBounds::with_bottom_overlay(full, OVERLAY_HEIGHT));
        assert!(face.is_ok(), "loading under an active overlay is legal");
    }

    #[test]
    fn test_placeholders_before_first_refresh() {
        let face = Watchface::create(bounds(144, 168)).unwrap();
        assert_eq!(face.time_text(), "00:00");
        assert_eq!(face.heart_rate_text(), "Loading");
        assert_eq!(face.battery_text(), "--%");
    }

    // -------------------------------------------------------------------------
    // Text Refresh Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_time_formats_24h() {
        let mut face = Watchface::create(bounds(144, 168)).unwrap();
        face.refresh_text(&hub(14, 5, true, Some(72), 57));
        assert_eq!(face.time_text(), "14:05");
    }

    #[test]
    fn test_time_formats_12h_zero_padded() {
        let mut face = Watchface::create(bounds(144, 168)).unwrap();
        face.refresh_text(&hub(14, 5, false, Some(72), 57));
        assert_eq!(face.time_text(), "02:05", "the same instant in 12-hour style");
    }

    #[test]
    fn test_time_formats_midnight_and_noon_12h() {
        let mut face = Watchface::create(bounds(144, 168)).unwrap();
        face.refresh_text(&hub(0, 7, false, None, 50));
        assert_eq!(face.time_text(), "12:07");
        face.refresh_text(&hub(12, 0, false, None, 50));
        assert_eq!(face.time_text(), "12:00");
    }

    #[test]
    fn test_heart_rate_and_battery_formatting() {
        let mut face = Watchface::create(bounds(144, 168)).unwrap();
        face.refresh_text(&hub(9, 30, true, Some(72), 57));
        assert_eq!(face.heart_rate_text(), "72 BPM");
        assert_eq!(face.battery_text(), "57%");
    }

    #[test]
    fn test_zero_heart_rate_is_a_reading_not_an_error() {
        let mut face = Watchface::create(bounds(144, 168)).unwrap();
        face.refresh_text(&hub(9, 30, true, Some(0), 57));
        assert_eq!(face.heart_rate_text(), "0 BPM");
    }

    #[test]
    fn test_missing_heart_rate_renders_placeholder() {
        let mut face = Watchface::create(bounds(144, 168)).unwrap();
        face.refresh_text(&hub(9, 30, true, None, 57));
        assert_eq!(face.heart_rate_text(), "-- BPM");
    }

    #[test]
    fn test_full_battery_fits_buffer() {
        let mut face = Watchface::create(bounds(144, 168)).unwrap();
        face.refresh_text(&hub(9, 30, true, None, 100));
        assert_eq!(face.battery_text(), "100%");
    }

    #[test]
    fn test_refresh_text_is_idempotent() {
        let mut face = Watchface::create(bounds(144, 168)).unwrap();
        let sensors = hub(14, 5, true, Some(72), 57);
        face.refresh_text(&sensors);
        let (time, hr, bat) = (
            face.time_text().to_owned(),
            face.heart_rate_text().to_owned(),
            face.battery_text().to_owned(),
        );
        face.refresh_text(&sensors);
        assert_eq!(face.time_text(), time);
        assert_eq!(face.heart_rate_text(), hr);
        assert_eq!(face.battery_text(), bat);
    }

    // -------------------------------------------------------------------------
    // Layout Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_layout_offsets_on_tall_surface() {
        // End-to-end: load, lay out, and check the three fixed offsets
        let mut face = Watchface::create(bounds(200, 228)).unwrap();
        face.refresh_layout(bounds(200, 228), &hub(14, 5, true, Some(72), 57));

        assert_eq!(face.battery_frame().top_left.y, 22);
        assert_eq!(face.time_frame().top_left.y, 70);
        assert_eq!(face.heart_rate_frame().top_left.y, 173);
        assert!(!face.is_background_hidden(), "no overlay, background visible");
        assert_eq!(face.time_text(), "14:05", "layout pass must refresh text too");
    }

    #[test]
    fn test_obstruction_hides_background_and_lightens_time() {
        let full = Rectangle::new(Point::zero(), Size::new(144, 168));
        let mut face = Watchface::create(DisplayBounds::unobstructed(full)).unwrap();
        let sensors = hub(14, 5, true, Some(72), 57);

        face.refresh_layout(DisplayBounds::with_bottom_overlay(full, OVERLAY_HEIGHT), &sensors);
        assert!(face.is_background_hidden());
        assert_eq!(face.time_color(), WHITE);
        // Offsets compress into the 117px unobstructed region
        assert_eq!(face.battery_frame().top_left.y, 11);
        assert_eq!(face.time_frame().top_left.y, 36);
        assert_eq!(face.heart_rate_frame().top_left.y, 88);

        // Overlay gone: image returns, dark text, original offsets
        face.refresh_layout(DisplayBounds::unobstructed(full), &sensors);
        assert!(!face.is_background_hidden());
        assert_eq!(face.time_color(), BLACK);
        assert_eq!(face.battery_frame().top_left.y, 16);
        assert_eq!(face.time_frame().top_left.y, 52);
        assert_eq!(face.heart_rate_frame().top_left.y, 127);
    }

    #[test]
    fn test_layout_preserves_horizontal_placement() {
        let full = Rectangle::new(Point::zero(), Size::new(144, 168));
        let mut face = Watchface::create(DisplayBounds::unobstructed(full)).unwrap();
        let sensors = hub(14, 5, true, Some(72), 57);
        face.refresh_layout(DisplayBounds::with_bottom_overlay(full, OVERLAY_HEIGHT), &sensors);

        for frame in [face.time_frame(), face.heart_rate_frame(), face.battery_frame()] {
            assert_eq!(frame.top_left.x, 0, "elements stay full width");
            assert_eq!(frame.size.width, 144);
        }
    }

    // -------------------------------------------------------------------------
    // Event Dispatch Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_minute_tick_refreshes_text_without_layout() {
        let mut face = Watchface::create(bounds(144, 168)).unwrap();
        face.refresh_layout(bounds(144, 168), &hub(14, 5, true, Some(72), 57));
        let time_frame = face.time_frame();

        face.handle_event(Event::MinuteTick, &hub(14, 6, true, Some(72), 57));
        assert_eq!(face.time_text(), "14:06");
        assert_eq!(face.time_frame(), time_frame, "a tick must not move frames");
    }

    #[test]
    fn test_heart_rate_event_refreshes_text() {
        let mut face = Watchface::create(bounds(144, 168)).unwrap();
        face.refresh_layout(bounds(144, 168), &hub(14, 5, true, Some(72), 57));

        face.handle_event(
            Event::Health(HealthEventKind::HeartRate),
            &hub(14, 5, true, Some(123), 57),
        );
        assert_eq!(face.heart_rate_text(), "123 BPM");
    }

    #[test]
    fn test_other_health_events_are_ignored() {
        let mut face = Watchface::create(bounds(144, 168)).unwrap();
        face.refresh_layout(bounds(144, 168), &hub(14, 5, true, Some(72), 57));

        for kind in [HealthEventKind::Significant, HealthEventKind::Movement, HealthEventKind::Sleep] {
            face.handle_event(Event::Health(kind), &hub(14, 5, true, Some(200), 1));
        }
        // The new sensor values were never read
        assert_eq!(face.heart_rate_text(), "72 BPM");
        assert_eq!(face.battery_text(), "57%");
    }

    #[test]
    fn test_obstruction_event_triggers_layout_pass() {
        let full = Rectangle::new(Point::zero(), Size::new(144, 168));
        let mut face = Watchface::create(DisplayBounds::unobstructed(full)).unwrap();
        face.refresh_layout(DisplayBounds::unobstructed(full), &hub(14, 5, true, Some(72), 57));

        let obstructed = DisplayBounds::with_bottom_overlay(full, OVERLAY_HEIGHT);
        face.handle_event(Event::ObstructionChanged(obstructed), &hub(14, 6, true, Some(80), 56));

        assert!(face.is_background_hidden());
        assert_eq!(face.bounds(), obstructed);
        assert_eq!(face.time_text(), "14:06", "obstruction pass refreshes text too");
        assert_eq!(face.heart_rate_text(), "80 BPM");
    }
}
