//! Layout math for the watchface elements.
//!
//! Element vertical positions are percentages of the *unobstructed* height,
//! converted with truncating integer arithmetic. The conversion must stay
//! pixel-identical across every call site, so it lives here as one helper
//! and the element frames are derived from it.
//!
//! # Obstruction Model
//!
//! The host reports two rectangles for the drawing surface: the full bounds
//! and the unobstructed bounds (the region not covered by a system overlay
//! such as a notification banner). When the two differ, an overlay is up and
//! the layout compresses into the unobstructed region.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

// =============================================================================
// Pixel Conversion
// =============================================================================

/// Convert a percentage of `max` to pixels, truncating: `max * percent / 100`.
///
/// Truncation (not round-to-nearest) is the contract; layouts elsewhere are
/// derived from the same expression and must agree to the pixel.
#[inline]
pub const fn relative_pixel(percent: u32, max: u32) -> u32 {
    max * percent / 100
}

/// Frame for a full-width text element at a percentage of the unobstructed
/// height.
///
/// Horizontal placement never changes: x = 0, width = surface width. Only
/// the y offset depends on the (unobstructed) height.
pub fn element_frame(surface_width: u32, unobstructed_height: u32, offset_percent: u32, height: u32) -> Rectangle {
    Rectangle::new(
        Point::new(0, relative_pixel(offset_percent, unobstructed_height) as i32),
        Size::new(surface_width, height),
    )
}

// =============================================================================
// Display Bounds
// =============================================================================

/// The drawing surface's full bounds paired with its unobstructed bounds.
///
/// Both rectangles come from the host. The renderer never mutates them; it
/// only compares them and reads the unobstructed height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayBounds {
    /// The whole drawable surface.
    pub full: Rectangle,
    /// The region not covered by a system overlay. Equal to `full` when no
    /// overlay is up.
    pub unobstructed: Rectangle,
}

impl DisplayBounds {
    /// Bounds with no overlay: unobstructed equals full.
    pub const fn unobstructed(full: Rectangle) -> Self {
        Self { full, unobstructed: full }
    }

    /// Bounds with a bottom overlay of the given height. The unobstructed
    /// region keeps the full width and loses `overlay_height` at the bottom.
    pub fn with_bottom_overlay(full: Rectangle, overlay_height: u32) -> Self {
        let height = full.size.height.saturating_sub(overlay_height);
        Self {
            full,
            unobstructed: Rectangle::new(full.top_left, Size::new(full.size.width, height)),
        }
    }

    /// True when an overlay covers part of the surface.
    #[inline]
    pub fn is_obstructed(&self) -> bool {
        self.full != self.unobstructed
    }

    /// Height of the unobstructed region, the basis for all y offsets.
    #[inline]
    pub const fn unobstructed_height(&self) -> u32 {
        self.unobstructed.size.height
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        BATTERY_OFFSET_PERCENT, HEART_RATE_OFFSET_PERCENT, INFO_ELEMENT_HEIGHT, TIME_OFFSET_PERCENT,
    };

    #[test]
    fn test_relative_pixel_truncates() {
        // floor semantics, never round-to-nearest
        assert_eq!(relative_pixel(31, 168), 52, "31% of 168 is 52.08, truncated to 52");
        assert_eq!(relative_pixel(76, 168), 127, "76% of 168 is 127.68, truncated to 127");
        assert_eq!(relative_pixel(10, 168), 16, "10% of 168 is 16.8, truncated to 16");
    }

    #[test]
    fn test_relative_pixel_matches_floor_across_range() {
        for percent in 0..=100u32 {
            for max in [0u32, 1, 99, 117, 144, 168, 228, 240] {
                let expected = ((max as f64) * (percent as f64) / 100.0).floor() as u32;
                assert_eq!(
                    relative_pixel(percent, max),
                    expected,
                    "relative_pixel({percent}, {max}) must equal floor"
                );
            }
        }
    }

    #[test]
    fn test_relative_pixel_bounds() {
        assert_eq!(relative_pixel(0, 168), 0);
        assert_eq!(relative_pixel(100, 168), 168);
    }

    #[test]
    fn test_fixed_offsets_for_tall_surface() {
        // The three fixed offsets on a 228px-tall surface
        assert_eq!(relative_pixel(BATTERY_OFFSET_PERCENT, 228), 22);
        assert_eq!(relative_pixel(TIME_OFFSET_PERCENT, 228), 70);
        assert_eq!(relative_pixel(HEART_RATE_OFFSET_PERCENT, 228), 173);
    }

    #[test]
    fn test_element_frame_is_full_width_at_offset() {
        let frame = element_frame(144, 168, HEART_RATE_OFFSET_PERCENT, INFO_ELEMENT_HEIGHT);
        assert_eq!(frame.top_left, Point::new(0, 127));
        assert_eq!(frame.size, Size::new(144, INFO_ELEMENT_HEIGHT));
    }

    #[test]
    fn test_unobstructed_bounds_are_equal() {
        let full = Rectangle::new(Point::zero(), Size::new(144, 168));
        let bounds = DisplayBounds::unobstructed(full);
        assert!(!bounds.is_obstructed());
        assert_eq!(bounds.unobstructed_height(), 168);
    }

    #[test]
    fn test_bottom_overlay_shrinks_height_only() {
        let full = Rectangle::new(Point::zero(), Size::new(144, 168));
        let bounds = DisplayBounds::with_bottom_overlay(full, 51);
        assert!(bounds.is_obstructed());
        assert_eq!(bounds.unobstructed_height(), 117);
        assert_eq!(bounds.unobstructed.size.width, 144, "overlay must not change the width");
        assert_eq!(bounds.full, full, "full bounds are untouched");
    }

    #[test]
    fn test_overlay_taller_than_surface_saturates() {
        let full = Rectangle::new(Point::zero(), Size::new(144, 168));
        let bounds = DisplayBounds::with_bottom_overlay(full, 500);
        assert_eq!(bounds.unobstructed_height(), 0);
    }
}
