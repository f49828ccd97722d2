//! Retained visual elements composited onto the watch surface.
//!
//! The renderer keeps these between refreshes and only mutates the parts an
//! event actually changed: a minute tick rewrites a text buffer, an
//! obstruction change moves frames and toggles the background. Drawing is a
//! separate, read-only pass over the retained state.

use core::fmt::{self, Write};

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::Text,
};
use heapless::String;

use crate::styles::CENTERED_TOP;
use crate::widgets::draw_background;

// =============================================================================
// Text Element
// =============================================================================

/// A full-width text line at a fixed frame, with a fixed-capacity buffer.
///
/// Formatting into the buffer truncates silently once the capacity is
/// reached; it can never overflow. `CAP` is the maximum text length in
/// bytes.
pub struct TextElement<const CAP: usize> {
    frame: Rectangle,
    text: String<CAP>,
    font: &'static MonoFont<'static>,
    color: Rgb565,
}

impl<const CAP: usize> TextElement<CAP> {
    /// Create an element with an initial text. Initial text longer than the
    /// capacity is truncated like any other write.
    pub fn new(frame: Rectangle, font: &'static MonoFont<'static>, color: Rgb565, initial: &str) -> Self {
        let mut element = Self {
            frame,
            text: String::new(),
            font,
            color,
        };
        element.set_text(format_args!("{initial}"));
        element
    }

    /// Replace the buffer contents. Writes that exceed the capacity stop
    /// there; whatever fit stays.
    pub fn set_text(&mut self, args: fmt::Arguments) {
        self.text.clear();
        let _ = self.text.write_fmt(args);
    }

    /// Move the frame vertically; x, width, and height never change.
    pub fn set_y(&mut self, y: i32) {
        self.frame.top_left.y = y;
    }

    pub fn set_color(&mut self, color: Rgb565) {
        self.color = color;
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub const fn frame(&self) -> Rectangle {
        self.frame
    }

    pub const fn color(&self) -> Rgb565 {
        self.color
    }

    /// Render the text centered in the frame, glyph tops on the frame top.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) {
        let anchor = Point::new(
            self.frame.top_left.x + (self.frame.size.width / 2) as i32,
            self.frame.top_left.y,
        );
        Text::with_text_style(self.text.as_str(), anchor, MonoTextStyle::new(self.font, self.color), CENTERED_TOP)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Background Element
// =============================================================================

/// The background image layer. Hidden while the screen is obstructed so the
/// compressed layout sits on the plain black window instead.
pub struct BackgroundElement {
    hidden: bool,
}

impl BackgroundElement {
    pub const fn new() -> Self {
        Self { hidden: false }
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) {
        if self.hidden {
            return;
        }
        draw_background(display);
    }
}

impl Default for BackgroundElement {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::geometry::Size;

    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::styles::INFO_FONT;

    fn test_frame() -> Rectangle {
        Rectangle::new(Point::new(0, 16), Size::new(144, 25))
    }

    #[test]
    fn test_initial_text_is_kept() {
        let element: TextElement<8> = TextElement::new(test_frame(), INFO_FONT, WHITE, "Loading");
        assert_eq!(element.text(), "Loading");
    }

    #[test]
    fn test_set_text_replaces_contents() {
        let mut element: TextElement<8> = TextElement::new(test_frame(), INFO_FONT, WHITE, "Loading");
        element.set_text(format_args!("{} BPM", 72));
        assert_eq!(element.text(), "72 BPM");
        element.set_text(format_args!("{} BPM", 68));
        assert_eq!(element.text(), "68 BPM");
    }

    #[test]
    fn test_overlong_write_truncates_without_overflow() {
        let mut element: TextElement<4> = TextElement::new(test_frame(), INFO_FONT, WHITE, "");
        // The digits fit, the " BPM" suffix does not; the write stops there.
        element.set_text(format_args!("{} BPM", 123));
        assert_eq!(element.text(), "123");
        assert!(element.text().len() <= 4, "buffer must never exceed its capacity");
    }

    #[test]
    fn test_set_y_moves_frame_vertically_only() {
        let mut element: TextElement<8> = TextElement::new(test_frame(), INFO_FONT, WHITE, "");
        element.set_y(127);
        assert_eq!(element.frame().top_left, Point::new(0, 127));
        assert_eq!(element.frame().size, Size::new(144, 25), "size is untouched by layout moves");
    }

    #[test]
    fn test_color_toggle() {
        let mut element: TextElement<8> = TextElement::new(test_frame(), INFO_FONT, BLACK, "00:00");
        assert_eq!(element.color(), BLACK);
        element.set_color(WHITE);
        assert_eq!(element.color(), WHITE);
    }

    #[test]
    fn test_background_visibility_toggle() {
        let mut background = BackgroundElement::new();
        assert!(!background.is_hidden(), "background starts visible");
        background.set_hidden(true);
        assert!(background.is_hidden());
        background.set_hidden(false);
        assert!(!background.is_hidden());
    }
}
