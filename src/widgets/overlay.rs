//! Host-side notification banner (the obstruction).
//!
//! This is the system overlay the watchface has to yield to, not part of the
//! watchface itself: the host draws it over the rendered frame whenever it is
//! active, and the renderer only learns about it through the obstruction
//! bounds. Geometry is fixed, so every position is a compile-time constant.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};

use crate::colors::{BANNER_ACCENT, BANNER_GRAY};
use crate::config::{OVERLAY_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{BANNER_TEXT_STYLE, LEFT_TOP};

// =============================================================================
// Banner Geometry
// =============================================================================

/// Top edge of the banner; everything below is obstructed.
const BANNER_TOP: i32 = (SCREEN_HEIGHT - OVERLAY_HEIGHT) as i32;

/// Banner body rectangle.
const BANNER_POS: Point = Point::new(0, BANNER_TOP);
const BANNER_SIZE: Size = Size::new(SCREEN_WIDTH, OVERLAY_HEIGHT);

/// Accent stripe along the banner's top edge.
const STRIPE_POS: Point = Point::new(0, BANNER_TOP);
const STRIPE_SIZE: Size = Size::new(SCREEN_WIDTH, 2);

/// App icon square on the left.
const ICON_POS: Point = Point::new(6, BANNER_TOP + 10);
const ICON_SIZE: Size = Size::new(12, 12);

/// First text line (app name), to the right of the icon.
const TITLE_POS: Point = Point::new(24, BANNER_TOP + 8);

/// Second text line (notification body).
const BODY_POS: Point = Point::new(24, BANNER_TOP + 24);

// =============================================================================
// Pre-computed Primitive Styles
// =============================================================================

const BANNER_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BANNER_GRAY);
const ACCENT_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BANNER_ACCENT);

// =============================================================================
// Drawing
// =============================================================================

/// Draw the quick-view banner over the bottom of the surface.
pub fn draw_notification_banner<D: DrawTarget<Color = Rgb565>>(display: &mut D) {
    Rectangle::new(BANNER_POS, BANNER_SIZE)
        .into_styled(BANNER_FILL)
        .draw(display)
        .ok();
    Rectangle::new(STRIPE_POS, STRIPE_SIZE)
        .into_styled(ACCENT_FILL)
        .draw(display)
        .ok();
    Rectangle::new(ICON_POS, ICON_SIZE)
        .into_styled(ACCENT_FILL)
        .draw(display)
        .ok();

    Text::with_text_style("Calendar", TITLE_POS, BANNER_TEXT_STYLE, LEFT_TOP)
        .draw(display)
        .ok();
    Text::with_text_style("Stand-up in 5 min", BODY_POS, BANNER_TEXT_STYLE, LEFT_TOP)
        .draw(display)
        .ok();
}
