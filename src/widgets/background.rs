//! Watchface background image: a sunrise over hills.
//!
//! The image is const pixel-art geometry rather than a bundled bitmap, but
//! it plays the bitmap's role: drawn once per redraw, hidden entirely while
//! the screen is obstructed.
//!
//! # Scene Layout
//!
//! ```text
//! ┌────────────────────────┐ 0
//! │ indigo sky      (sun)  │      battery text sits here (white)
//! ├────────────────────────┤ 40
//! │ dusk band              │
//! ├────────────────────────┤ 52
//! │ cream band             │      time text sits here (black)
//! ├────────────────────────┤ 104
//! │ dusk glow              │
//! ├────────────────────────┤ 112
//! │ hills / ground         │      heart-rate text sits here (white)
//! └────────────────────────┘ 168
//! ```
//!
//! The cream band is deliberately aligned with the unobstructed time offset
//! (31% of 168 = 52) so the dark time text always lands on the bright band.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle, Triangle},
};

use crate::colors::{CREAM, DUSK, HILL_DARK, HILL_GREEN, INDIGO, SUN_GOLD};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

// =============================================================================
// Scene Geometry
// =============================================================================

/// Upper sky band.
const SKY_POS: Point = Point::new(0, 0);
const SKY_SIZE: Size = Size::new(SCREEN_WIDTH, 40);

/// Dusk band between the sky and the bright band.
const DUSK_POS: Point = Point::new(0, 40);
const DUSK_SIZE: Size = Size::new(SCREEN_WIDTH, 12);

/// Bright band behind the time text.
const CREAM_POS: Point = Point::new(0, 52);
const CREAM_SIZE: Size = Size::new(SCREEN_WIDTH, 52);

/// Glow band under the bright band.
const GLOW_POS: Point = Point::new(0, 104);
const GLOW_SIZE: Size = Size::new(SCREEN_WIDTH, 8);

/// Ground fill from the horizon to the bottom edge.
const GROUND_POS: Point = Point::new(0, 112);
const GROUND_SIZE: Size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - 112);

/// Sun disc in the upper sky (top-left corner and diameter).
const SUN_POS: Point = Point::new(104, 8);
const SUN_DIAMETER: u32 = 20;

/// Left hill.
const LEFT_HILL: Triangle = Triangle::new(Point::new(-10, 168), Point::new(38, 114), Point::new(92, 168));

/// Right hill, slightly lower and overlapping the left one.
const RIGHT_HILL: Triangle = Triangle::new(Point::new(60, 168), Point::new(112, 122), Point::new(154, 168));

// =============================================================================
// Pre-computed Primitive Styles
// =============================================================================

const SKY_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(INDIGO);
const DUSK_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(DUSK);
const CREAM_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(CREAM);
const GROUND_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(HILL_DARK);
const SUN_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SUN_GOLD);
const HILL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(HILL_GREEN);

// =============================================================================
// Drawing
// =============================================================================

/// Draw the full background scene. Covers every pixel of the surface, so no
/// clear is needed underneath it.
pub fn draw_background<D: DrawTarget<Color = Rgb565>>(display: &mut D) {
    // Sky bands, top to bottom
    Rectangle::new(SKY_POS, SKY_SIZE).into_styled(SKY_FILL).draw(display).ok();
    Rectangle::new(DUSK_POS, DUSK_SIZE).into_styled(DUSK_FILL).draw(display).ok();
    Rectangle::new(CREAM_POS, CREAM_SIZE).into_styled(CREAM_FILL).draw(display).ok();
    Rectangle::new(GLOW_POS, GLOW_SIZE).into_styled(DUSK_FILL).draw(display).ok();

    // Sun disc in the upper sky
    Circle::new(SUN_POS, SUN_DIAMETER).into_styled(SUN_FILL).draw(display).ok();

    // Ground and hills
    Rectangle::new(GROUND_POS, GROUND_SIZE)
        .into_styled(GROUND_FILL)
        .draw(display)
        .ok();
    LEFT_HILL.into_styled(HILL_FILL).draw(display).ok();
    RIGHT_HILL.into_styled(HILL_FILL).draw(display).ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
