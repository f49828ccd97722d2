//! Pre-computed text styles and the font table.
//!
//! The two watchface fonts are addressed by name here, the way an asset
//! bundle hands out fonts by identifier: a large face for the time and a
//! small face for the info lines. Both are `'static`, so fonts live exactly
//! as long as the elements that reference them and need no unload step.
//!
//! `MonoTextStyle` and `TextStyle` construction is const in
//! embedded-graphics 0.8, so all styles here are computed at compile time.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_12_POINT, PROFONT_24_POINT};

use crate::colors::WHITE;

// =============================================================================
// Fonts by Identifier
// =============================================================================

/// Large face for the time element.
pub const TIME_FONT: &MonoFont<'static> = &PROFONT_24_POINT;

/// Small face for the heart-rate and battery elements.
pub const INFO_FONT: &MonoFont<'static> = &PROFONT_12_POINT;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Horizontally centered, anchored at the top of the element frame. All
/// watchface text elements render with this style so a frame's y offset is
/// exactly where the glyphs start.
pub const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Left-aligned, top baseline. Used by the notification banner body text.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Pre-computed Character Styles
// =============================================================================

/// Small white text for the notification banner lines.
pub const BANNER_TEXT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);
