//! Color constants for the watchface.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue
//! (red 0-31, green 0-63, blue 0-31). Standard colors come from the
//! `RgbColor` trait constants; scene colors are tuned by hand.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Window background and time text over the bright sky band.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Info text, and time text while the screen is obstructed.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Background Scene Colors
// =============================================================================

/// Deep indigo for the upper sky band.
pub const INDIGO: Rgb565 = Rgb565::new(5, 12, 18);

/// Dusk violet between the indigo sky and the bright band.
pub const DUSK: Rgb565 = Rgb565::new(14, 22, 20);

/// Pale cream for the bright sky band behind the time text.
pub const CREAM: Rgb565 = Rgb565::new(30, 58, 22);

/// Warm gold for the sun disc.
pub const SUN_GOLD: Rgb565 = Rgb565::new(31, 48, 4);

/// Mid green for the near hills.
pub const HILL_GREEN: Rgb565 = Rgb565::new(4, 24, 6);

/// Darker green for the far hills and the ground fill.
pub const HILL_DARK: Rgb565 = Rgb565::new(2, 14, 4);

// =============================================================================
// Overlay Colors
// =============================================================================

/// Banner body fill for the notification overlay.
pub const BANNER_GRAY: Rgb565 = Rgb565::new(6, 12, 6);

/// Accent stripe and icon color on the notification overlay.
pub const BANNER_ACCENT: Rgb565 = Rgb565::new(31, 40, 0);
