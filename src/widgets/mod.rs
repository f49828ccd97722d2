//! Drawable scenery: the watchface background image and the host-side
//! notification overlay.
//!
//! - [`background`]: the sunrise scene behind the watchface text
//! - [`overlay`]: the system quick-view banner that obstructs the surface
//!
//! The background belongs to the renderer (it is an element the watchface
//! shows and hides); the overlay belongs to the host and is drawn on top of
//! whatever the renderer produced, exactly like a real system banner.

mod background;
mod overlay;

pub use background::draw_background;
pub use overlay::draw_notification_banner;
