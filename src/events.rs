//! Host events delivered to the watchface.
//!
//! The host loop owns timers, sensors, and the overlay; the renderer only
//! sees these notifications. Minute ticks and heart-rate updates trigger a
//! text-only refresh, obstruction changes trigger a full layout pass, and
//! every other health event kind is ignored.

use crate::layout::DisplayBounds;

/// Health-service notification kinds. The watchface only reacts to
/// [`HealthEventKind::HeartRate`]; the simulator host delivers a subset of
/// the kinds a real health service would.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthEventKind {
    /// Daily rollup of all health metrics.
    Significant,
    /// Step/activity counter update.
    Movement,
    /// Sleep phase update.
    Sleep,
    /// New heart-rate reading available.
    HeartRate,
}

/// An event dispatched by the host loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The wall clock entered a new minute.
    MinuteTick,
    /// The health service reported new data.
    Health(HealthEventKind),
    /// A system overlay appeared or disappeared; carries the new bounds.
    ObstructionChanged(DisplayBounds),
}
