//! Animation primitives: easing curves and time sources.
//!
//! Animations here are evaluated as functions of elapsed time against a
//! stored start, never by accumulating per-frame deltas, so any frame rate
//! yields the same curve.

mod clock;
mod easing;

pub use clock::{Clock, ManualClock, SystemClock};
pub use easing::{ease_out_quad, lerp};
