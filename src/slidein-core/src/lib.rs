//! Line-by-line slide-in reveal engine.
//!
//! Text is split into visual lines by [`slidein_text`], then each line slides
//! up into place from one line height below, starting `index * delay` after
//! the reveal begins and easing out over a fixed duration.
//!
//! - [`StaggeredRevealController`]: per-line timing and offsets
//! - [`SlideInText`]: layout, reveal and alignment in one value
//! - [`animation`]: easing curves and the [`Clock`](animation::Clock) seam
//!
//! The engine never sleeps or spawns. Hosts call `tick` (or `frame`) from
//! whatever loop they already have, and every call evaluates lines against
//! the clock, so frames can arrive at any rate.

pub mod animation;
pub mod error;
pub mod reveal;
mod slide_in;

pub use error::{Error, Result, RevealError};
pub use reveal::{
    Generation, LineAnimationState, LinePhase, RevealConfig, StaggeredRevealController,
};
pub use slide_in::{RenderLine, SlideInText};
