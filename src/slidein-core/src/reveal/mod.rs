//! Staggered line reveal.

mod config;
mod controller;
mod state;

pub use config::{
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_DELAY_PER_LINE_MS, RevealConfig, SLIDER_RANGE_MS,
    SLIDER_STEP_MS, SLIDER_STEPS,
};
pub use controller::{Generation, StaggeredRevealController};
pub use state::{LineAnimationState, LinePhase};
