//! Per-line animation state.

use std::time::Duration;

use crate::animation::{ease_out_quad, lerp};

/// Where a line is in its reveal.
///
/// Phases only move forward until the owning controller resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LinePhase {
    /// Waiting for its start delay; drawn fully below its slot.
    #[default]
    Hidden,
    /// Sliding up toward its resting position.
    Revealing,
    /// At rest. Terminal.
    Revealed,
}

/// Animation state of one visual line.
///
/// Owned and mutated only by [`StaggeredRevealController`]; hosts read it.
///
/// [`StaggeredRevealController`]: super::StaggeredRevealController
#[derive(Debug, Clone, PartialEq)]
pub struct LineAnimationState {
    line_index: usize,
    start_delay: Duration,
    phase: LinePhase,
    target_reached: bool,
    current_offset: f32,
}

impl LineAnimationState {
    pub(crate) fn hidden(line_index: usize, start_delay: Duration, line_height: f32) -> Self {
        Self {
            line_index,
            start_delay,
            phase: LinePhase::Hidden,
            target_reached: false,
            current_offset: line_height,
        }
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }

    /// Delay after the reveal start before this line moves.
    pub fn start_delay(&self) -> Duration {
        self.start_delay
    }

    pub fn phase(&self) -> LinePhase {
        self.phase
    }

    /// True once the line has settled at offset zero.
    pub fn target_reached(&self) -> bool {
        self.target_reached
    }

    /// Vertical offset below the resting position, in layout units.
    ///
    /// Starts at the line height and eases to zero.
    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    /// Evaluate the line at `elapsed` since the reveal started.
    ///
    /// Returns the new phase when it changed. Offsets never increase, so a
    /// clock that steps backwards holds the line where it was.
    pub(crate) fn advance(
        &mut self,
        elapsed: Duration,
        duration: Duration,
        line_height: f32,
    ) -> Option<LinePhase> {
        if self.phase == LinePhase::Revealed {
            return None;
        }
        let since = elapsed.checked_sub(self.start_delay)?;

        let t = if duration.is_zero() {
            1.0
        } else {
            (since.as_secs_f64() / duration.as_secs_f64()).min(1.0) as f32
        };

        let before = self.phase;
        if t >= 1.0 {
            self.phase = LinePhase::Revealed;
            self.target_reached = true;
            self.current_offset = 0.0;
        } else {
            self.phase = LinePhase::Revealing;
            let offset = lerp(line_height, 0.0, ease_out_quad(t));
            self.current_offset = self.current_offset.min(offset);
        }

        (self.phase != before).then_some(self.phase)
    }
}
