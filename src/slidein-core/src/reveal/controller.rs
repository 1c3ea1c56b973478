//! Staggered reveal controller.

use std::time::Duration;

use slidein_text::LineSegment;
use tracing::{debug, trace};

use super::config::RevealConfig;
use super::state::{LineAnimationState, LinePhase};
use crate::animation::{Clock, SystemClock};

/// Identifies one configuration of a controller.
///
/// Bumped by every [`configure`](StaggeredRevealController::configure) and
/// [`reset`](StaggeredRevealController::reset). Hosts that schedule work
/// against a controller tag it with the generation current at scheduling
/// time, and [`tick_for`](StaggeredRevealController::tick_for) drops work
/// whose tag is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Drives one slide-in animation per line, each delayed by its index.
///
/// Line `i` waits `i * delay_per_line` after [`start`](Self::start), then
/// eases its vertical offset from the line height to zero over
/// `animation_duration`. Every [`tick`](Self::tick) evaluates all lines
/// against the clock, so the result does not depend on frame rate.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use slidein_core::animation::ManualClock;
/// use slidein_core::{LinePhase, RevealConfig, StaggeredRevealController};
///
/// let clock = ManualClock::new();
/// let mut reveal = StaggeredRevealController::with_clock(28.0, clock.clone());
/// reveal.configure_count(3, RevealConfig::default());
/// reveal.start();
///
/// clock.advance(Duration::from_millis(750));
/// reveal.tick();
/// assert_eq!(reveal.phase(0), Some(LinePhase::Revealed));
/// assert_eq!(reveal.phase(1), Some(LinePhase::Revealing));
/// assert_eq!(reveal.phase(2), Some(LinePhase::Hidden));
/// ```
#[derive(Debug, Clone)]
pub struct StaggeredRevealController<C = SystemClock> {
    clock: C,
    line_height: f32,
    config: RevealConfig,
    lines: Vec<LineAnimationState>,
    started_at: Option<Duration>,
    generation: Generation,
}

impl StaggeredRevealController<SystemClock> {
    pub fn new(line_height: f32) -> Self {
        Self::with_clock(line_height, SystemClock::new())
    }
}

impl<C: Clock> StaggeredRevealController<C> {
    /// Create an idle controller with no lines, reading time from `clock`.
    pub fn with_clock(line_height: f32, clock: C) -> Self {
        Self {
            clock,
            line_height,
            config: RevealConfig::default(),
            lines: Vec::new(),
            started_at: None,
            generation: Generation::default(),
        }
    }

    /// Replace all line state with one hidden entry per segment.
    ///
    /// A running reveal restarts from the current time with the new timing;
    /// an idle one waits for [`start`](Self::start).
    pub fn configure(&mut self, lines: &[LineSegment], config: RevealConfig) -> Generation {
        self.configure_count(lines.len(), config)
    }

    /// Like [`configure`](Self::configure) for hosts that lay out text
    /// themselves and only know how many lines there are.
    pub fn configure_count(&mut self, line_count: usize, config: RevealConfig) -> Generation {
        self.config = config;
        self.rebuild(line_count);
        if self.started_at.is_some() {
            self.started_at = Some(self.clock.now());
        }
        debug!(
            line_count,
            delay_ms = config.delay_per_line().as_millis() as u64,
            duration_ms = config.animation_duration().as_millis() as u64,
            running = self.is_running(),
            "reveal configured"
        );
        self.generation
    }

    /// Change the distance lines travel. Restarts like a reconfigure.
    pub fn set_line_height(&mut self, line_height: f32) -> Generation {
        self.line_height = line_height;
        self.configure_count(self.lines.len(), self.config)
    }

    /// Begin the reveal. No effect while already running.
    pub fn start(&mut self) -> Generation {
        if self.started_at.is_some() {
            trace!("reveal already running");
            return self.generation;
        }
        self.started_at = Some(self.clock.now());
        debug!(line_count = self.lines.len(), "reveal started");
        self.generation
    }

    /// Stop and hide every line.
    pub fn reset(&mut self) -> Generation {
        self.started_at = None;
        self.rebuild(self.lines.len());
        debug!(line_count = self.lines.len(), "reveal reset");
        self.generation
    }

    /// Advance every line to the clock's current time.
    pub fn tick(&mut self) {
        self.tick_for(self.generation);
    }

    /// Advance only if `generation` is still current.
    ///
    /// Returns `false`, leaving state untouched, when the tick belongs to a
    /// configuration that has since been replaced.
    pub fn tick_for(&mut self, generation: Generation) -> bool {
        if generation != self.generation {
            trace!(?generation, current = ?self.generation, "stale tick ignored");
            return false;
        }
        let Some(started_at) = self.started_at else {
            return true;
        };

        let elapsed = self.clock.now().saturating_sub(started_at);
        let duration = self.config.animation_duration();
        for line in &mut self.lines {
            if let Some(phase) = line.advance(elapsed, duration, self.line_height) {
                trace!(
                    line = line.line_index(),
                    ?phase,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "line phase changed"
                );
            }
        }
        true
    }

    /// Offset of line `index` below its resting position.
    ///
    /// Zero for indices past the end, so hosts can query unconditionally.
    pub fn current_offset(&self, index: usize) -> f32 {
        self.lines
            .get(index)
            .map_or(0.0, LineAnimationState::current_offset)
    }

    pub fn state(&self, index: usize) -> Option<&LineAnimationState> {
        self.lines.get(index)
    }

    pub fn states(&self) -> &[LineAnimationState] {
        &self.lines
    }

    pub fn phase(&self, index: usize) -> Option<LinePhase> {
        self.lines.get(index).map(LineAnimationState::phase)
    }

    pub fn offsets(&self) -> impl Iterator<Item = f32> + '_ {
        self.lines.iter().map(LineAnimationState::current_offset)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn config(&self) -> RevealConfig {
        self.config
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Every line has settled. Vacuously true with no lines.
    pub fn is_complete(&self) -> bool {
        self.lines.iter().all(LineAnimationState::target_reached)
    }

    /// Time since the reveal started, if running.
    pub fn elapsed(&self) -> Option<Duration> {
        self.started_at
            .map(|started_at| self.clock.now().saturating_sub(started_at))
    }

    /// Time until the next hidden line starts moving.
    ///
    /// `None` when idle or when no line is still waiting. Hosts that pause
    /// their frame loop between lines can sleep for this long.
    pub fn next_transition(&self) -> Option<Duration> {
        let elapsed = self.elapsed()?;
        self.lines
            .iter()
            .filter(|line| line.phase() == LinePhase::Hidden)
            .map(|line| line.start_delay().saturating_sub(elapsed))
            .min()
    }

    fn rebuild(&mut self, line_count: usize) {
        self.generation = self.generation.next();
        self.lines = (0..line_count)
            .map(|i| LineAnimationState::hidden(i, self.config.start_delay(i), self.line_height))
            .collect();
    }
}
