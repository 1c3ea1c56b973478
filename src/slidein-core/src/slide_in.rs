//! Line-by-line slide-in text.
//!
//! [`SlideInText`] ties the pieces together: it splits styled text into
//! visual lines for the available width, drives one staggered reveal over
//! them, and hands the host a positioned [`RenderLine`] per line each frame.

use slidein_text::{
    LineSegment, LineSplitter, MetricsMeasurer, StyledText, TextAlign, TextMeasurer, TextStyle,
};
use tracing::debug;

use crate::animation::{Clock, SystemClock};
use crate::error::Result;
use crate::reveal::{LinePhase, RevealConfig, StaggeredRevealController};

/// One line ready to draw.
///
/// The host clips each line to its own slot of `line_height` and draws the
/// text `y_offset` below the slot's top, so a line with an offset equal to
/// the line height is fully clipped.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderLine<'a> {
    pub index: usize,
    pub text: &'a StyledText,
    /// Horizontal position from the alignment, in layout units.
    pub x_offset: f32,
    /// Distance below the resting position, in layout units.
    pub y_offset: f32,
    pub phase: LinePhase,
}

impl RenderLine<'_> {
    /// Fraction of the line's slot showing text, from 0 (clipped) to 1.
    pub fn visible_fraction(&self, line_height: f32) -> f32 {
        if line_height <= 0.0 {
            return 1.0;
        }
        (1.0 - self.y_offset / line_height).clamp(0.0, 1.0)
    }
}

/// Styled text that reveals itself one visual line at a time.
///
/// Call [`layout`](Self::layout) with the available width whenever it may
/// have changed (it is cached), then [`frame`](Self::frame) to advance the
/// animation and read positions.
///
/// Changing the text, style or timing restarts the reveal with every line
/// hidden. Changing the alignment does not.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use slidein_core::animation::ManualClock;
/// use slidein_core::{LinePhase, RevealConfig, SlideInText};
/// use slidein_text::{LineSplitter, TextStyle};
///
/// let clock = ManualClock::new();
/// let mut text = SlideInText::with_parts(
///     "one two three",
///     TextStyle::terminal(),
///     LineSplitter::new(),
///     clock.clone(),
/// );
/// text.layout(4.0).unwrap();
/// text.start();
///
/// clock.advance(Duration::from_millis(600));
/// let frame = text.frame();
/// assert_eq!(frame.len(), 3);
/// assert_eq!(frame[0].phase, LinePhase::Revealed);
/// assert_eq!(frame[1].phase, LinePhase::Revealing);
/// assert_eq!(frame[2].phase, LinePhase::Hidden);
/// ```
#[derive(Debug)]
pub struct SlideInText<M = MetricsMeasurer, C = SystemClock> {
    text: StyledText,
    style: TextStyle,
    align: TextAlign,
    splitter: LineSplitter<M>,
    reveal: StaggeredRevealController<C>,
    lines: Vec<LineSegment>,
    max_width: Option<f32>,
    stale: bool,
}

impl SlideInText {
    pub fn new(text: impl Into<StyledText>, style: TextStyle) -> Self {
        Self::with_parts(text, style, LineSplitter::new(), SystemClock::new())
    }
}

impl<M: TextMeasurer, C: Clock> SlideInText<M, C> {
    pub fn with_parts(
        text: impl Into<StyledText>,
        style: TextStyle,
        splitter: LineSplitter<M>,
        clock: C,
    ) -> Self {
        Self {
            text: text.into(),
            style,
            align: TextAlign::default(),
            splitter,
            reveal: StaggeredRevealController::with_clock(style.line_height, clock),
            lines: Vec::new(),
            max_width: None,
            stale: true,
        }
    }

    pub fn with_config(mut self, config: RevealConfig) -> Self {
        self.set_config(config);
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Split the text for `max_width`, reusing the previous split when
    /// nothing changed.
    ///
    /// A new split that produces the same line boundaries keeps the running
    /// animation; different boundaries restart it.
    ///
    /// # Errors
    ///
    /// Returns a layout error if `max_width` is not positive and finite.
    pub fn layout(&mut self, max_width: f32) -> Result<&[LineSegment]> {
        if self.stale || self.max_width != Some(max_width) {
            let lines = self.splitter.split(&self.text, &self.style, max_width)?;
            let same_breaks = !self.stale
                && lines.len() == self.lines.len()
                && lines.iter().zip(&self.lines).all(|(a, b)| a.range == b.range);
            if !same_breaks {
                debug!(max_width, line_count = lines.len(), "text relaid out");
                self.reveal.configure(&lines, self.reveal.config());
            }
            self.lines = lines;
            self.max_width = Some(max_width);
            self.stale = false;
        }
        Ok(&self.lines)
    }

    /// Advance the reveal and position every line.
    ///
    /// Uses the most recent [`layout`](Self::layout); before the first one
    /// there are no lines.
    pub fn frame(&mut self) -> Vec<RenderLine<'_>> {
        self.reveal.tick();
        let max_width = self.max_width.unwrap_or(0.0);
        self.lines
            .iter()
            .map(|line| RenderLine {
                index: line.index,
                text: &line.text,
                x_offset: self.align.offset(line.width, max_width),
                y_offset: self.reveal.current_offset(line.index),
                phase: self.reveal.phase(line.index).unwrap_or_default(),
            })
            .collect()
    }

    pub fn start(&mut self) {
        self.reveal.start();
    }

    pub fn reset(&mut self) {
        self.reveal.reset();
    }

    /// Start when idle, reset when running. Returns whether it is now running.
    pub fn toggle(&mut self) -> bool {
        if self.reveal.is_running() {
            self.reveal.reset();
            false
        } else {
            self.reveal.start();
            true
        }
    }

    pub fn set_text(&mut self, text: impl Into<StyledText>) {
        self.text = text.into();
        self.stale = true;
    }

    pub fn set_style(&mut self, style: TextStyle) {
        if style.line_height != self.style.line_height {
            self.reveal.set_line_height(style.line_height);
        }
        self.style = style;
        self.stale = true;
    }

    /// Replace the timing. Restarts the reveal from every line hidden.
    pub fn set_config(&mut self, config: RevealConfig) {
        self.reveal.configure(&self.lines, config);
    }

    /// Change the alignment of subsequent frames.
    pub fn set_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    pub fn text(&self) -> &StyledText {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }

    pub fn config(&self) -> RevealConfig {
        self.reveal.config()
    }

    /// Lines from the most recent layout.
    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    pub fn reveal(&self) -> &StaggeredRevealController<C> {
        &self.reveal
    }

    pub fn is_running(&self) -> bool {
        self.reveal.is_running()
    }

    pub fn is_complete(&self) -> bool {
        self.reveal.is_complete()
    }
}
