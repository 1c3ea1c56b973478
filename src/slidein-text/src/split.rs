//! Greedy partitioning of styled text into visual lines.
//!
//! The splitter walks graphemes left to right and accumulates their
//! advances. Whitespace is a break opportunity after itself and hangs past
//! the right edge; CJK characters allow a break on either side. When the
//! next grapheme would overflow, the line ends at the last opportunity. What
//! happens when there is none depends on [`WrapMode`].
//!
//! Every grapheme lands in exactly one line and lines are emitted in reading
//! order, so the segments always concatenate back to the source.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::grapheme::{graphemes, is_break_opportunity, is_cjk, is_line_terminator};
use crate::measure::{MetricsMeasurer, TextMeasurer, TextStyle};
use crate::styled::{Style, StyledText};

/// Tolerance for accumulated floating point advances.
const FIT_EPSILON: f32 = 1e-3;

/// Line breaking strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WrapMode {
    /// Break only on explicit newlines.
    None,
    /// Break at the overflowing grapheme, ignoring word boundaries.
    Char,
    /// Break at word boundaries. A word wider than the line is kept whole
    /// and overflows on a line of its own.
    #[default]
    Word,
    /// Break at word boundaries, hard-breaking words wider than the line at
    /// the overflowing grapheme.
    WordBreakAll,
}

impl WrapMode {
    #[inline]
    fn uses_soft_breaks(self) -> bool {
        matches!(self, Self::Word | Self::WordBreakAll)
    }
}

/// One visual line of a split.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    /// Zero-based position in reading order.
    pub index: usize,
    /// Byte range of the line in the source text.
    pub range: Range<usize>,
    /// The line's text with style runs clipped to `range`.
    pub text: StyledText,
    /// Advance of the line excluding trailing whitespace.
    pub width: f32,
}

impl LineSegment {
    /// Check if the line carries no visible content.
    pub fn is_blank(&self) -> bool {
        self.text.text().trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct SoftBreak {
    at: usize,
    width: f32,
    visible: f32,
}

/// Splits styled text into visual lines for a given width.
///
/// # Example
///
/// ```
/// use slidein_text::{LineSplitter, StyledText, TextStyle};
///
/// let splitter = LineSplitter::new();
/// let text = StyledText::plain("Hello World");
/// let lines = splitter.split(&text, &TextStyle::terminal(), 6.0).unwrap();
/// let texts: Vec<_> = lines.iter().map(|l| l.text.text()).collect();
/// assert_eq!(texts, vec!["Hello ", "World"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineSplitter<M = MetricsMeasurer> {
    measurer: M,
    mode: WrapMode,
}

impl LineSplitter {
    /// Create a word-wrapping splitter with the built-in measurer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: TextMeasurer> LineSplitter<M> {
    /// Create a splitter backed by a host-provided measurer.
    pub fn with_measurer(measurer: M) -> Self {
        Self {
            measurer,
            mode: WrapMode::default(),
        }
    }

    /// Set the wrap mode.
    pub fn with_mode(mut self, mode: WrapMode) -> Self {
        self.mode = mode;
        self
    }

    /// The wrap mode in use.
    pub fn mode(&self) -> WrapMode {
        self.mode
    }

    /// The measurer in use.
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Partition `text` into visual lines no wider than `max_width`.
    ///
    /// Empty text yields no lines. Text ending in a newline yields a trailing
    /// empty line.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidLayoutConstraint`] if `max_width` is not
    /// a positive, finite number.
    pub fn split(
        &self,
        text: &StyledText,
        style: &TextStyle,
        max_width: f32,
    ) -> Result<Vec<LineSegment>> {
        if !(max_width.is_finite() && max_width > 0.0) {
            return Err(LayoutError::InvalidLayoutConstraint { max_width });
        }

        let lines = self.break_lines(text, style, max_width);
        tracing::trace!(
            lines = lines.len(),
            bytes = text.len(),
            max_width,
            mode = ?self.mode,
            "split text into lines"
        );

        lines
            .into_iter()
            .enumerate()
            .map(|(index, (range, width))| {
                Ok(LineSegment {
                    index,
                    text: text.slice(range.clone())?,
                    range,
                    width,
                })
            })
            .collect()
    }

    fn break_lines(
        &self,
        text: &StyledText,
        style: &TextStyle,
        max_width: f32,
    ) -> Vec<(Range<usize>, f32)> {
        let source = text.text();
        let runs = text.runs();
        let limit = max_width + FIT_EPSILON;
        let soft_breaks = self.mode.uses_soft_breaks();
        let wraps = self.mode != WrapMode::None;

        let mut lines = Vec::new();
        let mut start = 0;
        // Width including hanging whitespace, and width of the visible part.
        let mut width = 0.0_f32;
        let mut visible = 0.0_f32;
        let mut soft: Option<SoftBreak> = None;
        let mut ends_with_terminator = false;
        let mut run_idx = 0;

        for g in graphemes(source) {
            ends_with_terminator = false;

            if is_line_terminator(g.grapheme) {
                lines.push((start..g.end_offset(), visible));
                start = g.end_offset();
                width = 0.0;
                visible = 0.0;
                soft = None;
                ends_with_terminator = true;
                continue;
            }

            while run_idx + 1 < runs.len() && runs[run_idx].range.end <= g.byte_offset {
                run_idx += 1;
            }
            let run_style = runs.get(run_idx).map_or_else(Style::new, |run| run.style);
            let advance = self.measurer.advance(g.grapheme, &run_style, style);

            if is_break_opportunity(g.grapheme) {
                width += advance;
                if soft_breaks {
                    soft = Some(SoftBreak {
                        at: g.end_offset(),
                        width,
                        visible,
                    });
                }
                continue;
            }

            let cjk = soft_breaks && is_cjk(g.grapheme);
            if cjk && g.byte_offset > start {
                soft = Some(SoftBreak {
                    at: g.byte_offset,
                    width,
                    visible,
                });
            }

            if wraps && g.byte_offset > start && width + advance > limit {
                if let Some(brk) = soft.take().filter(|_| soft_breaks) {
                    lines.push((start..brk.at, brk.visible));
                    start = brk.at;
                    width -= brk.width;
                    visible = width;
                }

                let still_overflows = g.byte_offset > start && width + advance > limit;
                if still_overflows && self.mode != WrapMode::Word {
                    lines.push((start..g.byte_offset, visible));
                    start = g.byte_offset;
                    width = 0.0;
                }
            }

            width += advance;
            visible = width;

            if cjk {
                soft = Some(SoftBreak {
                    at: g.end_offset(),
                    width,
                    visible,
                });
            }
        }

        if start < source.len() || ends_with_terminator {
            lines.push((start..source.len(), visible));
        }

        lines
    }
}

/// Split `text` with the default word-wrapping splitter.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidLayoutConstraint`] if `max_width <= 0`.
pub fn split_lines(
    text: &StyledText,
    style: &TextStyle,
    max_width: f32,
) -> Result<Vec<LineSegment>> {
    LineSplitter::new().split(text, style, max_width)
}
