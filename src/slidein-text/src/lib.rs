//! Styled text and line splitting for SlideIn.
//!
//! This crate turns rich text and an available width into the ordered visual
//! lines that the reveal animation drives one by one.
//!
//! - **Graphemes**: grapheme clusters with byte offsets and column widths
//! - **Styled text**: a text buffer with canonical, non-overlapping style runs
//! - **Measurement**: the [`TextMeasurer`] seam plus a metrics-based default
//! - **Splitting**: greedy line breaking that preserves style runs
//!
//! # Example
//!
//! ```
//! use slidein_text::{split_lines, Color, Span, StyledText, TextStyle};
//!
//! let text: StyledText = [
//!     Span::new("SlideIn").bold().fg(Color::from_hex("#6200EE").unwrap()),
//!     Span::new(" reveals text one line at a time"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let lines = split_lines(&text, &TextStyle::terminal(), 16.0).unwrap();
//! assert_eq!(lines[0].text.text(), "SlideIn reveals ");
//! assert_eq!(lines.len(), 3);
//!
//! // Lines always concatenate back to the source.
//! let rebuilt = lines.into_iter().fold(StyledText::new(), |acc, l| acc + l.text);
//! assert_eq!(rebuilt, text);
//! ```

pub mod align;
pub mod error;
pub mod grapheme;
pub mod measure;
pub mod split;
pub mod styled;

pub use align::TextAlign;
pub use error::{LayoutError, Result};
pub use measure::{FontMetrics, MetricsMeasurer, TextMeasurer, TextStyle};
pub use split::{LineSegment, LineSplitter, WrapMode, split_lines};
pub use styled::{Color, Span, Style, StyledRun, StyledText, TextAttributes};
