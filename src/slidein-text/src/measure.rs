//! Glyph advance measurement.
//!
//! Line splitting never looks at fonts directly; it asks a [`TextMeasurer`]
//! for the advance of each grapheme. Hosts with a real text shaper plug it in
//! through the trait, and [`MetricsMeasurer`] covers the common case of
//! column-based advances scaled by a font size.

use crate::grapheme::{grapheme_display_width, graphemes};
use crate::styled::Style;

/// Per-font advance ratios, expressed in ems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Advance of a single-column grapheme, in ems.
    pub advance_em: f32,
    /// Advance of a double-column (wide) grapheme, in ems.
    pub wide_advance_em: f32,
    /// Multiplier applied to bold graphemes.
    pub bold_scale: f32,
}

impl FontMetrics {
    /// Typical proportional UI font: half an em per narrow glyph.
    pub const PROPORTIONAL: Self = Self {
        advance_em: 0.5,
        wide_advance_em: 1.0,
        bold_scale: 1.05,
    };

    /// Terminal cells: with `font_size = 1.0`, one unit per column.
    pub const TERMINAL: Self = Self {
        advance_em: 1.0,
        wide_advance_em: 2.0,
        bold_scale: 1.0,
    };
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::PROPORTIONAL
    }
}

/// Layout style shared by every line of a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in layout units.
    pub font_size: f32,
    /// Height of one visual line in layout units.
    pub line_height: f32,
    /// Advance ratios of the font.
    pub metrics: FontMetrics,
}

impl TextStyle {
    /// Create a style with proportional metrics.
    pub fn new(font_size: f32, line_height: f32) -> Self {
        Self {
            font_size,
            line_height,
            metrics: FontMetrics::PROPORTIONAL,
        }
    }

    /// One unit per terminal column, one unit per row.
    pub fn terminal() -> Self {
        Self {
            font_size: 1.0,
            line_height: 1.0,
            metrics: FontMetrics::TERMINAL,
        }
    }

    pub fn with_metrics(mut self, metrics: FontMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl Default for TextStyle {
    /// 20 units of text on 28-unit lines.
    fn default() -> Self {
        Self::new(20.0, 28.0)
    }
}

/// Measures glyph advances for line splitting.
pub trait TextMeasurer {
    /// Horizontal advance of `grapheme` rendered with `style` in `text_style`.
    fn advance(&self, grapheme: &str, style: &Style, text_style: &TextStyle) -> f32;

    /// Total advance of `text` with a single style.
    fn measure(&self, text: &str, style: &Style, text_style: &TextStyle) -> f32 {
        graphemes(text)
            .map(|g| self.advance(g.grapheme, style, text_style))
            .sum()
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn advance(&self, grapheme: &str, style: &Style, text_style: &TextStyle) -> f32 {
        (**self).advance(grapheme, style, text_style)
    }
}

/// Column-based measurer driven by [`FontMetrics`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsMeasurer;

impl TextMeasurer for MetricsMeasurer {
    fn advance(&self, grapheme: &str, style: &Style, text_style: &TextStyle) -> f32 {
        let metrics = &text_style.metrics;
        let em = match grapheme_display_width(grapheme) {
            0 => return 0.0,
            1 => metrics.advance_em,
            _ => metrics.wide_advance_em,
        };

        let scale = if style.attributes.is_bold() {
            metrics.bold_scale
        } else {
            1.0
        };
        em * text_style.font_size * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_advances_are_columns() {
        let style = TextStyle::terminal();
        let m = MetricsMeasurer;
        assert_eq!(m.advance("a", &Style::new(), &style), 1.0);
        assert_eq!(m.advance("日", &Style::new(), &style), 2.0);
        assert_eq!(m.advance("\u{200B}", &Style::new(), &style), 0.0);
        assert_eq!(m.measure("ab 日", &Style::new(), &style), 5.0);
    }

    #[test]
    fn test_proportional_scales_with_font_size() {
        let style = TextStyle::new(20.0, 28.0);
        let m = MetricsMeasurer;
        assert_eq!(m.advance("a", &Style::new(), &style), 10.0);
        assert_eq!(m.advance("日", &Style::new(), &style), 20.0);
        let bold = m.advance("a", &Style::new().bold(), &style);
        assert!((bold - 10.5).abs() < 1e-4);
    }

    #[test]
    fn test_custom_metrics() {
        let mono = FontMetrics {
            advance_em: 0.6,
            ..FontMetrics::TERMINAL
        };
        let style = TextStyle::new(10.0, 14.0).with_metrics(mono);
        let m = MetricsMeasurer;
        assert!((m.measure("abcd", &Style::new(), &style) - 24.0).abs() < 1e-4);
        assert_eq!(
            m.advance("a", &Style::new().bold(), &style),
            m.advance("a", &Style::new(), &style)
        );
    }

    #[test]
    fn test_measurer_by_reference() {
        let m = MetricsMeasurer;
        let by_ref: &dyn TextMeasurer = &m;
        assert_eq!(by_ref.measure("abc", &Style::new(), &TextStyle::terminal()), 3.0);
    }
}
