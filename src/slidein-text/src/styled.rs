//! Styled text: a UTF-8 buffer plus ordered style runs.
//!
//! [`StyledText`] keeps its runs in a canonical form: runs are non-empty,
//! ordered, contiguous, cover the whole buffer and no two neighbours carry
//! the same [`Style`]. Slicing clips runs to the requested range, so
//! concatenating the slices of a partition rebuilds the original exactly.

use std::borrow::Cow;
use std::fmt;
use std::ops::{Add, Range};

use smallvec::SmallVec;

use crate::error::{LayoutError, Result};

/// RGBA color with normalized 0.0-1.0 component values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0.0-1.0).
    pub r: f32,
    /// Green component (0.0-1.0).
    pub g: f32,
    /// Blue component (0.0-1.0).
    pub b: f32,
    /// Alpha component (0.0-1.0).
    pub a: f32,
}

impl Color {
    /// Create a new color from normalized RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from normalized RGB values.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color from 8-bit RGB values.
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parse `#RGB` or `#RRGGBB`; the leading `#` is optional.
    ///
    /// ```
    /// use slidein_text::styled::Color;
    ///
    /// assert_eq!(Color::from_hex("#6200EE").unwrap().to_rgb_u8(), (0x62, 0x00, 0xEE));
    /// assert!(Color::from_hex("nope").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => Some(Self::from_rgb_u8(
                channel(hex[0..1].repeat(2).as_str())?,
                channel(hex[1..2].repeat(2).as_str())?,
                channel(hex[2..3].repeat(2).as_str())?,
            )),
            6 => Some(Self::from_rgb_u8(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    /// Convert to 8-bit RGB values.
    #[inline]
    pub fn to_rgb_u8(&self) -> (u8, u8, u8) {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}

/// Text attributes as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextAttributes(u8);

impl TextAttributes {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const DIM: Self = Self(1 << 1);
    pub const ITALIC: Self = Self(1 << 2);
    pub const UNDERLINE: Self = Self(1 << 3);
    pub const STRIKETHROUGH: Self = Self(1 << 4);

    /// Check if no attribute is set.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check if every attribute in `other` is set.
    #[inline]
    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Add attributes.
    #[inline]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn is_bold(&self) -> bool {
        self.contains(Self::BOLD)
    }

    #[inline]
    pub const fn is_dim(&self) -> bool {
        self.contains(Self::DIM)
    }

    #[inline]
    pub const fn is_italic(&self) -> bool {
        self.contains(Self::ITALIC)
    }

    #[inline]
    pub const fn is_underline(&self) -> bool {
        self.contains(Self::UNDERLINE)
    }

    #[inline]
    pub const fn is_strikethrough(&self) -> bool {
        self.contains(Self::STRIKETHROUGH)
    }
}

impl std::ops::BitOr for TextAttributes {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.with(rhs)
    }
}

/// Style combining colors and attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    /// Foreground (text) color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Text attributes (bold, italic, etc.).
    pub attributes: TextAttributes,
}

impl Style {
    /// Create an empty style.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attributes: TextAttributes::NONE,
        }
    }

    #[inline]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[inline]
    const fn attr(mut self, attr: TextAttributes) -> Self {
        self.attributes = self.attributes.with(attr);
        self
    }

    #[inline]
    pub const fn bold(self) -> Self {
        self.attr(TextAttributes::BOLD)
    }

    #[inline]
    pub const fn italic(self) -> Self {
        self.attr(TextAttributes::ITALIC)
    }

    /// Check if this style has any styling applied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }
}

/// A piece of text with a style, used to build [`StyledText`].
#[derive(Debug, Clone)]
pub struct Span<'a> {
    /// The text content.
    pub text: Cow<'a, str>,
    /// The style applied to this span.
    pub style: Style,
}

impl<'a> Span<'a> {
    /// Create a new unstyled span.
    #[inline]
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self::styled(text, Style::new())
    }

    /// Create a span with a style.
    #[inline]
    pub fn styled(text: impl Into<Cow<'a, str>>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.style = self.style.fg(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.style = self.style.bold();
        self
    }

    pub fn italic(mut self) -> Self {
        self.style = self.style.italic();
        self
    }
}

impl<'a> From<&'a str> for Span<'a> {
    fn from(s: &'a str) -> Self {
        Span::new(s)
    }
}

impl From<String> for Span<'static> {
    fn from(s: String) -> Self {
        Span::new(s)
    }
}

/// A style applied to the byte range `range` of a [`StyledText`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    /// Byte range in the owning text.
    pub range: Range<usize>,
    /// Style of every character in the range.
    pub style: Style,
}

/// Text with ordered, non-overlapping style runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledText {
    text: String,
    runs: SmallVec<[StyledRun; 4]>,
}

impl StyledText {
    /// Create empty styled text.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create styled text from a single span.
    pub fn from_span(span: Span<'_>) -> Self {
        let mut st = Self::new();
        st.push(span);
        st
    }

    /// Create unstyled text.
    pub fn plain(text: impl AsRef<str>) -> Self {
        let mut st = Self::new();
        st.push_styled(text.as_ref(), Style::new());
        st
    }

    /// Append a span.
    #[inline]
    pub fn push(&mut self, span: Span<'_>) {
        self.push_styled(&span.text, span.style);
    }

    /// Append unstyled text.
    #[inline]
    pub fn push_str(&mut self, text: &str) {
        self.push_styled(text, Style::new());
    }

    /// Append text with a style, merging into the last run when the style matches.
    pub fn push_styled(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }

        let start = self.text.len();
        self.text.push_str(text);
        let end = self.text.len();

        match self.runs.last_mut() {
            Some(last) if last.style == style => last.range.end = end,
            _ => self.runs.push(StyledRun {
                range: start..end,
                style,
            }),
        }
    }

    /// Append all runs of `other`.
    pub fn extend(&mut self, other: &StyledText) {
        for (text, style) in other.iter() {
            self.push_styled(text, style);
        }
    }

    /// The plain text content.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The style runs, in order.
    #[inline]
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Length of the text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over `(text, style)` pairs, one per run.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Style)> + '_ {
        self.runs
            .iter()
            .map(|run| (&self.text[run.range.clone()], run.style))
    }

    /// Style of the character starting at byte `offset`.
    pub fn style_at(&self, offset: usize) -> Option<Style> {
        let idx = self.runs.partition_point(|run| run.range.end <= offset);
        self.runs
            .get(idx)
            .filter(|run| run.range.contains(&offset))
            .map(|run| run.style)
    }

    /// Copy out the sub-range `range`, clipping style runs to its boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidRange`] if the range is reversed, past the
    /// end, or does not fall on character boundaries.
    ///
    /// ```
    /// use slidein_text::styled::{Span, StyledText};
    ///
    /// let st: StyledText = [Span::new("Hello").bold(), Span::new(" World")].into_iter().collect();
    /// let part = st.slice(3..8).unwrap();
    /// assert_eq!(part.text(), "lo Wo");
    /// assert_eq!(part.runs().len(), 2);
    /// ```
    pub fn slice(&self, range: Range<usize>) -> Result<StyledText> {
        let Range { start, end } = range;
        if start > end
            || end > self.text.len()
            || !self.text.is_char_boundary(start)
            || !self.text.is_char_boundary(end)
        {
            return Err(LayoutError::InvalidRange {
                start,
                end,
                len: self.text.len(),
            });
        }

        let mut out = StyledText::new();
        let first = self.runs.partition_point(|run| run.range.end <= start);
        for run in self.runs[first..]
            .iter()
            .take_while(|run| run.range.start < end)
        {
            let lo = run.range.start.max(start);
            let hi = run.range.end.min(end);
            out.push_styled(&self.text[lo..hi], run.style);
        }
        Ok(out)
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Add for StyledText {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.extend(&rhs);
        self
    }
}

impl<'a, S: Into<Span<'a>>> FromIterator<S> for StyledText {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut st = StyledText::new();
        for item in iter {
            st.push(item.into());
        }
        st
    }
}

impl From<&str> for StyledText {
    fn from(s: &str) -> Self {
        StyledText::plain(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    fn sample() -> StyledText {
        let mut st = StyledText::from_span(Span::new("Hello").bold().fg(RED));
        st.push_str(" big ");
        st.push(Span::new("World").italic());
        st
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::from_hex("#F00").unwrap().to_rgb_u8(), (255, 0, 0));
        assert_eq!(Color::from_hex("00ff00").unwrap().to_rgb_u8(), (0, 255, 0));
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#zzz").is_none());
    }

    #[test]
    fn test_text_attributes() {
        let attrs = TextAttributes::BOLD | TextAttributes::ITALIC;
        assert!(attrs.is_bold());
        assert!(attrs.is_italic());
        assert!(!attrs.is_underline());
        assert!(attrs.contains(TextAttributes::BOLD));
        assert!(!TextAttributes::NONE.is_bold());
    }

    #[test]
    fn test_runs_cover_text() {
        let st = sample();
        assert_eq!(st.text(), "Hello big World");
        let ranges: Vec<_> = st.runs().iter().map(|r| r.range.clone()).collect();
        assert_eq!(ranges, vec![0..5, 5..10, 10..15]);
    }

    #[test]
    fn test_adjacent_equal_styles_merge() {
        let st: StyledText = ["Hello", " ", "World"].into_iter().collect();
        assert_eq!(st.runs().len(), 1);

        let mut st = StyledText::plain("a");
        st.push(Span::new("b").bold());
        st.push(Span::new("c").bold());
        assert_eq!(st.runs().len(), 2);
    }

    #[test]
    fn test_empty_spans_are_dropped() {
        let mut st = StyledText::new();
        st.push(Span::new("").bold());
        assert!(st.is_empty());
        assert!(st.runs().is_empty());
    }

    #[test]
    fn test_style_at() {
        let st = sample();
        assert!(st.style_at(0).unwrap().attributes.is_bold());
        assert!(st.style_at(4).unwrap().attributes.is_bold());
        assert!(st.style_at(5).unwrap().is_empty());
        assert!(st.style_at(14).unwrap().attributes.is_italic());
        assert!(st.style_at(15).is_none());
    }

    #[test]
    fn test_slice_clips_runs() {
        let st = sample();
        let part = st.slice(3..12).unwrap();
        assert_eq!(part.text(), "lo big Wo");
        let styles: Vec<_> = part.iter().map(|(t, s)| (t, s.attributes)).collect();
        assert_eq!(
            styles,
            vec![
                ("lo", TextAttributes::BOLD),
                (" big ", TextAttributes::NONE),
                ("Wo", TextAttributes::ITALIC),
            ]
        );
        assert_eq!(part.runs()[0].style.fg, Some(RED));
    }

    #[test]
    fn test_slices_concatenate_to_source() {
        let st = sample();
        let rebuilt = st.slice(0..2).unwrap() + st.slice(2..7).unwrap() + st.slice(7..15).unwrap();
        assert_eq!(rebuilt, st);
    }

    #[test]
    fn test_slice_rejects_bad_ranges() {
        let st = StyledText::plain("日本");
        assert!(matches!(
            st.slice(1..3),
            Err(LayoutError::InvalidRange { start: 1, end: 3, len: 6 })
        ));
        assert!(st.slice(0..7).is_err());
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = st.slice(3..0);
        assert!(reversed.is_err());
        assert!(st.slice(3..3).unwrap().is_empty());
    }
}
