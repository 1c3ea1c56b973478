//! Grapheme cluster utilities for line measurement.
//!
//! Line breaking walks text one user-perceived character at a time, so this
//! module pairs every grapheme with its byte offset and its display width in
//! columns. Widths follow terminal conventions: CJK ideographs and emoji
//! sequences take two columns, combining marks and joiners take none.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// A grapheme cluster together with its position and display width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphemeInfo<'a> {
    /// The grapheme cluster string slice.
    pub grapheme: &'a str,
    /// The byte offset in the original string.
    pub byte_offset: usize,
    /// The display width of this grapheme in columns.
    pub width: usize,
}

impl GraphemeInfo<'_> {
    /// Byte offset just past this grapheme.
    #[inline]
    pub fn end_offset(&self) -> usize {
        self.byte_offset + self.grapheme.len()
    }
}

/// Iterator over graphemes with their display information.
#[derive(Debug, Clone)]
pub struct GraphemeIterator<'a> {
    inner: unicode_segmentation::GraphemeIndices<'a>,
}

impl<'a> Iterator for GraphemeIterator<'a> {
    type Item = GraphemeInfo<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (byte_offset, grapheme) = self.inner.next()?;
        Some(GraphemeInfo {
            grapheme,
            byte_offset,
            width: grapheme_display_width(grapheme),
        })
    }
}

/// Returns an iterator over grapheme clusters with their display information.
///
/// # Example
///
/// ```
/// use slidein_text::grapheme::graphemes;
///
/// let widths: Vec<_> = graphemes("a世").map(|g| g.width).collect();
/// assert_eq!(widths, vec![1, 2]);
/// ```
#[inline]
pub fn graphemes(text: &str) -> GraphemeIterator<'_> {
    GraphemeIterator {
        inner: text.grapheme_indices(true),
    }
}

/// Calculate the display width of a single grapheme cluster.
///
/// Line terminators measure zero; tabs measure one column.
///
/// ```
/// use slidein_text::grapheme::grapheme_display_width;
///
/// assert_eq!(grapheme_display_width("a"), 1);
/// assert_eq!(grapheme_display_width("中"), 2);
/// assert_eq!(grapheme_display_width("\n"), 0);
/// ```
pub fn grapheme_display_width(grapheme: &str) -> usize {
    if grapheme.is_empty() || is_line_terminator(grapheme) {
        return 0;
    }

    if grapheme == "\t" {
        return 1;
    }

    if is_emoji_sequence(grapheme) {
        return 2;
    }

    // The base character decides the width; combining marks add nothing.
    grapheme
        .chars()
        .filter(|&c| !is_zero_width_char(c))
        .filter_map(UnicodeWidthChar::width)
        .max()
        .unwrap_or(0)
}

/// Check if a character never advances the pen.
#[inline]
pub fn is_zero_width_char(c: char) -> bool {
    matches!(
        c,
        '\u{200B}' // Zero Width Space
        | '\u{200C}' // Zero Width Non-Joiner
        | '\u{200D}' // Zero Width Joiner
        | '\u{FEFF}' // BOM
        | '\u{FE00}'..='\u{FE0F}'
        | '\u{E0100}'..='\u{E01EF}'
        | '\u{0300}'..='\u{036F}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{FE20}'..='\u{FE2F}'
    ) || c.width() == Some(0)
}

/// Check if a grapheme ends a line unconditionally.
#[inline]
pub fn is_line_terminator(grapheme: &str) -> bool {
    matches!(grapheme, "\n" | "\r\n")
}

/// Check if a grapheme is a soft break opportunity.
///
/// Whitespace allows a break after itself, except for the no-break family,
/// which glues its neighbours together.
pub fn is_break_opportunity(grapheme: &str) -> bool {
    let Some(c) = grapheme.chars().next() else {
        return false;
    };

    c.is_whitespace()
        && !is_line_terminator(grapheme)
        && !matches!(
            c,
            '\u{00A0}' // NBSP
            | '\u{202F}' // Narrow NBSP
            | '\u{2007}' // Figure Space
            | '\u{2060}' // Word Joiner
        )
}

/// Check if a grapheme belongs to a script that may break between any two
/// characters (CJK ideographs, kana, hangul).
pub fn is_cjk(grapheme: &str) -> bool {
    grapheme.chars().next().is_some_and(|c| {
        matches!(c as u32,
            0x4E00..=0x9FFF
            | 0x3400..=0x4DBF
            | 0x20000..=0x2A6DF
            | 0xF900..=0xFAFF
            | 0x3040..=0x309F
            | 0x30A0..=0x30FF
            | 0xAC00..=0xD7AF
        )
    })
}

fn is_emoji_sequence(grapheme: &str) -> bool {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest: Vec<char> = chars.collect();
    if rest.is_empty() {
        return false;
    }

    // ZWJ sequences, VS16 presentation and keycaps.
    if rest.iter().any(|&c| matches!(c, '\u{200D}' | '\u{FE0F}' | '\u{20E3}')) {
        return true;
    }

    // Flags are pairs of regional indicators.
    if is_regional_indicator(first) && rest.iter().all(|&c| is_regional_indicator(c)) {
        return true;
    }

    is_emoji_base(first)
}

#[inline]
fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

fn is_emoji_base(c: char) -> bool {
    matches!(
        c as u32,
        0x1F300..=0x1F5FF
        | 0x1F600..=0x1F64F
        | 0x1F680..=0x1F6FF
        | 0x1F900..=0x1F9FF
        | 0x1FA00..=0x1FAFF
        | 0x2600..=0x26FF
        | 0x2700..=0x27BF
    )
}
