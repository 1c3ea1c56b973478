//! Cross-module properties of line splitting.
//!
//! These run the splitter over a realistic styled paragraph at many widths
//! and check the partition invariants rather than individual break points.

use pretty_assertions::assert_eq;
use slidein_text::{
    Color, LineSegment, LineSplitter, Span, StyledText, TextStyle, WrapMode, split_lines,
};

fn paragraph() -> StyledText {
    [
        Span::new("LineByLineSlideInText")
            .bold()
            .fg(Color::from_rgb_u8(0x62, 0x00, 0xEE)),
        Span::new(" makes your text look more interesting and fun to read. Instead of showing "),
        Span::new("all your text at once").italic(),
        Span::new(", it shows one line at a time, with each new line sliding up from the bottom.\n"),
        Span::new("日本語のテキストも折り返されます。"),
    ]
    .into_iter()
    .collect()
}

fn concat(lines: &[LineSegment]) -> StyledText {
    lines
        .iter()
        .fold(StyledText::new(), |acc, line| acc + line.text.clone())
}

#[test]
fn segments_concatenate_to_source() {
    let text = paragraph();
    for mode in [
        WrapMode::Word,
        WrapMode::WordBreakAll,
        WrapMode::Char,
        WrapMode::None,
    ] {
        let splitter = LineSplitter::new().with_mode(mode);
        for width in [1.0, 3.0, 7.5, 12.0, 20.0, 33.0, 80.0, 500.0] {
            let lines = splitter.split(&text, &TextStyle::terminal(), width).unwrap();
            assert_eq!(concat(&lines), text, "mode {mode:?}, width {width}");
        }
    }
}

#[test]
fn segments_are_contiguous_and_ordered() {
    let text = paragraph();
    let lines = split_lines(&text, &TextStyle::terminal(), 24.0).unwrap();
    assert!(lines.len() > 3);

    let mut expected_start = 0;
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line.index, i);
        assert_eq!(line.range.start, expected_start);
        assert_eq!(line.text.text(), &text.text()[line.range.clone()]);
        expected_start = line.range.end;
    }
    assert_eq!(expected_start, text.len());
}

#[test]
fn lines_fit_unless_a_single_word_overflows() {
    let text = paragraph();
    let width = 18.0;
    let lines = split_lines(&text, &TextStyle::terminal(), width).unwrap();

    for line in &lines {
        let trimmed = line.text.text().trim_end();
        if line.width > width {
            // Only a single unbreakable word may overflow.
            assert!(!trimmed.contains(' '), "overflowing line {trimmed:?}");
        }
    }
    assert_eq!(lines[0].text.text(), "LineByLineSlideInText ");
}

#[test]
fn word_break_all_never_overflows() {
    let text = paragraph();
    let splitter = LineSplitter::new().with_mode(WrapMode::WordBreakAll);
    for width in [4.0, 9.0, 18.0] {
        for line in splitter.split(&text, &TextStyle::terminal(), width).unwrap() {
            assert!(line.width <= width, "{:?} is {} wide", line.text.text(), line.width);
        }
    }
}

#[test]
fn style_runs_survive_the_split() {
    let text = paragraph();
    let lines = split_lines(&text, &TextStyle::terminal(), 10.0).unwrap();

    // The bold headline overflows on its own line and keeps its color.
    let headline = &lines[0];
    let (run_text, style) = headline.text.iter().next().unwrap();
    assert_eq!(run_text, "LineByLineSlideInText");
    assert!(style.attributes.is_bold());
    assert_eq!(style.fg, Some(Color::from_rgb_u8(0x62, 0x00, 0xEE)));

    // Every italic fragment still reads as part of the italic phrase.
    let italic: String = lines
        .iter()
        .flat_map(|l| l.text.iter())
        .filter(|(_, s)| s.attributes.is_italic())
        .map(|(t, _)| t)
        .collect();
    assert_eq!(italic, "all your text at once");
    let italic_lines = lines
        .iter()
        .filter(|l| l.text.iter().any(|(_, s)| s.attributes.is_italic()))
        .count();
    assert!(italic_lines > 1);
}

#[test]
fn resplitting_on_width_change_is_deterministic() {
    let text = paragraph();
    let style = TextStyle::default();
    let narrow = split_lines(&text, &style, 200.0).unwrap();
    let wide = split_lines(&text, &style, 400.0).unwrap();
    let narrow_again = split_lines(&text, &style, 200.0).unwrap();

    assert!(narrow.len() > wide.len());
    assert_eq!(narrow, narrow_again);
}
