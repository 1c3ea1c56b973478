//! Terminal rendering.
//!
//! One terminal row is one line height. A line showing no more than half
//! of its row is still below its slot and clipped; past that it is drawn
//! dimmed until it settles.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use slidein_core::LinePhase;
use slidein_core::animation::Clock;
use slidein_core::reveal::SLIDER_RANGE_MS;
use slidein_text::{StyledText, TextAlign};

use crate::app::App;
use crate::config::ACCENT;

/// Lines showing this fraction of their row or less are clipped.
pub const MIN_VISIBLE_FRACTION: f32 = 0.5;

const DIM: Color = Color::DarkGray;
const SLIDER: Color = Color::Rgb(0x95, 0x75, 0xCD);

fn accent() -> Color {
    let (r, g, b) = ACCENT.to_rgb_u8();
    Color::Rgb(r, g, b)
}

/// Draw the whole demo.
pub fn render<C: Clock>(frame: &mut Frame, app: &mut App<C>) {
    let [title, body, controls] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(4),
    ])
    .areas(frame.area());

    render_title(frame, title);
    render_body(frame, body, app);
    render_controls(frame, controls, app);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " SlideIn",
            Style::default().fg(accent()).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · line-by-line text reveal", Style::default().fg(DIM)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_body<C: Clock>(frame: &mut Frame, area: Rect, app: &mut App<C>) {
    let pad = app.padding().min(area.width / 2);
    let inner = Rect {
        x: area.x + pad,
        width: area.width.saturating_sub(pad * 2).max(1),
        ..area
    };
    if inner.height == 0 {
        return;
    }
    if let Err(e) = app.layout(area.width) {
        tracing::warn!("layout failed: {e}");
        return;
    }

    let line_height = app.slide_in().style().line_height;
    let lines = app.slide_in_mut().frame();

    // Keep the newest moving line on screen once the text outgrows the area.
    let height = usize::from(inner.height);
    let scroll = lines
        .iter()
        .rposition(|line| line.phase != LinePhase::Hidden)
        .map_or(0, |newest| (newest + 1).saturating_sub(height));

    for line in lines.iter().skip(scroll).take(height) {
        let shown = line.visible_fraction(line_height);
        if shown <= MIN_VISIBLE_FRACTION {
            continue;
        }
        let row = inner.y + (line.index - scroll) as u16;
        let indent = (line.x_offset.round() as u16).min(inner.width.saturating_sub(1));
        let slot = Rect::new(inner.x + indent, row, inner.width - indent, 1);
        let dim = shown < 1.0;
        frame.render_widget(Paragraph::new(to_line(line.text, dim)), slot);
    }
}

fn render_controls<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(DIM))
        .title(Span::styled(
            " Animation Controls ",
            Style::default().fg(accent()).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bar_width = usize::from(inner.width.saturating_sub(34).min(40));
    let button = if app.is_running() {
        "Reset Animation"
    } else {
        "Start Animation"
    };
    let rows = vec![
        slider_row("Delay between lines", app.delay_ms(), "←/→", bar_width),
        slider_row("Animation duration ", app.duration_ms(), "↓/↑", bar_width),
        Line::from(vec![
            Span::styled(
                format!(" [Space] {button} "),
                Style::default().fg(Color::White).bg(accent()),
            ),
            Span::styled(
                format!("  a align ({})  q quit", align_label(app.align())),
                Style::default().fg(DIM),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(rows), inner);
}

fn slider_row(label: &str, value_ms: u64, keys: &str, bar_width: usize) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!(" {label}: {value_ms:>4} ms ")),
        Span::styled(slider_bar(value_ms, bar_width), Style::default().fg(SLIDER)),
        Span::styled(format!(" {keys}"), Style::default().fg(DIM)),
    ])
}

fn align_label(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Start => "start",
        TextAlign::Center => "center",
        TextAlign::End => "end",
    }
}

/// A horizontal slider of `width` cells with the thumb at `value_ms`.
pub fn slider_bar(value_ms: u64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let (min, max) = (*SLIDER_RANGE_MS.start(), *SLIDER_RANGE_MS.end());
    let fraction = (value_ms.clamp(min, max) - min) as f64 / (max - min) as f64;
    let thumb = (fraction * (width - 1) as f64).round() as usize;

    let mut bar = "━".repeat(thumb);
    bar.push('●');
    bar.push_str(&"─".repeat(width - 1 - thumb));
    bar
}

/// Convert a styled line into ratatui spans, dropping its line terminator.
pub fn to_line(text: &StyledText, dim: bool) -> Line<'_> {
    let spans: Vec<Span<'_>> = text
        .iter()
        .map(|(run, style)| {
            let mut style = to_style(style);
            if dim {
                style = style.add_modifier(Modifier::DIM);
            }
            Span::styled(run.trim_end_matches(['\n', '\r']), style)
        })
        .filter(|span| !span.content.is_empty())
        .collect();
    Line::from(spans)
}

fn to_style(style: slidein_text::Style) -> Style {
    let mut out = Style::default();
    if let Some(fg) = style.fg {
        let (r, g, b) = fg.to_rgb_u8();
        out = out.fg(Color::Rgb(r, g, b));
    }
    if let Some(bg) = style.bg {
        let (r, g, b) = bg.to_rgb_u8();
        out = out.bg(Color::Rgb(r, g, b));
    }
    let attrs = style.attributes;
    for (on, modifier) in [
        (attrs.is_bold(), Modifier::BOLD),
        (attrs.is_dim(), Modifier::DIM),
        (attrs.is_italic(), Modifier::ITALIC),
        (attrs.is_underline(), Modifier::UNDERLINED),
        (attrs.is_strikethrough(), Modifier::CROSSED_OUT),
    ] {
        if on {
            out = out.add_modifier(modifier);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, TextSection};
    use pretty_assertions::assert_eq;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use slidein_core::animation::ManualClock;
    use slidein_text::Span as TextSpan;
    use std::time::Duration;

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
    }

    fn demo(body: &str) -> (App<ManualClock>, ManualClock) {
        let mut config = AppConfig::default();
        config.layout.align = TextAlign::Start;
        config.layout.padding = 0;
        config.text = TextSection {
            headline: String::new(),
            body: body.to_string(),
        };
        let clock = ManualClock::new();
        (App::with_clock(&config, clock.clone()).unwrap(), clock)
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App<ManualClock>) -> Buffer {
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_lines_appear_in_order() {
        let (mut app, clock) = demo("first\nsecond\nthird");
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();

        let buffer = draw(&mut terminal, &mut app);
        assert!(row(&buffer, 2).trim().is_empty());

        app.toggle();
        // Line 1 is 300 ms into its slide: most of its row shows, drawn dim.
        clock.advance(Duration::from_millis(800));
        let buffer = draw(&mut terminal, &mut app);
        assert!(row(&buffer, 2).starts_with("first"));
        assert!(row(&buffer, 3).starts_with("second"));
        assert!(row(&buffer, 4).trim().is_empty());

        clock.advance(Duration::from_millis(1000));
        let buffer = draw(&mut terminal, &mut app);
        assert!(row(&buffer, 4).starts_with("third"));
    }

    #[test]
    fn test_half_visible_line_is_clipped_then_dimmed() {
        let (mut app, clock) = demo("solo");
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        app.toggle();

        // 100 ms in, the line shows about a third of its row.
        clock.advance(Duration::from_millis(100));
        let buffer = draw(&mut terminal, &mut app);
        assert!(row(&buffer, 2).trim().is_empty());

        clock.advance(Duration::from_millis(150));
        let buffer = draw(&mut terminal, &mut app);
        assert!(row(&buffer, 2).starts_with("solo"));
        assert!(buffer[(0, 2)].modifier.contains(Modifier::DIM));

        clock.advance(Duration::from_millis(250));
        let buffer = draw(&mut terminal, &mut app);
        assert!(row(&buffer, 2).starts_with("solo"));
        assert!(!buffer[(0, 2)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_controls_show_timing_and_button() {
        let (mut app, _) = demo("hello");
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let buffer = draw(&mut terminal, &mut app);

        let controls: Vec<String> = (8..12).map(|y| row(&buffer, y)).collect();
        assert!(controls[0].contains("Animation Controls"));
        assert!(controls[1].contains("Delay between lines:  500 ms"));
        assert!(controls[2].contains("Animation duration :  500 ms"));
        assert!(controls[3].contains("Start Animation"));

        app.toggle();
        let buffer = draw(&mut terminal, &mut app);
        assert!(row(&buffer, 11).contains("Reset Animation"));
    }

    #[test]
    fn test_long_text_scrolls_to_newest_line() {
        let body: String = (0..20).map(|i| format!("line {i}\n")).collect();
        let (mut app, clock) = demo(&body);
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

        app.toggle();
        clock.advance(Duration::from_secs(60));
        let buffer = draw(&mut terminal, &mut app);
        // Body rows 2..6 show the last four laid-out lines.
        assert!(row(&buffer, 5).trim().is_empty());
        assert!(row(&buffer, 4).starts_with("line 19"));
    }

    #[test]
    fn test_slider_bar() {
        assert_eq!(slider_bar(100, 5), "●────");
        assert_eq!(slider_bar(1000, 5), "━━━━●");
        assert_eq!(slider_bar(550, 5), "━━●──");
        assert_eq!(slider_bar(500, 0), "");
        assert_eq!(slider_bar(500, 10).chars().count(), 10);
    }

    #[test]
    fn test_to_line_keeps_styles() {
        let text: StyledText = [
            TextSpan::new("Bold").bold().fg(ACCENT),
            TextSpan::new(" plain\n"),
        ]
        .into_iter()
        .collect();

        let line = to_line(&text, false);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "Bold");
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(line.spans[0].style.fg, Some(accent()));
        assert_eq!(line.spans[1].content, " plain");

        let dimmed = to_line(&text, true);
        assert!(dimmed.spans[1].style.add_modifier.contains(Modifier::DIM));
    }
}
