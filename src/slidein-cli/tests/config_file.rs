//! Loading a config file and driving the demo from it.

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use pretty_assertions::assert_eq;
use slidein_cli::{App, AppConfig, Cli, ConfigError};
use slidein_core::LinePhase;
use slidein_core::animation::ManualClock;
use slidein_text::{TextAlign, WrapMode};

const CONFIG: &str = r#"
[reveal]
delay_per_line_ms = 200
animation_duration_ms = 400

[layout]
align = "start"
wrap = "char"
padding = 0

[text]
headline = ""
body = "abcdefghij"
"#;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn file_values_drive_the_reveal() {
    let file = write_config(CONFIG);
    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.layout.wrap, WrapMode::Char);

    let clock = ManualClock::new();
    let mut app = App::with_clock(&config, clock.clone()).unwrap();
    app.layout(4).unwrap();

    let texts: Vec<&str> = app
        .slide_in()
        .lines()
        .iter()
        .map(|l| l.text.text())
        .collect();
    assert_eq!(texts, vec!["abcd", "efgh", "ij"]);

    app.toggle();
    clock.advance(Duration::from_millis(400));
    let phases: Vec<LinePhase> = app.slide_in_mut().frame().iter().map(|l| l.phase).collect();
    assert_eq!(
        phases,
        vec![LinePhase::Revealed, LinePhase::Revealing, LinePhase::Revealing]
    );

    clock.advance(Duration::from_millis(400));
    app.slide_in_mut().frame();
    assert!(app.slide_in().is_complete());
}

#[test]
fn flags_override_the_file() {
    let file = write_config(CONFIG);
    let path = file.path().to_str().unwrap();
    let cli = Cli::try_parse_from([
        "slidein",
        "--config",
        path,
        "--duration-ms",
        "900",
        "--align",
        "center",
    ])
    .unwrap();

    let mut config = AppConfig::load(cli.config.as_deref()).unwrap();
    config.apply_cli(&cli).unwrap();

    let app = App::with_clock(&config, ManualClock::new()).unwrap();
    assert_eq!(app.delay_ms(), 200);
    assert_eq!(app.duration_ms(), 900);
    assert_eq!(app.align(), TextAlign::Center);
}

#[test]
fn negative_flag_is_reported_as_invalid_value() {
    let cli = Cli::try_parse_from(["slidein", "--delay-ms=-100"]).unwrap();
    let mut config = AppConfig::default();
    config.apply_cli(&cli).unwrap();

    let err = App::with_clock(&config, ManualClock::new()).err().unwrap();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert!(err.to_string().contains("delay_per_line"));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let file = write_config("[reveal\ndelay_per_line_ms = 1");
    let err = AppConfig::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}
