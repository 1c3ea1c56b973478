//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use slidein_text::{TextAlign, WrapMode};

/// Log verbosity for the log file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages and above (default)
    #[default]
    Info,
    /// Debug messages and above
    Debug,
    /// Everything, including per-line phase changes
    Trace,
}

impl LogLevel {
    /// Convert to a tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Horizontal alignment of the revealed lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlignArg {
    Start,
    Center,
    End,
}

impl From<AlignArg> for TextAlign {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Start => TextAlign::Start,
            AlignArg::Center => TextAlign::Center,
            AlignArg::End => TextAlign::End,
        }
    }
}

/// Where lines may break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WrapArg {
    /// Break between words; long words stay whole
    Word,
    /// Break between words, splitting words that do not fit
    WordBreakAll,
    /// Break between any two characters
    Char,
    /// Break only at newlines
    None,
}

impl From<WrapArg> for WrapMode {
    fn from(arg: WrapArg) -> Self {
        match arg {
            WrapArg::Word => WrapMode::Word,
            WrapArg::WordBreakAll => WrapMode::WordBreakAll,
            WrapArg::Char => WrapMode::Char,
            WrapArg::None => WrapMode::None,
        }
    }
}

/// SlideIn - reveal text one line at a time
///
/// Each visual line slides up into place after the one before it. Space
/// starts or resets the reveal; arrow keys adjust the timing.
#[derive(Parser, Debug, Default)]
#[command(name = "slidein", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to <config dir>/slidein/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Delay between consecutive lines, in milliseconds
    #[arg(long, value_name = "MS", help_heading = "Animation")]
    pub delay_ms: Option<i64>,

    /// Duration of each line's slide, in milliseconds
    #[arg(long, value_name = "MS", help_heading = "Animation")]
    pub duration_ms: Option<i64>,

    /// Start the reveal immediately
    #[arg(long, help_heading = "Animation")]
    pub autostart: bool,

    /// Horizontal alignment of each line
    #[arg(long, value_enum, help_heading = "Layout")]
    pub align: Option<AlignArg>,

    /// Line breaking strategy
    #[arg(long, value_enum, help_heading = "Layout")]
    pub wrap: Option<WrapArg>,

    /// Text to reveal instead of the built-in sample
    #[arg(long, short = 't', conflicts_with = "file", help_heading = "Content")]
    pub text: Option<String>,

    /// Read the text to reveal from a file
    #[arg(long, short = 'f', value_name = "PATH", help_heading = "Content")]
    pub file: Option<PathBuf>,

    /// Write trace-level logs to ./slidein-debug.log
    #[arg(long, help_heading = "Logging")]
    pub debug: bool,

    /// Log level for the log file
    #[arg(long, value_enum, env = "SLIDEIN_LOG_LEVEL", help_heading = "Logging")]
    pub log_level: Option<LogLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "slidein",
            "--delay-ms",
            "300",
            "--duration-ms",
            "700",
            "--align",
            "end",
            "--wrap",
            "word-break-all",
            "--autostart",
        ])
        .unwrap();

        assert_eq!(cli.delay_ms, Some(300));
        assert_eq!(cli.duration_ms, Some(700));
        assert_eq!(cli.align.map(TextAlign::from), Some(TextAlign::End));
        assert_eq!(cli.wrap.map(WrapMode::from), Some(WrapMode::WordBreakAll));
        assert!(cli.autostart);
        assert!(!cli.debug);
    }

    #[test]
    fn test_negative_delay_parses_for_validation_later() {
        let cli = Cli::try_parse_from(["slidein", "--delay-ms=-5"]).unwrap();
        assert_eq!(cli.delay_ms, Some(-5));
    }

    #[test]
    fn test_text_conflicts_with_file() {
        let result = Cli::try_parse_from(["slidein", "--text", "hi", "--file", "x.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::default().as_filter_str(), "info");
        assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
    }
}
