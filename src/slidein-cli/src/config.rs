//! Demo configuration loaded from TOML.
//!
//! Precedence is defaults, then the config file, then command-line flags.
//!
//! ```toml
//! [reveal]
//! delay_per_line_ms = 500
//! animation_duration_ms = 500
//!
//! [layout]
//! align = "center"
//! wrap = "word"
//! padding = 2
//!
//! [text]
//! headline = "LineByLineSlideInText"
//! body = " makes your text look more interesting..."
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use slidein_core::{RevealConfig, RevealError};
use slidein_text::{Color, Span, StyledText, TextAlign, WrapMode};
use thiserror::Error;

use crate::cli::Cli;

/// Accent used for the headline.
pub const ACCENT: Color = Color::rgb(0x62 as f32 / 255.0, 0.0, 0xEE as f32 / 255.0);

const SAMPLE_HEADLINE: &str = "LineByLineSlideInText";
const SAMPLE_BODY: &str = " makes your text look more interesting and fun to read in terminal \
apps. Instead of showing all your text at once, it shows one line at a time, with each new \
line sliding up from the bottom of the screen. This makes people more likely to read your \
text because it catches their eye and feels more alive than regular, static text. It's easy \
to add to any app and works with any kind of text you want to show. The smooth way the lines \
move in, one after another, creates a nice flow that helps people follow along with what \
you're saying. It's especially good for welcome screens, instructions, or any time you want \
people to pay extra attention to your words.";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration or text file.
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse TOML in '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value parsed but is out of range.
    #[error("Invalid configuration value for '{key}': {source}")]
    InvalidValue {
        key: &'static str,
        #[source]
        source: RevealError,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Reveal timing as written in the file.
///
/// Kept as raw signed milliseconds so that out-of-range values surface as
/// [`ConfigError::InvalidValue`] instead of a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSection {
    pub delay_per_line_ms: i64,
    pub animation_duration_ms: i64,
}

impl Default for RevealSection {
    fn default() -> Self {
        Self {
            delay_per_line_ms: slidein_core::reveal::DEFAULT_DELAY_PER_LINE_MS as i64,
            animation_duration_ms: slidein_core::reveal::DEFAULT_ANIMATION_DURATION_MS as i64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSection {
    pub align: TextAlign,
    pub wrap: WrapMode,
    /// Blank columns on each side of the text.
    pub padding: u16,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            align: TextAlign::Center,
            wrap: WrapMode::Word,
            padding: 2,
        }
    }
}

/// What to reveal: a bold accent headline followed by plain body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSection {
    pub headline: String,
    pub body: String,
}

impl Default for TextSection {
    fn default() -> Self {
        Self {
            headline: SAMPLE_HEADLINE.to_string(),
            body: SAMPLE_BODY.to_string(),
        }
    }
}

impl TextSection {
    pub fn styled(&self) -> StyledText {
        let mut text = StyledText::new();
        if !self.headline.is_empty() {
            text.push(Span::new(self.headline.as_str()).bold().fg(ACCENT));
        }
        text.push_str(&self.body);
        text
    }
}

/// Top-level demo configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub reveal: RevealSection,
    pub layout: LayoutSection,
    pub text: TextSection,
}

impl AppConfig {
    /// `<config dir>/slidein/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("slidein").join("config.toml"))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::from("<string>"),
            source: e,
        })
    }

    /// Load from `path`, or from [`default_path`](Self::default_path).
    ///
    /// An explicit path must exist. A missing default file means defaults.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply command-line overrides on top of file values.
    pub fn apply_cli(&mut self, cli: &Cli) -> ConfigResult<()> {
        if let Some(delay) = cli.delay_ms {
            self.reveal.delay_per_line_ms = delay;
        }
        if let Some(duration) = cli.duration_ms {
            self.reveal.animation_duration_ms = duration;
        }
        if let Some(align) = cli.align {
            self.layout.align = align.into();
        }
        if let Some(wrap) = cli.wrap {
            self.layout.wrap = wrap.into();
        }

        let replacement = match (&cli.text, &cli.file) {
            (Some(text), _) => Some(text.clone()),
            (None, Some(path)) => {
                Some(
                    std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                        path: path.clone(),
                        source: e,
                    })?,
                )
            }
            (None, None) => None,
        };
        if let Some(body) = replacement {
            self.text = TextSection {
                headline: String::new(),
                body,
            };
        }
        Ok(())
    }

    /// Validated reveal timing.
    pub fn reveal_config(&self) -> ConfigResult<RevealConfig> {
        RevealConfig::from_millis(
            self.reveal.delay_per_line_ms,
            self.reveal.animation_duration_ms,
        )
        .map_err(|source| ConfigError::InvalidValue {
            key: "reveal",
            source,
        })
    }
}
