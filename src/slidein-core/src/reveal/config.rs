//! Reveal timing configuration.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::RevealError;

/// Default gap between consecutive line starts, in milliseconds.
pub const DEFAULT_DELAY_PER_LINE_MS: u64 = 500;

/// Default length of one line's slide, in milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 500;

/// Range offered by interactive timing controls, in milliseconds.
pub const SLIDER_RANGE_MS: RangeInclusive<u64> = 100..=1000;

/// Number of intermediate stops between the ends of [`SLIDER_RANGE_MS`].
pub const SLIDER_STEPS: u64 = 9;

/// Distance between adjacent slider stops, in milliseconds.
pub const SLIDER_STEP_MS: u64 =
    (*SLIDER_RANGE_MS.end() - *SLIDER_RANGE_MS.start()) / (SLIDER_STEPS + 1);

/// Timing of a staggered reveal.
///
/// Line `i` begins sliding at `i * delay_per_line` after the reveal starts
/// and takes `animation_duration` to settle.
///
/// Serialized as `delay_per_line_ms` / `animation_duration_ms`; both are
/// validated on deserialization.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use slidein_core::RevealConfig;
///
/// let config = RevealConfig::from_millis(300, 600).unwrap();
/// assert_eq!(config.start_delay(2), Duration::from_millis(600));
/// assert_eq!(config.total_duration(3), Duration::from_millis(1200));
///
/// assert!(RevealConfig::from_millis(-1, 600).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RevealConfigMillis", into = "RevealConfigMillis")]
pub struct RevealConfig {
    delay_per_line: Duration,
    animation_duration: Duration,
}

impl RevealConfig {
    pub const fn new(delay_per_line: Duration, animation_duration: Duration) -> Self {
        Self {
            delay_per_line,
            animation_duration,
        }
    }

    /// Build from signed millisecond values.
    ///
    /// # Errors
    ///
    /// Returns [`RevealError::InvalidRevealConfig`] for negative values.
    pub fn from_millis(
        delay_per_line_ms: i64,
        animation_duration_ms: i64,
    ) -> Result<Self, RevealError> {
        Ok(Self::new(
            millis("delay_per_line", delay_per_line_ms)?,
            millis("animation_duration", animation_duration_ms)?,
        ))
    }

    /// Build from fractional seconds.
    ///
    /// # Errors
    ///
    /// Returns [`RevealError::InvalidRevealConfig`] for negative, infinite
    /// or NaN values.
    pub fn from_secs_f64(
        delay_per_line: f64,
        animation_duration: f64,
    ) -> Result<Self, RevealError> {
        Ok(Self::new(
            secs("delay_per_line", delay_per_line)?,
            secs("animation_duration", animation_duration)?,
        ))
    }

    pub fn delay_per_line(&self) -> Duration {
        self.delay_per_line
    }

    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    pub fn with_delay_per_line(mut self, delay_per_line: Duration) -> Self {
        self.delay_per_line = delay_per_line;
        self
    }

    pub fn with_animation_duration(mut self, animation_duration: Duration) -> Self {
        self.animation_duration = animation_duration;
        self
    }

    /// When line `index` starts moving, relative to the reveal start.
    pub fn start_delay(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_per_line.saturating_mul(index)
    }

    /// When the last of `line_count` lines settles. Zero for no lines.
    pub fn total_duration(&self, line_count: usize) -> Duration {
        match line_count {
            0 => Duration::ZERO,
            n => self
                .start_delay(n - 1)
                .saturating_add(self.animation_duration),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_DELAY_PER_LINE_MS),
            Duration::from_millis(DEFAULT_ANIMATION_DURATION_MS),
        )
    }
}

fn millis(field: &'static str, value: i64) -> Result<Duration, RevealError> {
    u64::try_from(value)
        .map(Duration::from_millis)
        .map_err(|_| RevealError::InvalidRevealConfig {
            field,
            value: value as f64,
        })
}

fn secs(field: &'static str, value: f64) -> Result<Duration, RevealError> {
    Duration::try_from_secs_f64(value)
        .map_err(|_| RevealError::InvalidRevealConfig { field, value })
}

#[derive(Serialize, Deserialize)]
struct RevealConfigMillis {
    #[serde(default = "default_delay_ms")]
    delay_per_line_ms: i64,
    #[serde(default = "default_duration_ms")]
    animation_duration_ms: i64,
}

fn default_delay_ms() -> i64 {
    DEFAULT_DELAY_PER_LINE_MS as i64
}

fn default_duration_ms() -> i64 {
    DEFAULT_ANIMATION_DURATION_MS as i64
}

impl TryFrom<RevealConfigMillis> for RevealConfig {
    type Error = RevealError;

    fn try_from(raw: RevealConfigMillis) -> Result<Self, Self::Error> {
        Self::from_millis(raw.delay_per_line_ms, raw.animation_duration_ms)
    }
}

impl From<RevealConfig> for RevealConfigMillis {
    fn from(config: RevealConfig) -> Self {
        let ms = |d: Duration| i64::try_from(d.as_millis()).unwrap_or(i64::MAX);
        Self {
            delay_per_line_ms: ms(config.delay_per_line),
            animation_duration_ms: ms(config.animation_duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = RevealConfig::default();
        assert_eq!(config.delay_per_line(), Duration::from_millis(500));
        assert_eq!(config.animation_duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_from_millis_rejects_negative() {
        assert_eq!(
            RevealConfig::from_millis(-1, 500),
            Err(RevealError::InvalidRevealConfig {
                field: "delay_per_line",
                value: -1.0
            })
        );
        assert_eq!(
            RevealConfig::from_millis(500, -250),
            Err(RevealError::InvalidRevealConfig {
                field: "animation_duration",
                value: -250.0
            })
        );
        assert!(RevealConfig::from_millis(0, 0).is_ok());
    }

    #[test]
    fn test_from_secs_rejects_non_finite() {
        assert!(RevealConfig::from_secs_f64(f64::NAN, 0.5).is_err());
        assert!(RevealConfig::from_secs_f64(0.5, f64::INFINITY).is_err());
        assert!(RevealConfig::from_secs_f64(-0.1, 0.5).is_err());

        let config = RevealConfig::from_secs_f64(0.25, 1.5).unwrap();
        assert_eq!(config.delay_per_line(), Duration::from_millis(250));
        assert_eq!(config.animation_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn test_start_delay_and_total() {
        let config = RevealConfig::default();
        assert_eq!(config.start_delay(0), Duration::ZERO);
        assert_eq!(config.start_delay(3), Duration::from_millis(1500));
        assert_eq!(config.total_duration(0), Duration::ZERO);
        assert_eq!(config.total_duration(1), Duration::from_millis(500));
        assert_eq!(config.total_duration(3), Duration::from_millis(1500));
    }

    #[test]
    fn test_start_delay_saturates() {
        let config = RevealConfig::new(Duration::MAX, Duration::ZERO);
        assert_eq!(config.start_delay(usize::MAX), Duration::MAX);
        assert_eq!(config.total_duration(usize::MAX), Duration::MAX);
    }

    #[test]
    fn test_slider_constants() {
        assert_eq!(SLIDER_STEP_MS, 90);
        let stops = (*SLIDER_RANGE_MS.end() - *SLIDER_RANGE_MS.start()) / SLIDER_STEP_MS + 1;
        assert_eq!(stops, SLIDER_STEPS + 2);
        assert!(SLIDER_RANGE_MS.contains(&DEFAULT_DELAY_PER_LINE_MS));
    }

    #[test]
    fn test_serde_uses_millis() {
        let config: RevealConfig =
            toml::from_str("delay_per_line_ms = 200\nanimation_duration_ms = 800").unwrap();
        assert_eq!(config, RevealConfig::from_millis(200, 800).unwrap());

        let encoded = toml::to_string(&config).unwrap();
        assert!(encoded.contains("delay_per_line_ms = 200"));

        let partial: RevealConfig = toml::from_str("animation_duration_ms = 100").unwrap();
        assert_eq!(partial.delay_per_line(), Duration::from_millis(500));
    }

    #[test]
    fn test_serde_rejects_negative() {
        let err = toml::from_str::<RevealConfig>("delay_per_line_ms = -10").unwrap_err();
        assert!(err.to_string().contains("delay_per_line"));
    }
}
