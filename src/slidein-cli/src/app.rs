//! Demo state and input handling.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use slidein_core::animation::{Clock, SystemClock};
use slidein_core::reveal::{SLIDER_RANGE_MS, SLIDER_STEP_MS};
use slidein_core::{RevealConfig, SlideInText};
use slidein_text::{LineSplitter, MetricsMeasurer, TextAlign, TextStyle};
use tracing::{debug, info};

use crate::config::{AppConfig, ConfigResult};

/// The two timing controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    Delay,
    Duration,
}

/// Move a slider value to the adjacent stop in the given direction.
///
/// Stops are [`SLIDER_STEP_MS`] apart across [`SLIDER_RANGE_MS`]. Values off
/// the grid move to the next stop; values outside the range move to the
/// nearest end when stepped toward it.
pub fn step_slider(value_ms: u64, up: bool) -> u64 {
    let (min, max) = (*SLIDER_RANGE_MS.start(), *SLIDER_RANGE_MS.end());
    if value_ms < min {
        return if up { min } else { value_ms };
    }
    if value_ms > max {
        return if up { value_ms } else { max };
    }

    let offset = value_ms - min;
    let stop = if up {
        (offset / SLIDER_STEP_MS + 1) * SLIDER_STEP_MS
    } else {
        offset.div_ceil(SLIDER_STEP_MS).saturating_sub(1) * SLIDER_STEP_MS
    };
    (min + stop).min(max)
}

fn as_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Everything the demo shows, independent of the terminal.
pub struct App<C = SystemClock> {
    slide_in: SlideInText<MetricsMeasurer, C>,
    padding: u16,
    should_quit: bool,
}

impl App<SystemClock> {
    pub fn new(config: &AppConfig) -> ConfigResult<Self> {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(config: &AppConfig, clock: C) -> ConfigResult<Self> {
        let splitter = LineSplitter::new().with_mode(config.layout.wrap);
        let slide_in = SlideInText::with_parts(
            config.text.styled(),
            TextStyle::terminal(),
            splitter,
            clock,
        )
        .with_config(config.reveal_config()?)
        .with_align(config.layout.align);

        Ok(Self {
            slide_in,
            padding: config.layout.padding,
            should_quit: false,
        })
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle(),
            KeyCode::Left => self.step(Slider::Delay, false),
            KeyCode::Right => self.step(Slider::Delay, true),
            KeyCode::Down => self.step(Slider::Duration, false),
            KeyCode::Up => self.step(Slider::Duration, true),
            KeyCode::Char('a') => {
                let align = self.slide_in.align().cycle();
                self.slide_in.set_align(align);
                debug!(?align, "alignment changed");
            }
            _ => {}
        }
    }

    /// Start when idle, reset when running.
    pub fn toggle(&mut self) {
        let running = self.slide_in.toggle();
        info!(running, "reveal toggled");
    }

    /// Move one slider by one stop. Restarts a running reveal.
    pub fn step(&mut self, slider: Slider, up: bool) {
        let current = self.slide_in.config();
        let next = match slider {
            Slider::Delay => current.with_delay_per_line(Duration::from_millis(step_slider(
                as_millis(current.delay_per_line()),
                up,
            ))),
            Slider::Duration => current.with_animation_duration(Duration::from_millis(
                step_slider(as_millis(current.animation_duration()), up),
            )),
        };
        if next != current {
            debug!(
                delay_ms = as_millis(next.delay_per_line()),
                duration_ms = as_millis(next.animation_duration()),
                "timing changed"
            );
            self.slide_in.set_config(next);
        }
    }

    /// Lay the text out for a body area `width` columns wide.
    pub fn layout(&mut self, width: u16) -> slidein_core::Result<()> {
        let inner = width.saturating_sub(self.padding.saturating_mul(2)).max(1);
        self.slide_in.layout(f32::from(inner))?;
        Ok(())
    }

    pub fn slide_in(&self) -> &SlideInText<MetricsMeasurer, C> {
        &self.slide_in
    }

    pub fn slide_in_mut(&mut self) -> &mut SlideInText<MetricsMeasurer, C> {
        &mut self.slide_in
    }

    pub fn config(&self) -> RevealConfig {
        self.slide_in.config()
    }

    pub fn delay_ms(&self) -> u64 {
        as_millis(self.config().delay_per_line())
    }

    pub fn duration_ms(&self) -> u64 {
        as_millis(self.config().animation_duration())
    }

    pub fn align(&self) -> TextAlign {
        self.slide_in.align()
    }

    pub fn padding(&self) -> u16 {
        self.padding
    }

    pub fn is_running(&self) -> bool {
        self.slide_in.is_running()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
