//! Terminal setup and the frame loop.

use std::io::{self, Stdout, Write, stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::time::MissedTickBehavior;

use crate::app::App;
use crate::ui;

/// Redraw period, about 60 frames per second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Undoes whatever terminal setup has happened so far when dropped.
///
/// Each flag is set only after its step succeeded, so a failure halfway
/// through setup restores exactly what was changed. Restoring clears the
/// flags, which makes a second restore a no-op.
#[derive(Debug, Default)]
pub struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard {
    /// Enable raw mode and switch to the alternate screen.
    pub fn enter() -> io::Result<Self> {
        let mut guard = Self::default();
        crossterm::terminal::enable_raw_mode()?;
        guard.raw_mode = true;
        crossterm::execute!(stdout(), EnterAlternateScreen)?;
        guard.alternate_screen = true;
        Ok(guard)
    }

    /// Restore the terminal, writing escape sequences to `out`.
    pub fn restore_to(&mut self, out: &mut impl Write) -> io::Result<()> {
        if std::mem::take(&mut self.raw_mode) {
            crossterm::terminal::disable_raw_mode()?;
        }
        if std::mem::take(&mut self.alternate_screen) {
            crossterm::execute!(out, LeaveAlternateScreen, crossterm::cursor::Show)?;
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.raw_mode || self.alternate_screen
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore_to(&mut stdout()) {
            tracing::warn!("failed to restore terminal: {e}");
        }
    }
}

/// Restore the terminal before the default hook prints the panic message.
fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
        original_hook(info);
    }));
}

/// Take over the terminal, run until the user quits, then restore it.
pub async fn run(app: &mut App) -> Result<()> {
    install_panic_hook();
    let mut guard = TerminalGuard::enter()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run_loop(&mut terminal, app).await;

    guard.restore_to(terminal.backend_mut())?;
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while !app.should_quit() {
        tokio::select! {
            _ = frames.tick() => {
                terminal.draw(|f| ui::render(f, app))?;
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                // Layout follows the frame size on the next draw.
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }
    tracing::info!("quit requested");
    Ok(())
}
