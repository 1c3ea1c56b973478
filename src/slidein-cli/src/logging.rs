//! File logging.
//!
//! The terminal belongs to the UI, so logs always go to a file through a
//! non-blocking writer. Keep the returned [`LogGuard`] alive until exit so
//! buffered lines are flushed.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::LogLevel;

/// Environment variable holding a full filter directive.
pub const LOG_ENV: &str = "SLIDEIN_LOG";

/// Debug log written by `--debug`, relative to the working directory.
pub const DEBUG_LOG_FILE: &str = "slidein-debug.log";

const LOG_FILE: &str = "slidein.log";

/// Flushes the log writer when dropped.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
    path: PathBuf,
}

impl LogGuard {
    /// Where logs are being written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Pick the filter directive: `--debug` wins, then `SLIDEIN_LOG`, then the
/// requested level.
pub fn filter_directive(debug: bool, env: Option<&str>, level: LogLevel) -> String {
    if debug {
        return "trace".to_string();
    }
    match env.map(str::trim) {
        Some(directive) if !directive.is_empty() => directive.to_string(),
        _ => level.as_filter_str().to_string(),
    }
}

/// `<data dir>/slidein/slidein.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("slidein").join(LOG_FILE))
}

/// Install the global subscriber.
///
/// `--debug` truncates `./slidein-debug.log` and records everything;
/// otherwise logs are appended to [`default_log_path`]. Returns `None` when
/// the platform has no data directory.
pub fn init(debug: bool, level: LogLevel) -> Result<Option<LogGuard>> {
    let path = if debug {
        std::env::current_dir()?.join(DEBUG_LOG_FILE)
    } else {
        match default_log_path() {
            Some(path) => path,
            None => return Ok(None),
        }
    };

    let file = open_log_file(&path, debug)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let env = std::env::var(LOG_ENV).ok();
    let filter = EnvFilter::try_new(filter_directive(debug, env.as_deref(), level))
        .with_context(|| format!("Invalid {LOG_ENV} filter"))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(debug)
        .with_line_number(debug);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(Some(LogGuard {
        _guard: guard,
        path,
    }))
}

fn open_log_file(path: &Path, truncate: bool) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = if truncate {
        File::create(path)
    } else {
        File::options().create(true).append(true).open(path)
    };
    file.with_context(|| {
        format!(
            "Failed to open log file {}. Check write permissions.",
            path.display()
        )
    })
}
