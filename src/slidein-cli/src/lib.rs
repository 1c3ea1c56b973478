//! SlideIn terminal demo.
//!
//! - `cli` - command-line arguments
//! - `config` - TOML configuration and overrides
//! - `logging` - file logging setup
//! - `app` - demo state and key handling
//! - `ui` - ratatui rendering
//! - `runner` - terminal setup and the frame loop

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod runner;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
