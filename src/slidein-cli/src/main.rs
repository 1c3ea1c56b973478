//! SlideIn - main entry point.

use anyhow::{Context, Result};
use clap::Parser;

use slidein_cli::{App, AppConfig, Cli, logging, runner};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_guard = logging::init(cli.debug, cli.log_level.unwrap_or_default())?;
    if let Some(guard) = log_guard.as_ref().filter(|_| cli.debug) {
        eprintln!("Debug mode enabled: logging to {}", guard.path().display());
    }

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config
        .apply_cli(&cli)
        .context("Failed to apply command-line options")?;

    let mut app = App::new(&config).context("Invalid configuration")?;
    if cli.autostart {
        app.toggle();
    }

    tracing::info!(
        delay_ms = app.delay_ms(),
        duration_ms = app.duration_ms(),
        "starting slidein"
    );
    runner::run(&mut app).await
}
