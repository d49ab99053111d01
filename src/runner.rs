//! Application Runner Module
//!
//! Shared entry point called by the binary: sets up logging and the
//! runtime, then hands the terminal to the TUI.

use std::path::PathBuf;

use anyhow::Context;

use crate::config::XdgDirs;

/// Runtime configuration shared by binary entry points.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Enable debug logging
    pub debug: bool,
    /// Enable verbose (trace-level) logging
    pub verbose: bool,
    /// Log file override; defaults to the XDG state directory
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub fn default_filter(&self) -> &'static str {
        if self.verbose {
            "trace"
        } else if self.debug {
            "debug"
        } else {
            "info,teamchat=debug"
        }
    }

    /// Where log output goes, creating the default directory if needed.
    pub fn resolve_log_file(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }
        let dirs = XdgDirs::new();
        dirs.ensure_dirs()
            .with_context(|| format!("Failed to create {}", dirs.state.display()))?;
        Ok(dirs.log_file())
    }
}

/// Log to a file: the terminal belongs to the UI.
#[cfg(feature = "tui")]
fn init_logging(config: &AppConfig) -> anyhow::Result<PathBuf> {
    use std::fs::File;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let path = config.resolve_log_file()?;
    let log_file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(log_file)),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;
    Ok(path)
}

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI feature is not enabled or if the terminal
/// cannot be set up.
#[cfg(feature = "tui")]
pub fn run_tui(config: AppConfig) -> anyhow::Result<()> {
    let log_path = init_logging(&config)?;
    tracing::info!(log = %log_path.display(), "starting teamchat");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    let result = runtime.block_on(crate::tui::run(crate::chat::ChatStore::seeded()));
    if let Err(e) = &result {
        tracing::error!("TUI exited with error: {:#}", e);
    }
    result
}

#[cfg(not(feature = "tui"))]
pub fn run_tui(_config: AppConfig) -> anyhow::Result<()> {
    anyhow::bail!("TUI feature not enabled. Recompile with --features tui")
}
