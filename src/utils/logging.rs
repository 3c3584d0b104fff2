//! Tracing setup

use std::{fs::OpenOptions, sync::Mutex};
use anyhow::Context;

use crate::config::Config;

/// Send logs to the configured file.
///
/// Nothing is installed without `--log-file`: stdout and stderr belong to
/// the timer screen.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_tui={}", config.log_level()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
