//! File logging. The terminal belongs to the UI, so logs go to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Build the filter: `RUST_LOG` if set, else the configured level.
pub fn filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'")),
    }
}

/// Install the global subscriber writing to `settings.log_file`.
pub fn init(settings: &Settings) -> Result<()> {
    if let Some(parent) = settings.log_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create log directory {}", parent.display()))?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_file)
        .with_context(|| format!("open log file {}", settings.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(&settings.log_level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))
}
