//! File logging.
//!
//! The TUI owns stdout, so log lines go to `<data dir>/offerdesk/offerdesk.log`.
//! The filter is read from `OFFERDESK_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::{Result, eyre::eyre};
use tracing_subscriber::EnvFilter;

use crate::state::platform::AppPaths;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "OFFERDESK_LOG";

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init() -> Result<()> {
    let path = AppPaths::new().log_file()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let directives = filter_directives(std::env::var(LOG_ENV).ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|err| {
        eprintln!("invalid {LOG_ENV} value {directives:?}: {err}");
        EnvFilter::new(DEFAULT_FILTER)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}

fn filter_directives(value: Option<String>) -> String {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}
