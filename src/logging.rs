//! Log subscriber set-up.
//!
//! Logs go to standard error in headless mode. The interactive interface owns the terminal, so
//! there logs are only written when a log file was asked for.

use std::{fs::File, sync::Mutex};

use color_eyre::eyre::{eyre, Result, WrapErr as _};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Installs the global log subscriber described by the configuration.
///
/// # Errors
///
/// This function may return errors if:
/// - The log file cannot be created
/// - A global subscriber was already installed
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if let Some(path) = &config.log_file {
        let file = File::create(path)
            .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else if config.headless {
        builder.with_writer(std::io::stderr).try_init()
    } else {
        return Ok(());
    };

    installed.map_err(|err| eyre!("failed to install log subscriber: {err}"))
}
