// src/telemetry.rs
use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LogLevel;

/// Initialize `tracing` on stderr. `RUST_LOG` wins over the CLI verbosity.
pub fn init_tracing(level: LogLevel) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}
