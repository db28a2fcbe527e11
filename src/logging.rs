//! Log setup for the command-line front end.

use anyhow::Context as _;

/// Install a stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// # Errors
///
/// Fails when the filter does not parse or a subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
        .context("build log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("initialize tracing subscriber: {err}"))
}
