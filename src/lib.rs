// Svcpatch - rewrites the Blend service sources for the response.hash -> response.id rename

pub mod error;
pub mod patch;

use anyhow::Result;
use tracing::info;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging for the patch run
///
/// Logs go to stderr so stdout stays reserved for the per-file progress
/// lines. RUST_LOG controls verbosity, defaulting to info.
pub fn init_logging() -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Initializing svcpatch v{}", version());

    Ok(())
}
