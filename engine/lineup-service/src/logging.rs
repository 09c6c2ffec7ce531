//! Logging and tracing setup.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging; `RUST_LOG` wins over the configured level.
pub fn initialize_logging(level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let fmt_layer = fmt::layer().with_target(false).with_ansi(true);

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();

    Ok(())
}
