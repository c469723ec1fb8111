//! Logging Infrastructure
//!
//! Console tracing setup for binaries and integration tests embedding
//! the store.

use tracing_subscriber::{fmt, layer::SubscriberExt, prelude::*, EnvFilter};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over the given default level. Safe to call
/// once per process; subsequent calls fail when a subscriber is already set.
pub fn init_logger(level: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()?;

    Ok(())
}
