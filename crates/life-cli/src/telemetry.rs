//! Logging setup for the command line tool.

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn,life_cli=info,life_world=info";
const VERBOSE_FILTER: &str = "debug";

/// Install the global subscriber. Logs go to stderr so they never mix with
/// the rendered board on stdout. `RUST_LOG` overrides the default filter.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    debug!("Logging initialized");
    Ok(())
}
