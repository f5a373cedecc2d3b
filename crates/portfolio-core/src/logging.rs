//! Console logging setup shared by the desktop app and the CLI.
//!
//! `RUST_LOG` wins when set; otherwise the verbosity count picks a level for
//! the portfolio crates and everything else stays at `warn`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `-v` is given.
pub const DEFAULT_FILTER: &str = "warn,portfolio_core=info";

/// Directive string for a `-v` count.
pub fn filter_for_verbosity(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return DEFAULT_FILTER.to_string(),
        1 => "debug",
        _ => "trace",
    };
    format!("warn,portfolio={level},portfolio_core={level},portfolio_cli={level}")
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
