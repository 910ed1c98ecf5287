//! Logging configuration and initialization
//!
//! Log records go to stderr so stdout carries exercise output only.

use crate::app::config::AppConfig;
use std::io::IsTerminal;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the application
///
/// `RUST_LOG` takes precedence over the verbosity-derived level when set.
pub fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(config.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(config.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(config.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("drills started with verbosity level: {}", config.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
