//! Logging utilities for PluView.
//!
//! Provides one way to install the tracing subscriber across the workspace
//! and a couple of helpers for logging errors and results.

use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use pluview_common::logging;
///
/// logging::init();
/// // later calls are ignored once a subscriber is installed
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific level for the `pluview` targets.
///
/// `RUST_LOG` directives are honoured as well. Uses `try_init`, so calling
/// this after a global subscriber is set is a no-op.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    for target in ["pluview_common", "pluview_scheduling", "pluview_site", "pluview_config"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}

/// Log a result, INFO on success and ERROR on failure, and hand it back unchanged.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
