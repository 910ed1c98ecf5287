//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::debug;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `DrillError`: shows the user message and exits with its code
/// - For other errors: shows the error message and exits with 1
///
/// With `verbose >= 1` the full error chain is printed as well.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    let exit_code = report_error(&error, verbose, &mut std::io::stderr());
    std::process::exit(exit_code)
}

/// Write the error report and return the exit code to use
pub(crate) fn report_error<W: std::io::Write>(
    error: &anyhow::Error,
    verbose: u8,
    err_out: &mut W,
) -> i32 {
    use crate::error::DrillError;

    debug!("Fatal error: {:?}", error);

    let (message, exit_code) = match error.downcast_ref::<DrillError>() {
        Some(drill_err) => (drill_err.user_message(), drill_err.exit_code()),
        None => (format!("Error: {error}"), 1),
    };

    // Nothing sensible left to do if stderr itself is gone
    let _ = writeln!(err_out, "{}", message);
    if verbose >= 1 {
        let _ = writeln!(err_out, "\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            let _ = writeln!(err_out, "  {}: {}", i, cause);
        }
    }

    exit_code
}
