//! Arrays command implementation

use crate::core::arrays::{array_max, SAMPLE_VALUES};
use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Print each sample value on its own line, then the maximum
pub fn run_arrays_command<W: Write>(out: &mut W) -> Result<()> {
    debug!("Walking {} sample values", SAMPLE_VALUES.len());

    for value in SAMPLE_VALUES {
        writeln!(out, "{}", value)?;
    }
    writeln!(out, "max num in array: {}", array_max(&SAMPLE_VALUES))?;

    Ok(())
}
