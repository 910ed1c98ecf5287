//! Lines command implementation

use crate::lines::{LineReader, DEFAULT_FILE_NAME};
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::{debug, trace};

/// Print each line of `io.txt` inside `dir`
///
/// Nothing is written to `out` when the file cannot be opened.
pub fn run_lines_command<W: Write>(dir: &Path, out: &mut W) -> Result<()> {
    let path = dir.join(DEFAULT_FILE_NAME);

    let reader = LineReader::open(&path)?;
    trace!("Streaming lines from {}", reader.path().display());
    let mut count = 0usize;
    for line in reader {
        out.write_all(&line?)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    debug!("Printed {} line(s) from {}", count, path.display());

    Ok(())
}
