//! Line-based text file reading
//!
//! [`LineReader`] owns the open file handle. Turning it into an iterator moves
//! the handle along, so the sequence is forward-only and cannot be restarted;
//! the handle is closed whenever the reader or its iterator is dropped.
//! Lines are raw bytes so content that is not UTF-8 passes through unchanged.

use crate::error::{DrillError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name read by `drills lines`, relative to the working directory
pub const DEFAULT_FILE_NAME: &str = "io.txt";

#[derive(Debug)]
pub struct LineReader {
    path: PathBuf,
    reader: BufReader<File>,
}

impl LineReader {
    /// Open `path` for reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| DrillError::FileUnavailable {
            path: path.clone(),
            source,
        })?;
        debug!("Opened {}", path.display());

        Ok(Self {
            path,
            reader: BufReader::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IntoIterator for LineReader {
    type Item = Result<Vec<u8>>;
    type IntoIter = Lines;

    fn into_iter(self) -> Lines {
        Lines {
            path: self.path,
            reader: self.reader,
            done: false,
        }
    }
}

/// Lines of a [`LineReader`], terminators stripped
#[derive(Debug)]
pub struct Lines {
    path: PathBuf,
    reader: BufReader<File>,
    done: bool,
}

impl Iterator for Lines {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                strip_line_terminator(&mut line);
                Some(Ok(line))
            }
            Err(source) => {
                self.done = true;
                Some(Err(DrillError::ReadFailed {
                    path: self.path.clone(),
                    source,
                }))
            }
        }
    }
}

fn strip_line_terminator(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}
