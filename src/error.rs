use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a file that cannot be opened or read
pub const EXIT_FILE_ERROR: i32 = 1;

/// Exit code for malformed or missing user input
pub const EXIT_INPUT_ERROR: i32 = 2;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("Cannot open '{}': {source}", .path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed reading '{}': {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: '{0}' is not a whole number")]
    InvalidInput(String),

    #[error("No input provided")]
    MissingInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DrillError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileUnavailable { .. } | Self::ReadFailed { .. } | Self::Io(_) => {
                EXIT_FILE_ERROR
            }
            Self::InvalidInput(_) | Self::MissingInput => EXIT_INPUT_ERROR,
        }
    }

    /// Single line shown to the user on stderr
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(_) | Self::MissingInput => {
                format!("Error: {self}. Please enter a number such as 21.")
            }
            _ => format!("Error: {self}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
