//! Application configuration
//!
//! This module handles application-wide configuration settings.

use anyhow::Result;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Directory that relative exercise files are resolved against
    pub working_dir: PathBuf,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Result<Self> {
        let working_dir = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get current directory: {}", e))?;

        Ok(Self {
            verbose,
            working_dir,
        })
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
