//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::app::AppConfig;
use crate::cli::args::{BranchCommands, Commands};
use crate::cli::commands::*;
use anyhow::Result;
use std::io::{self, Write};
use tracing::debug;

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(command: Option<Commands>, config: &AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Some(Commands::Arrays) => run_arrays_command(&mut out),
        Some(Commands::Branch { command }) => {
            debug!("Running branch exercise");
            match command {
                BranchCommands::Age => run_age_command(&mut io::stdin().lock(), &mut out),
                BranchCommands::Switch => run_switch_command(&mut io::stdin().lock(), &mut out),
                BranchCommands::Countdown => run_countdown_command(&mut out),
            }
        }
        Some(Commands::Params) => run_params_command(&mut out),
        Some(Commands::Lines { path }) => {
            let dir = path.unwrap_or_else(|| config.working_dir.clone());
            run_lines_command(&dir, &mut out)
        }
        None => {
            // No command provided, show help
            use crate::cli::help::generate_help;
            writeln!(out, "{}", generate_help())?;
            Ok(())
        }
    }?;

    out.flush()?;
    Ok(())
}
