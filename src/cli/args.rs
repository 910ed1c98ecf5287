//! CLI argument structures
//!
//! This module defines the command-line interface of `drills`: one subcommand
//! per exercise, with the branching exercises grouped under `branch`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Small, self-contained language exercises
#[derive(Parser)]
#[command(name = "drills")]
#[command(about = "drills - Run small introductory programming exercises", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a fixed array and its maximum value
    #[command(name = "arrays")]
    Arrays,

    /// Conditional, exact-match and loop control flow
    #[command(name = "branch")]
    Branch {
        #[command(subcommand)]
        command: BranchCommands,
    },

    /// Show call-by-value next to call-by-reference
    #[command(name = "params")]
    Params,

    /// Print every line of io.txt
    #[command(name = "lines")]
    Lines {
        /// Directory containing io.txt (defaults to current directory)
        #[arg(short = 'p', long)]
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum BranchCommands {
    /// Read an age and report what it allows
    Age,
    /// Read an age and match it against a few exact values
    Switch,
    /// Count down to lift off
    Countdown,
}
