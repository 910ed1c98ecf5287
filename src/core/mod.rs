//! Core exercise logic with pure functions
//!
//! Everything here takes inputs and returns outputs without touching
//! stdin, stdout or the filesystem. The CLI commands in `crate::cli::commands`
//! are the imperative shell that prints these results.

pub mod arrays;
pub mod branching;
pub mod passing;
