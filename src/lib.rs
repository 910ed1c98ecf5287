//! # Drills
//!
//! Small, self-contained exercises covering basic language mechanics.
//!
//! ## Usage
//!
//! ```bash
//! drills arrays
//! drills branch age|switch|countdown
//! drills params
//! drills lines [-p dir]
//! ```
//!
//! ## Modules
//!
//! - `app` - Logging, configuration and fatal error reporting
//! - `cli` - Argument parsing, routing and per-exercise commands
//! - `core` - Pure exercise logic (max-finding, branching, parameter passing)
//! - `error` - Error type and exit codes
//! - `lines` - Scoped, forward-only line reading
pub mod app;
pub mod cli;
pub mod core;
pub mod error;
pub mod lines;
