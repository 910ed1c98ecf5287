//! Command implementation modules
//!
//! Each exercise is implemented as a separate module. Commands take their
//! input and output streams as parameters so tests can drive them in memory.

pub mod arrays;
pub mod branch;
pub mod lines;
pub mod params;

pub use arrays::run_arrays_command;
pub use branch::{run_age_command, run_countdown_command, run_switch_command};
pub use lines::run_lines_command;
pub use params::run_params_command;
