//! Branch command implementations
//!
//! `age` and `switch` prompt for one number on the input stream; `countdown`
//! takes no input.

use crate::core::branching::{
    classify_age, exact_age_message, parse_age, Countdown, COUNTDOWN_START, LIFT_OFF,
};
use crate::error::DrillError;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const AGE_PROMPT: &str = "Enter your age: ";

/// Prompt for an age and print the bracket it falls in
pub fn run_age_command<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    let age = prompt_for_age(input, out)?;
    let verdict = classify_age(age);
    debug!("Age {} classified as {:?}", age, verdict);

    writeln!(out, "{}", verdict)?;
    Ok(())
}

/// Prompt for an age and print the matching exact-value message
pub fn run_switch_command<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    let age = prompt_for_age(input, out)?;
    writeln!(out, "{}", exact_age_message(age))?;
    Ok(())
}

/// Count down from the fixed start and announce lift off
pub fn run_countdown_command<W: Write>(out: &mut W) -> Result<()> {
    for n in Countdown::new(COUNTDOWN_START) {
        writeln!(out, "{}", n)?;
    }
    writeln!(out, "{}", LIFT_OFF)?;
    Ok(())
}

fn prompt_for_age<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<i32> {
    write!(out, "{}", AGE_PROMPT)?;
    out.flush()?;

    let age = read_age(input)?;
    Ok(age)
}

/// Read lines until one holds a token, then parse that token
///
/// Bytes that are not UTF-8 count as malformed input rather than an I/O failure.
fn read_age<R: BufRead>(input: &mut R) -> Result<i32, DrillError> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(DrillError::MissingInput);
        }
        let line = std::str::from_utf8(&buf).map_err(|_| {
            DrillError::InvalidInput(String::from_utf8_lossy(&buf).trim().to_string())
        })?;
        if !line.trim().is_empty() {
            return parse_age(line);
        }
    }
}
