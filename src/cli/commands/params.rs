//! Params command implementation

use crate::core::passing::{change, swap};
use anyhow::Result;
use std::io::Write;

/// Show that `change` cannot touch the caller's value while `swap` can
pub fn run_params_command<W: Write>(out: &mut W) -> Result<()> {
    let mut data = 10;
    writeln!(out, "Data = {}", data)?;

    writeln!(out, "Call by value: change()")?;
    change(data);
    writeln!(out, "Data = {}", data)?;

    let mut data2 = 20;
    writeln!(out, "Call by reference: swap()")?;
    swap(&mut data, &mut data2);
    writeln!(out, "Data = {}", data)?;
    writeln!(out, "Data2 = {}", data2)?;

    Ok(())
}
