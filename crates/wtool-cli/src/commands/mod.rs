//! CLI command implementations

pub mod expand;
pub mod inspect;
pub mod json_output;
pub mod pack;

use anyhow::{Context, Result};
use serde::Serialize;

/// Prints a JSON document to stdout.
pub(crate) fn print_json<T: Serialize>(output: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}
