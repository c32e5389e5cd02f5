//! Expand command implementation
//!
//! Splits a wavetable container into one WAV file per table.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use wtool_format::{expand, ReadOptions};

use super::json_output::{header_warnings, CommandOutput, ExpandResult};
use super::print_json;

/// Run the expand command
///
/// # Arguments
/// * `file` - Path to the container
/// * `wav_dir` - Existing directory receiving `wt_sample_NNN.wav` files
/// * `options` - Magic tag policy
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(file: &str, wav_dir: &str, options: &ReadOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(file, wav_dir, options)
    } else {
        run_human(file, wav_dir, options)
    }
}

/// Run expand with human-readable (colored) output
fn run_human(file: &str, wav_dir: &str, options: &ReadOptions) -> Result<ExitCode> {
    println!(
        "{} '{}' into '{}'",
        "Expanding:".cyan().bold(),
        file,
        wav_dir
    );

    let report = expand(Path::new(file), Path::new(wav_dir), options)
        .with_context(|| format!("Failed to expand wavetable: {}", file))?;

    for table in &report.tables {
        println!("  {} {}", "Created".dimmed(), table.path.display());
    }
    for warning in header_warnings(&report.header, None) {
        println!("  {} {}", "!".yellow(), warning.message);
    }

    println!(
        "{} Wrote {} tables of length {}",
        "SUCCESS".green().bold(),
        report.tables.len(),
        report.header.table_length
    );

    Ok(ExitCode::SUCCESS)
}

/// Run expand with machine-readable JSON output
fn run_json(file: &str, wav_dir: &str, options: &ReadOptions) -> Result<ExitCode> {
    let report = match expand(Path::new(file), Path::new(wav_dir), options) {
        Ok(report) => report,
        Err(e) => {
            print_json(&CommandOutput::<ExpandResult>::failure("expand", &e))?;
            return Ok(ExitCode::from(1));
        }
    };

    let output = CommandOutput::success(
        "expand",
        ExpandResult::new(file, wav_dir, &report),
        header_warnings(&report.header, None),
    );
    print_json(&output)?;
    Ok(ExitCode::SUCCESS)
}
