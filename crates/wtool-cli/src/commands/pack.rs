//! Pack command implementation
//!
//! Builds a wavetable container from a directory of WAV files.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use wtool_format::{pack, PackOptions};

use super::json_output::{header_warnings, CommandOutput, PackResult};
use super::print_json;

/// Run the pack command
///
/// # Arguments
/// * `file` - Container to create or overwrite
/// * `wav_dir` - Directory holding the `.wav` tables
/// * `options` - Input validation settings
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(file: &str, wav_dir: &str, options: &PackOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(file, wav_dir, options)
    } else {
        run_human(file, wav_dir, options)
    }
}

/// Run pack with human-readable (colored) output
fn run_human(file: &str, wav_dir: &str, options: &PackOptions) -> Result<ExitCode> {
    println!("{} '{}' from '{}'", "Packing:".cyan().bold(), file, wav_dir);

    let report = pack(Path::new(wav_dir), Path::new(file), options)
        .with_context(|| format!("Failed to pack wavetable: {}", file))?;

    println!(
        "{} {} Hz, {}-bit, {} channel, {} frames",
        "Reference:".cyan().bold(),
        report.reference.sample_rate,
        report.reference.bits_per_sample,
        report.reference.channels,
        report.reference.frames
    );

    for table in &report.tables {
        println!(
            "  {} {}",
            format!("[{:03}]", table.index).dimmed(),
            table.source.display()
        );
    }
    for warning in header_warnings(&report.header, None) {
        println!("  {} {}", "!".yellow(), warning.message);
    }

    println!(
        "{} Created '{}' with {} tables of length {}",
        "SUCCESS".green().bold(),
        file,
        report.header.table_count,
        report.header.table_length
    );

    Ok(ExitCode::SUCCESS)
}

/// Run pack with machine-readable JSON output
fn run_json(file: &str, wav_dir: &str, options: &PackOptions) -> Result<ExitCode> {
    let report = match pack(Path::new(wav_dir), Path::new(file), options) {
        Ok(report) => report,
        Err(e) => {
            print_json(&CommandOutput::<PackResult>::failure("pack", &e))?;
            return Ok(ExitCode::from(1));
        }
    };

    let output = CommandOutput::success(
        "pack",
        PackResult::new(file, wav_dir, &report),
        header_warnings(&report.header, None),
    );
    print_json(&output)?;
    Ok(ExitCode::SUCCESS)
}
