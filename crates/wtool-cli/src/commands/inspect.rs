//! Inspect command implementation
//!
//! Prints the header of a wavetable container.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use wtool_format::{inspect, ReadOptions};

use super::json_output::{header_warnings, CommandOutput, InspectResult};
use super::print_json;

/// Run the inspect command
///
/// # Arguments
/// * `file` - Path to the container
/// * `options` - Magic tag policy
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(file: &str, options: &ReadOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(file, options)
    } else {
        run_human(file, options)
    }
}

/// Run inspect with human-readable (colored) output
fn run_human(file: &str, options: &ReadOptions) -> Result<ExitCode> {
    let info = inspect(Path::new(file), options)
        .with_context(|| format!("Failed to read wavetable: {}", file))?;
    let header = &info.header;

    println!("{} '{}'", "WT:".cyan().bold(), file);
    println!("  contains  {} tables", header.table_count);
    println!("  of length {}", header.table_length);
    println!("  in format {}", header.sample_format().name());
    if header.is_sample() {
        println!("  {} is a sample", "*".cyan());
    }
    if header.loop_sample() {
        println!("  {} loop_sample = true", "*".cyan());
    }
    println!(
        "  {} {} payload bytes, {} bytes on disk",
        "size:".dimmed(),
        header.payload_size_bytes(),
        info.file_size
    );

    for warning in header_warnings(header, Some(&info)) {
        println!("  {} {}", "!".yellow(), warning.message);
    }

    Ok(ExitCode::SUCCESS)
}

/// Run inspect with machine-readable JSON output
fn run_json(file: &str, options: &ReadOptions) -> Result<ExitCode> {
    let output = match inspect(Path::new(file), options) {
        Ok(info) => CommandOutput::success(
            "inspect",
            InspectResult::new(file, &info),
            header_warnings(&info.header, Some(&info)),
        ),
        Err(e) => {
            print_json(&CommandOutput::<InspectResult>::failure("inspect", &e))?;
            return Ok(ExitCode::from(1));
        }
    };

    print_json(&output)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wtool_format::WtHeader;

    fn write_container(dir: &tempfile::TempDir, header: WtHeader, payload_len: usize) -> String {
        let path = dir.path().join("t.wt");
        let mut bytes = header.to_bytes().to_vec();
        bytes.resize(bytes.len() + payload_len, 0);
        std::fs::write(&path, bytes).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn inspect_human_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let file = write_container(&tmp, WtHeader::int16(16, 2), 64);

        let code = run(&file, &ReadOptions::default(), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn inspect_json_succeeds_on_float() {
        let tmp = tempfile::tempdir().unwrap();
        let header = WtHeader {
            flags: [0x03, 0x00],
            ..WtHeader::int16(16, 2)
        };
        let file = write_container(&tmp, header, 128);

        let code = run(&file, &ReadOptions::default(), true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn inspect_bad_magic() {
        let tmp = tempfile::tempdir().unwrap();
        let header = WtHeader {
            magic: *b"junk",
            ..WtHeader::int16(16, 2)
        };
        let file = write_container(&tmp, header, 64);

        assert!(run(&file, &ReadOptions::default(), false).is_err());
        assert_eq!(
            run(&file, &ReadOptions::default(), true).unwrap(),
            ExitCode::from(1)
        );
        assert_eq!(
            run(&file, &ReadOptions::lenient(), false).unwrap(),
            ExitCode::SUCCESS
        );
    }

    #[test]
    fn inspect_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("nope.wt");
        let err = run(file.to_str().unwrap(), &ReadOptions::default(), false).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read wavetable"));
    }
}
