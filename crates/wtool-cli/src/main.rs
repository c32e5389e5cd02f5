//! wtool - inspect, expand and pack `vawt` wavetable files
//!
//! A container holds many single-cycle tables; `expand` writes each one to its
//! own WAV file and `pack` reverses the process.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wtool_cli::commands;
use wtool_format::{MagicPolicy, PackOptions, ReadOptions};

/// wtool - Wavetable container tool
#[derive(Parser)]
#[command(name = "wtool")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the header of a wavetable file
    #[command(visible_alias = "info")]
    Inspect {
        /// Wavetable file to inspect
        #[arg(short, long)]
        file: String,

        /// Accept files whose magic tag is not "vawt"
        #[arg(long)]
        allow_any_magic: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
    /// Write every table of a wavetable file to its own WAV file
    #[command(visible_alias = "explode")]
    Expand {
        /// Wavetable file to expand
        #[arg(short, long)]
        file: String,

        /// Existing directory receiving wt_sample_NNN.wav files
        #[arg(short = 'd', long)]
        wav_dir: String,

        /// Accept files whose magic tag is not "vawt"
        #[arg(long)]
        allow_any_magic: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
    /// Build a wavetable file from a directory of WAV files
    #[command(visible_alias = "create")]
    Pack {
        /// Wavetable file to create (overwritten if present)
        #[arg(short, long)]
        file: String,

        /// Directory containing 44.1kHz mono 16-bit .wav tables
        #[arg(short = 'd', long)]
        wav_dir: String,

        /// Check every input against the first one, not only the first
        #[arg(long)]
        validate_all: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn read_options(allow_any_magic: bool) -> ReadOptions {
    ReadOptions {
        magic: if allow_any_magic {
            MagicPolicy::Lenient
        } else {
            MagicPolicy::Strict
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect {
            file,
            allow_any_magic,
            json,
        } => commands::inspect::run(&file, &read_options(allow_any_magic), json),
        Commands::Expand {
            file,
            wav_dir,
            allow_any_magic,
            json,
        } => commands::expand::run(&file, &wav_dir, &read_options(allow_any_magic), json),
        Commands::Pack {
            file,
            wav_dir,
            validate_all,
            json,
        } => commands::pack::run(&file, &wav_dir, &PackOptions { validate_all }, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
