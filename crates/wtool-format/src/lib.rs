//! Codec for the `vawt` wavetable container.
//!
//! A container is a 12-byte header followed by `table_count` tables of
//! `table_length` samples each, stored back to back. This crate converts
//! between a container and a directory of single-cycle WAV files, losslessly in
//! both directions, and reports container metadata.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use wtool_format::{expand, pack, PackOptions, ReadOptions};
//!
//! let report = expand(Path::new("pad.wt"), Path::new("tables"), &ReadOptions::default())?;
//! println!("wrote {} tables", report.tables.len());
//!
//! pack(Path::new("tables"), Path::new("pad-copy.wt"), &PackOptions::default())?;
//! ```
//!
//! # Crate Structure
//!
//! - [`header`] - Header layout, flags and derived sizes
//! - [`waveform`] - Table WAV file I/O and directory listing
//! - [`expand()`] - Container to table files
//! - [`pack()`] - Table files to container
//! - [`inspect()`] - Header-only metadata query

pub mod error;
pub mod expand;
pub mod header;
pub mod inspect;
pub mod options;
pub mod pack;
pub mod waveform;

pub use error::{ErrorKind, WtError, WtResult};
pub use expand::{expand, ExpandReport, ExpandedTable};
pub use header::{SampleFormat, WtHeader, WT_HEADER_SIZE, WT_MAGIC};
pub use inspect::{inspect, ContainerInfo, SizeStatus};
pub use options::{MagicPolicy, PackOptions, ReadOptions};
pub use pack::{pack, PackReport, PackedTable};
pub use waveform::WaveformInfo;
