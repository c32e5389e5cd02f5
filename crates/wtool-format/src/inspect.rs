//! Header-only container queries.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::WtResult;
use crate::header::WtHeader;
use crate::options::ReadOptions;

/// How the real file length compares to what the header declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeStatus {
    Exact,
    /// The payload is shorter than declared.
    Truncated { missing: u64 },
    /// Bytes follow the declared payload.
    TrailingBytes { extra: u64 },
}

/// Metadata reported by [`inspect()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerInfo {
    pub header: WtHeader,
    /// Actual length of the file on disk.
    pub file_size: u64,
}

impl ContainerInfo {
    pub fn size_status(&self) -> SizeStatus {
        let expected = self.header.total_file_size();
        if self.file_size < expected {
            SizeStatus::Truncated {
                missing: expected - self.file_size,
            }
        } else if self.file_size > expected {
            SizeStatus::TrailingBytes {
                extra: self.file_size - expected,
            }
        } else {
            SizeStatus::Exact
        }
    }
}

/// Reads the header of a container without touching its payload.
///
/// Only header decode can fail. Float tables and size mismatches are reported,
/// not rejected.
pub fn inspect(container: &Path, options: &ReadOptions) -> WtResult<ContainerInfo> {
    let file = File::open(container)?;
    let file_size = file.metadata()?.len();
    let header = WtHeader::read(&mut BufReader::new(file), options)?;
    Ok(ContainerInfo { header, file_size })
}
