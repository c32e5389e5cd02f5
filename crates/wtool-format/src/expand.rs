//! Container to table files.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{WtError, WtResult};
use crate::header::{WtHeader, WT_HEADER_SIZE};
use crate::options::ReadOptions;
use crate::waveform::{pcm_hash, waveform_file_name, write_waveform};

/// One table written by [`expand()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedTable {
    /// Table index in the container.
    pub index: usize,
    /// Written file.
    pub path: PathBuf,
    /// BLAKE3 hash of the table's PCM bytes.
    pub pcm_hash: String,
}

/// Result of [`expand()`].
#[derive(Debug, Clone)]
pub struct ExpandReport {
    pub header: WtHeader,
    /// Tables in index order.
    pub tables: Vec<ExpandedTable>,
}

/// Splits a container into one WAV file per table inside `out_dir`.
///
/// The header, sample width and payload length are all checked before the
/// first file is written, so a rejected container leaves `out_dir` untouched.
/// `out_dir` must already exist.
///
/// # Errors
/// * [`WtError::UnsupportedSampleWidth`] for float containers
/// * [`WtError::TruncatedPayload`] if the file is shorter than its header declares
/// * [`WtError::BadMagic`] under the strict magic policy
pub fn expand(container: &Path, out_dir: &Path, options: &ReadOptions) -> WtResult<ExpandReport> {
    let file = File::open(container)?;
    let file_size = file.metadata()?.len();
    let mut reader = BufReader::new(file);

    let header = WtHeader::read(&mut reader, options)?;
    header.require_int16()?;

    let expected = header.payload_size_bytes();
    let actual = file_size.saturating_sub(WT_HEADER_SIZE as u64);
    if actual < expected {
        return Err(WtError::TruncatedPayload { expected, actual });
    }

    let table_size = header.table_size_bytes() as usize;
    let mut buf = vec![0u8; table_size];
    let mut tables = Vec::with_capacity(header.table_count as usize);

    for index in 0..header.table_count as usize {
        read_table(&mut reader, &mut buf, &header, index)?;

        let path = out_dir.join(waveform_file_name(index));
        write_waveform(&path, &buf)?;

        tables.push(ExpandedTable {
            index,
            path,
            pcm_hash: pcm_hash(&buf),
        });
    }

    Ok(ExpandReport { header, tables })
}

fn read_table<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    header: &WtHeader,
    index: usize,
) -> WtResult<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        // The file shrank after the length check.
        io::ErrorKind::UnexpectedEof => WtError::TruncatedPayload {
            expected: header.payload_size_bytes(),
            actual: header.table_size_bytes() * index as u64,
        },
        _ => WtError::Io(e),
    })
}
