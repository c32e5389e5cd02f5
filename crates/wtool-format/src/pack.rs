//! Table files to container.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{WtError, WtResult};
use crate::header::WtHeader;
use crate::options::PackOptions;
use crate::waveform::{list_waveform_files, pcm_hash, read_waveform_pcm, WaveformInfo};

/// One input file consumed by [`pack()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedTable {
    /// Table index assigned by sort order.
    pub index: usize,
    pub source: PathBuf,
    /// BLAKE3 hash of the PCM bytes appended for this table.
    pub pcm_hash: String,
}

/// Result of [`pack()`].
#[derive(Debug, Clone)]
pub struct PackReport {
    pub header: WtHeader,
    /// Shape of the first input, applied to the whole container.
    pub reference: WaveformInfo,
    pub tables: Vec<PackedTable>,
}

/// Packs every `.wav` file in `wav_dir` into one container at `container`.
///
/// Files are sorted by name and that order is the table order. The first file
/// must be mono 44.1 kHz 16-bit PCM and fixes the table length. The data chunk
/// of every file is appended verbatim; later files are not checked unless
/// [`PackOptions::validate_all`] is set. Every input is read before
/// `container` is created or truncated.
pub fn pack(wav_dir: &Path, container: &Path, options: &PackOptions) -> WtResult<PackReport> {
    let sources = list_waveform_files(wav_dir)?;
    let Some(first) = sources.first() else {
        return Err(WtError::NoWaveforms {
            dir: wav_dir.to_path_buf(),
        });
    };
    let table_count = u16::try_from(sources.len()).map_err(|_| WtError::TooManyTables {
        count: sources.len(),
        max: u16::MAX as usize,
    })?;

    let reference = WaveformInfo::read(first)?;
    reference.validate(first)?;

    if options.validate_all {
        for source in &sources[1..] {
            WaveformInfo::read(source)?.validate_against(&reference, source)?;
        }
    }

    let header = WtHeader::int16(reference.frames, table_count);

    let mut tables = Vec::with_capacity(sources.len());
    let mut payloads = Vec::with_capacity(sources.len());
    for (index, source) in sources.into_iter().enumerate() {
        let pcm = read_waveform_pcm(&source)?;
        tables.push(PackedTable {
            index,
            pcm_hash: pcm_hash(&pcm),
            source,
        });
        payloads.push(pcm);
    }

    let mut writer = BufWriter::new(File::create(container)?);
    header.write(&mut writer)?;
    for pcm in &payloads {
        writer.write_all(pcm)?;
    }
    writer.flush()?;

    Ok(PackReport {
        header,
        reference,
        tables,
    })
}
