//! Single-cycle WAV files, one per table.
//!
//! Tables leave and enter the container as mono 44.1 kHz 16-bit PCM. The data
//! chunk of a written file is byte-identical to the table it came from, and
//! reading a file back yields the same little-endian bytes.

use std::io::Read;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{WtError, WtResult};

/// Sample rate of every table file.
pub const WAVEFORM_SAMPLE_RATE: u32 = 44_100;

/// Channel count of every table file.
pub const WAVEFORM_CHANNELS: u16 = 1;

/// Bit depth of every table file.
pub const WAVEFORM_BITS_PER_SAMPLE: u16 = 16;

/// Suffix identifying table files in a directory.
pub const WAVEFORM_EXTENSION: &str = ".wav";

/// Name of the file holding table `index`.
pub fn waveform_file_name(index: usize) -> String {
    format!("wt_sample_{:03}{}", index, WAVEFORM_EXTENSION)
}

/// The `hound` spec used for every written table.
pub fn waveform_spec() -> hound::WavSpec {
    hound::WavSpec {
        channels: WAVEFORM_CHANNELS,
        sample_rate: WAVEFORM_SAMPLE_RATE,
        bits_per_sample: WAVEFORM_BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Shape of a WAV file as declared by its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveformInfo {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub sample_format: hound::SampleFormat,
    /// Frames per channel.
    pub frames: u32,
}

impl WaveformInfo {
    /// Reads the header of a WAV file.
    pub fn read(path: &Path) -> WtResult<Self> {
        let reader = hound::WavReader::open(path).map_err(|e| WtError::wav(path, e))?;
        let spec = reader.spec();
        Ok(Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: spec.sample_format,
            frames: reader.duration(),
        })
    }

    /// Bytes per sample, rounded up.
    pub fn sample_width_bytes(&self) -> u16 {
        self.bits_per_sample.div_ceil(8)
    }

    /// Whether the file is mono 44.1 kHz 16-bit integer PCM.
    pub fn is_table_format(&self) -> bool {
        self.channels == WAVEFORM_CHANNELS
            && self.sample_rate == WAVEFORM_SAMPLE_RATE
            && self.sample_width_bytes() == 2
            && self.sample_format == hound::SampleFormat::Int
    }

    /// Fails unless the file can become a table.
    pub fn validate(&self, path: &Path) -> WtResult<()> {
        if self.channels != WAVEFORM_CHANNELS {
            return Err(WtError::invalid_waveform(
                path,
                format!("only mono inputs are supported, found {} channels", self.channels),
            ));
        }
        if !self.is_table_format() {
            return Err(WtError::invalid_waveform(
                path,
                format!(
                    "only 44.1kHz mono 16-bit PCM supported, found {} Hz {}-bit {}",
                    self.sample_rate,
                    self.bits_per_sample,
                    format_name(self.sample_format)
                ),
            ));
        }
        Ok(())
    }

    /// Fails unless `self` has the same shape as `reference`.
    pub fn validate_against(&self, reference: &WaveformInfo, path: &Path) -> WtResult<()> {
        if self != reference {
            return Err(WtError::invalid_waveform(
                path,
                format!(
                    "shape differs from the first table: {} channels, {} Hz, {}-bit, {} frames (expected {} channels, {} Hz, {}-bit, {} frames)",
                    self.channels,
                    self.sample_rate,
                    self.bits_per_sample,
                    self.frames,
                    reference.channels,
                    reference.sample_rate,
                    reference.bits_per_sample,
                    reference.frames
                ),
            ));
        }
        Ok(())
    }
}

fn format_name(format: hound::SampleFormat) -> &'static str {
    match format {
        hound::SampleFormat::Int => "integer",
        hound::SampleFormat::Float => "float",
    }
}

/// Writes one table as a WAV file.
///
/// `pcm` holds little-endian signed 16-bit samples; a trailing odd byte is
/// ignored.
pub fn write_waveform(path: &Path, pcm: &[u8]) -> WtResult<()> {
    let mut writer =
        hound::WavWriter::create(path, waveform_spec()).map_err(|e| WtError::wav(path, e))?;

    for chunk in pcm.chunks_exact(2) {
        writer
            .write_sample(i16::from_le_bytes([chunk[0], chunk[1]]))
            .map_err(|e| WtError::wav(path, e))?;
    }

    writer.finalize().map_err(|e| WtError::wav(path, e))
}

/// Reads the raw bytes of a WAV file's data chunk.
///
/// Frames are copied as stored, whatever their width or encoding, so a
/// 16-bit integer file yields little-endian 16-bit samples. A data chunk that
/// ends early yields the bytes actually present.
pub fn read_waveform_pcm(path: &Path) -> WtResult<Vec<u8>> {
    let reader = hound::WavReader::open(path).map_err(|e| WtError::wav(path, e))?;
    let width = u64::from(reader.spec().bits_per_sample.div_ceil(8));
    let data_len = u64::from(reader.len()) * width;

    let mut pcm = Vec::with_capacity(data_len as usize);
    reader.into_inner().take(data_len).read_to_end(&mut pcm)?;

    Ok(pcm)
}

/// Lists the table files directly inside `dir`, sorted by file name.
///
/// Only regular files (following symlinks) whose name ends in `.wav` are
/// returned. Subdirectories are not descended into.
pub fn list_waveform_files(dir: &Path) -> WtResult<Vec<PathBuf>> {
    std::fs::metadata(dir)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_waveform = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(WAVEFORM_EXTENSION));
        if is_waveform {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// BLAKE3 hash of raw PCM bytes, as lowercase hex.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}
