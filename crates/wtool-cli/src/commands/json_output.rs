//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json` and then prints exactly one
//! [`CommandOutput`] document to stdout instead of colored progress text.

use serde::{Deserialize, Serialize};
use wtool_format::header::WT_CONVENTIONAL_MAX_TABLES;
use wtool_format::{ContainerInfo, ExpandReport, PackReport, SizeStatus, WtError, WtHeader};

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// Magic tag is not `vawt` (only reachable with `--allow-any-magic`)
    pub const UNRECOGNIZED_MAGIC: &str = "WT_W001";
    /// File is shorter than the header declares
    pub const TRUNCATED: &str = "WT_W002";
    /// Bytes follow the declared payload
    pub const TRAILING_BYTES: &str = "WT_W003";
    /// More than 512 tables
    pub const TABLE_COUNT: &str = "WT_W004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "WT_002")
    pub code: String,
    /// Error class: "format", "validation" or "io"
    pub kind: String,
    /// Human-readable error message
    pub message: String,
}

impl From<&WtError> for JsonError {
    fn from(err: &WtError) -> Self {
        Self {
            code: err.code().to_string(),
            kind: err.kind().as_str().to_string(),
            message: err.to_string(),
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    pub code: String,
    pub message: String,
}

impl JsonWarning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Envelope shared by all commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Command name
    pub command: String,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> CommandOutput<T> {
    pub fn success(command: &str, result: T, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            command: command.to_string(),
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    pub fn failure(command: &str, err: &WtError) -> Self {
        Self {
            success: false,
            command: command.to_string(),
            errors: vec![err.into()],
            warnings: Vec::new(),
            result: None,
        }
    }
}

/// Header fields common to every result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderRecord {
    /// Magic tag, non-printable bytes escaped
    pub magic: String,
    pub table_count: u16,
    pub table_length: u32,
    /// "int16" or "float32"
    pub format: String,
    pub sample_byte_width: usize,
    pub is_sample: bool,
    pub loop_sample: bool,
    /// Raw flag bytes
    pub flags: [u8; 2],
    pub payload_size_bytes: u64,
    pub total_file_size: u64,
}

impl From<&WtHeader> for HeaderRecord {
    fn from(header: &WtHeader) -> Self {
        Self {
            magic: escape_magic(&header.magic),
            table_count: header.table_count,
            table_length: header.table_length,
            format: header.sample_format().name().to_string(),
            sample_byte_width: header.sample_byte_width(),
            is_sample: header.is_sample(),
            loop_sample: header.loop_sample(),
            flags: header.flags,
            payload_size_bytes: header.payload_size_bytes(),
            total_file_size: header.total_file_size(),
        }
    }
}

/// Result of the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectResult {
    pub file: String,
    pub header: HeaderRecord,
    /// Actual size on disk
    pub file_size: u64,
    /// "exact", "truncated" or "trailing_bytes"
    pub size_status: String,
}

impl InspectResult {
    pub fn new(file: &str, info: &ContainerInfo) -> Self {
        let size_status = match info.size_status() {
            SizeStatus::Exact => "exact",
            SizeStatus::Truncated { .. } => "truncated",
            SizeStatus::TrailingBytes { .. } => "trailing_bytes",
        };
        Self {
            file: file.to_string(),
            header: (&info.header).into(),
            file_size: info.file_size,
            size_status: size_status.to_string(),
        }
    }
}

/// One table file written or read by a command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableRecord {
    pub index: usize,
    pub path: String,
    /// BLAKE3 hash of the table PCM
    pub pcm_hash: String,
}

/// Result of the `expand` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandResult {
    pub file: String,
    pub wav_dir: String,
    pub header: HeaderRecord,
    pub tables: Vec<TableRecord>,
}

impl ExpandResult {
    pub fn new(file: &str, wav_dir: &str, report: &ExpandReport) -> Self {
        Self {
            file: file.to_string(),
            wav_dir: wav_dir.to_string(),
            header: (&report.header).into(),
            tables: report
                .tables
                .iter()
                .map(|t| TableRecord {
                    index: t.index,
                    path: t.path.display().to_string(),
                    pcm_hash: t.pcm_hash.clone(),
                })
                .collect(),
        }
    }
}

/// Shape of the first input file, which fixes the table length.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceRecord {
    pub path: String,
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub frames: u32,
}

/// Result of the `pack` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackResult {
    pub file: String,
    pub wav_dir: String,
    pub header: HeaderRecord,
    pub reference: ReferenceRecord,
    pub tables: Vec<TableRecord>,
}

impl PackResult {
    pub fn new(file: &str, wav_dir: &str, report: &PackReport) -> Self {
        Self {
            file: file.to_string(),
            wav_dir: wav_dir.to_string(),
            header: (&report.header).into(),
            reference: ReferenceRecord {
                path: report
                    .tables
                    .first()
                    .map(|t| t.source.display().to_string())
                    .unwrap_or_default(),
                channels: report.reference.channels,
                sample_rate: report.reference.sample_rate,
                bits_per_sample: report.reference.bits_per_sample,
                frames: report.reference.frames,
            },
            tables: report
                .tables
                .iter()
                .map(|t| TableRecord {
                    index: t.index,
                    path: t.source.display().to_string(),
                    pcm_hash: t.pcm_hash.clone(),
                })
                .collect(),
        }
    }
}

/// Renders a magic tag as text, escaping anything outside printable ASCII.
pub fn escape_magic(magic: &[u8; 4]) -> String {
    magic.escape_ascii().to_string()
}

/// Warnings derived from a header and, when known, the real file size.
pub fn header_warnings(header: &WtHeader, info: Option<&ContainerInfo>) -> Vec<JsonWarning> {
    let mut warnings = Vec::new();

    if !header.has_valid_magic() {
        warnings.push(JsonWarning::new(
            warning_codes::UNRECOGNIZED_MAGIC,
            format!("unrecognized magic tag \"{}\"", escape_magic(&header.magic)),
        ));
    }

    if let Some(info) = info {
        match info.size_status() {
            SizeStatus::Exact => {}
            SizeStatus::Truncated { missing } => warnings.push(JsonWarning::new(
                warning_codes::TRUNCATED,
                format!("file is {} bytes shorter than the header declares", missing),
            )),
            SizeStatus::TrailingBytes { extra } => warnings.push(JsonWarning::new(
                warning_codes::TRAILING_BYTES,
                format!("{} bytes follow the declared payload", extra),
            )),
        }
    }

    if header.exceeds_conventional_table_count() {
        warnings.push(JsonWarning::new(
            warning_codes::TABLE_COUNT,
            format!(
                "{} tables exceeds the conventional maximum of {}",
                header.table_count, WT_CONVENTIONAL_MAX_TABLES
            ),
        ));
    }

    warnings
}
