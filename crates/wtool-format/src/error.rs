//! Error types for wavetable container operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for wavetable operations.
pub type WtResult<T> = Result<T, WtError>;

/// Coarse classification of a [`WtError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The container itself is malformed or uses an unsupported layout.
    Format,
    /// An input waveform file does not have the required shape.
    Validation,
    /// The file system refused an operation.
    Io,
}

impl ErrorKind {
    /// Returns a lowercase name for reporting.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Format => "format",
            ErrorKind::Validation => "validation",
            ErrorKind::Io => "io",
        }
    }
}

/// Errors that can occur while reading or writing wavetables.
#[derive(Debug, Error)]
pub enum WtError {
    /// The first four bytes are not the `vawt` tag.
    #[error("unrecognized magic tag \"{}\", expected \"vawt\"", .found.escape_ascii())]
    BadMagic {
        /// The bytes found at offset 0.
        found: [u8; 4],
    },

    /// The container stores samples wider than 16 bits.
    #[error("unsupported sample width: {width} bytes per sample (only 16-bit integer tables can be processed)")]
    UnsupportedSampleWidth {
        /// Bytes per sample declared by the format flag.
        width: usize,
    },

    /// The file ends before the 12-byte header is complete.
    #[error("truncated file: header requires 12 bytes")]
    TruncatedHeader,

    /// The file ends before the payload declared by the header.
    #[error("truncated file: header declares {expected} payload bytes but only {actual} are present")]
    TruncatedPayload {
        /// Payload bytes declared by the header.
        expected: u64,
        /// Payload bytes actually present after the header.
        actual: u64,
    },

    /// A waveform file does not have the required shape.
    #[error("invalid waveform '{}': {reason}", .path.display())]
    InvalidWaveform {
        /// Offending file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// Pack was pointed at a directory with no waveform files.
    #[error("no .wav files found in '{}'", .dir.display())]
    NoWaveforms {
        /// The scanned directory.
        dir: PathBuf,
    },

    /// More waveform files than the two-byte table count can describe.
    #[error("too many waveform files: {count} (a container holds at most {max} tables)")]
    TooManyTables {
        /// Number of files found.
        count: usize,
        /// Largest representable table count.
        max: usize,
    },

    /// The WAV codec failed on a specific file.
    #[error("WAV error in '{}': {source}", .path.display())]
    Wav {
        /// File being read or written.
        path: PathBuf,
        /// Underlying codec error.
        #[source]
        source: hound::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WtError {
    /// Creates an invalid waveform error.
    pub fn invalid_waveform(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::InvalidWaveform {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Wraps a `hound` error with the file it concerns.
    pub fn wav(path: impl AsRef<Path>, source: hound::Error) -> Self {
        Self::Wav {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns a stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            WtError::BadMagic { .. } => "WT_001",
            WtError::UnsupportedSampleWidth { .. } => "WT_002",
            WtError::TruncatedHeader => "WT_003",
            WtError::TruncatedPayload { .. } => "WT_004",
            WtError::InvalidWaveform { .. } => "WT_005",
            WtError::NoWaveforms { .. } => "WT_006",
            WtError::TooManyTables { .. } => "WT_007",
            WtError::Wav { .. } => "WT_008",
            WtError::Io(_) => "WT_009",
        }
    }

    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WtError::BadMagic { .. }
            | WtError::UnsupportedSampleWidth { .. }
            | WtError::TruncatedHeader
            | WtError::TruncatedPayload { .. } => ErrorKind::Format,
            WtError::InvalidWaveform { .. }
            | WtError::NoWaveforms { .. }
            | WtError::TooManyTables { .. } => ErrorKind::Validation,
            WtError::Wav {
                source: hound::Error::IoError(_),
                ..
            } => ErrorKind::Io,
            WtError::Wav { .. } => ErrorKind::Validation,
            WtError::Io(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_waveform_helper() {
        let err = WtError::invalid_waveform("tables/a.wav", "stereo input");
        assert!(err.to_string().contains("tables/a.wav"));
        assert!(err.to_string().contains("stereo input"));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_format_errors_classified() {
        assert_eq!(
            WtError::UnsupportedSampleWidth { width: 4 }.kind(),
            ErrorKind::Format
        );
        assert_eq!(WtError::TruncatedHeader.kind(), ErrorKind::Format);
        assert_eq!(
            WtError::BadMagic { found: *b"RIFF" }.kind(),
            ErrorKind::Format
        );
    }

    #[test]
    fn test_wav_io_error_is_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = WtError::wav("missing.wav", hound::Error::IoError(io));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.code(), "WT_008");

        let err = WtError::wav("bad.wav", hound::Error::FormatError("no RIFF tag found"));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            WtError::BadMagic { found: [0; 4] },
            WtError::UnsupportedSampleWidth { width: 4 },
            WtError::TruncatedHeader,
            WtError::TruncatedPayload {
                expected: 8,
                actual: 4,
            },
            WtError::invalid_waveform("a.wav", "x"),
            WtError::NoWaveforms { dir: "d".into() },
            WtError::TooManyTables { count: 70000, max: 65535 },
            WtError::wav("a.wav", hound::Error::Unsupported),
            WtError::Io(std::io::Error::other("x")),
        ];
        let mut codes: Vec<_> = errors.iter().map(WtError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
