//! WT container header structures and constants.
//!
//! The header is 12 bytes, followed immediately by the table payload:
//!
//! | Offset | Size | Field          |
//! |--------|------|----------------|
//! | 0      | 4    | magic (`vawt`) |
//! | 4      | 4    | table length   |
//! | 8      | 2    | table count    |
//! | 10     | 2    | flags          |

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use std::io::{self, Read, Write};

use crate::error::{WtError, WtResult};
use crate::options::{MagicPolicy, ReadOptions};

/// WT file magic identifier.
pub const WT_MAGIC: &[u8; 4] = b"vawt";

/// Header size in bytes.
pub const WT_HEADER_SIZE: usize = 12;

/// Table count most tools expect at most. Not enforced.
pub const WT_CONVENTIONAL_MAX_TABLES: u16 = 512;

/// Bits of the first flags byte.
pub mod flags {
    /// Container holds a sample rather than a wavetable.
    pub const IS_SAMPLE: u8 = 0x01;
    /// The sample loops.
    pub const LOOP_SAMPLE: u8 = 0x02;
    /// Samples are 16-bit integers (clear: 32-bit float).
    pub const INT16: u8 = 0x04;
}

/// Sample encoding selected by the format flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// Little-endian signed 16-bit integers.
    Int16,
    /// Little-endian 32-bit floats.
    Float32,
}

impl SampleFormat {
    /// Bytes per sample.
    pub fn byte_width(&self) -> usize {
        match self {
            SampleFormat::Int16 => 2,
            SampleFormat::Float32 => 4,
        }
    }

    /// Name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            SampleFormat::Int16 => "int16",
            SampleFormat::Float32 => "float32",
        }
    }
}

/// WT container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WtHeader {
    /// Raw tag bytes.
    pub magic: [u8; 4],
    /// Sample frames per table.
    pub table_length: u32,
    /// Number of tables.
    pub table_count: u16,
    /// Raw flag bytes. Only byte 0 carries meaning.
    pub flags: [u8; 2],
}

impl WtHeader {
    /// Creates a header for 16-bit integer tables, as written by pack.
    pub fn int16(table_length: u32, table_count: u16) -> Self {
        Self {
            magic: *WT_MAGIC,
            table_length,
            table_count,
            flags: [flags::INT16, 0],
        }
    }

    /// Decodes a header from its 12 bytes without any validation.
    pub fn from_bytes(bytes: &[u8; WT_HEADER_SIZE]) -> Self {
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&bytes[0..4]);
        Self {
            magic,
            table_length: LittleEndian::read_u32(&bytes[4..8]),
            table_count: LittleEndian::read_u16(&bytes[8..10]),
            flags: [bytes[10], bytes[11]],
        }
    }

    /// Encodes the header to its 12 bytes.
    pub fn to_bytes(&self) -> [u8; WT_HEADER_SIZE] {
        let mut bytes = [0u8; WT_HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        LittleEndian::write_u32(&mut bytes[4..8], self.table_length);
        LittleEndian::write_u16(&mut bytes[8..10], self.table_count);
        bytes[10..12].copy_from_slice(&self.flags);
        bytes
    }

    /// Reads a header from the start of a container.
    ///
    /// # Errors
    /// * [`WtError::TruncatedHeader`] if fewer than 12 bytes are available
    /// * [`WtError::BadMagic`] if the tag is not `vawt` and the policy is strict
    pub fn read<R: Read>(reader: &mut R, options: &ReadOptions) -> WtResult<Self> {
        let mut bytes = [0u8; WT_HEADER_SIZE];
        reader.read_exact(&mut bytes).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => WtError::TruncatedHeader,
            _ => WtError::Io(e),
        })?;

        let header = Self::from_bytes(&bytes);
        if options.magic == MagicPolicy::Strict && !header.has_valid_magic() {
            return Err(WtError::BadMagic {
                found: header.magic,
            });
        }
        Ok(header)
    }

    /// Writes the header to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.magic)?;
        writer.write_u32::<LittleEndian>(self.table_length)?;
        writer.write_u16::<LittleEndian>(self.table_count)?;
        writer.write_all(&self.flags)?;
        Ok(())
    }

    /// Whether the tag is `vawt`.
    pub fn has_valid_magic(&self) -> bool {
        &self.magic == WT_MAGIC
    }

    pub fn is_sample(&self) -> bool {
        self.flags[0] & flags::IS_SAMPLE != 0
    }

    pub fn loop_sample(&self) -> bool {
        self.flags[0] & flags::LOOP_SAMPLE != 0
    }

    pub fn sample_format(&self) -> SampleFormat {
        if self.flags[0] & flags::INT16 != 0 {
            SampleFormat::Int16
        } else {
            SampleFormat::Float32
        }
    }

    /// Bytes per sample (2 or 4).
    pub fn sample_byte_width(&self) -> usize {
        self.sample_format().byte_width()
    }

    /// Bytes occupied by one table.
    pub fn table_size_bytes(&self) -> u64 {
        self.sample_byte_width() as u64 * u64::from(self.table_length)
    }

    /// Bytes occupied by all tables.
    pub fn payload_size_bytes(&self) -> u64 {
        self.table_size_bytes() * u64::from(self.table_count)
    }

    /// Expected size of the whole file.
    pub fn total_file_size(&self) -> u64 {
        self.payload_size_bytes() + WT_HEADER_SIZE as u64
    }

    pub fn exceeds_conventional_table_count(&self) -> bool {
        self.table_count > WT_CONVENTIONAL_MAX_TABLES
    }

    /// Fails unless the tables hold 16-bit integer samples.
    pub fn require_int16(&self) -> WtResult<()> {
        let width = self.sample_byte_width();
        if width != 2 {
            return Err(WtError::UnsupportedSampleWidth { width });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_header_write_layout() {
        let header = WtHeader::int16(2048, 4);
        let mut buf = Vec::new();
        header.write(&mut buf).unwrap();

        assert_eq!(buf.len(), WT_HEADER_SIZE);
        assert_eq!(&buf[0..4], WT_MAGIC);
        assert_eq!(&buf[4..8], &[0x00, 0x08, 0x00, 0x00]);
        assert_eq!(&buf[8..10], &[0x04, 0x00]);
        assert_eq!(&buf[10..12], &[0x04, 0x00]);
        assert_eq!(buf, header.to_bytes());
    }

    #[test]
    fn test_derived_sizes() {
        let header = WtHeader::int16(2048, 4);
        assert_eq!(header.sample_byte_width(), 2);
        assert_eq!(header.table_size_bytes(), 4096);
        assert_eq!(header.payload_size_bytes(), 16384);
        assert_eq!(header.total_file_size(), 16396);
    }

    #[test]
    fn test_float_flags() {
        let header = WtHeader::from_bytes(b"vawt\x00\x01\x00\x00\x02\x00\x03\x00");
        assert_eq!(header.table_length, 256);
        assert_eq!(header.table_count, 2);
        assert!(header.is_sample());
        assert!(header.loop_sample());
        assert_eq!(header.sample_format(), SampleFormat::Float32);
        assert_eq!(header.sample_format().name(), "float32");
        assert_eq!(header.payload_size_bytes(), 4 * 256 * 2);

        let err = header.require_int16().unwrap_err();
        assert!(matches!(err, WtError::UnsupportedSampleWidth { width: 4 }));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_reserved_flag_byte_preserved() {
        let bytes = *b"vawt\x10\x00\x00\x00\x01\x00\x0c\x7f";
        let header = WtHeader::from_bytes(&bytes);
        assert_eq!(header.flags, [0x0c, 0x7f]);
        assert_eq!(header.sample_format(), SampleFormat::Int16);
        assert_eq!(header.to_bytes(), bytes);
    }

    #[test]
    fn test_read_rejects_bad_magic_when_strict() {
        let bytes = *b"RIFF\x00\x08\x00\x00\x01\x00\x04\x00";
        let err = WtHeader::read(&mut &bytes[..], &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, WtError::BadMagic { found } if &found == b"RIFF"));

        let header = WtHeader::read(&mut &bytes[..], &ReadOptions::lenient()).unwrap();
        assert_eq!(header.table_length, 2048);
        assert!(!header.has_valid_magic());
    }

    #[test]
    fn test_read_short_input() {
        let bytes = b"vawt\x00\x08";
        let err = WtHeader::read(&mut &bytes[..], &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, WtError::TruncatedHeader));
    }

    #[test]
    fn test_read_leaves_reader_at_payload() {
        let mut data = WtHeader::int16(1, 1).to_bytes().to_vec();
        data.extend_from_slice(&[0xAA, 0xBB]);
        let mut reader = &data[..];
        WtHeader::read(&mut reader, &ReadOptions::default()).unwrap();
        assert_eq!(reader, &[0xAA, 0xBB]);
    }

    #[test]
    fn test_conventional_table_count() {
        assert!(!WtHeader::int16(64, 512).exceeds_conventional_table_count());
        assert!(WtHeader::int16(64, 513).exceeds_conventional_table_count());
    }
}
