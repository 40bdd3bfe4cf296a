//! WAV audio format support
//!
//! This module implements RIFF/WAV file format parsing and writing.
//! WAV is a simple uncompressed audio format widely used for audio interchange.

pub mod decoder;
pub mod encoder;

pub use decoder::decode;
pub use encoder::encode;

use crate::error::Result;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// WAV format magic numbers
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_CHUNK: &[u8; 4] = b"fmt ";
pub const DATA_CHUNK: &[u8; 4] = b"data";

/// Size of the fmt chunk payload in bytes
pub const FMT_CHUNK_SIZE: u32 = 16;

/// Byte cost of the WAVE tag plus the fmt and data chunk headers
pub const HEADER_OVERHEAD: u32 = 36;

/// WAV format tag identifying the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// PCM (uncompressed)
    Pcm,
    /// IEEE Float
    IeeeFloat,
    /// Unknown format
    Unknown(u16),
}

impl From<u16> for FormatTag {
    fn from(val: u16) -> Self {
        match val {
            0x0001 => FormatTag::Pcm,
            0x0003 => FormatTag::IeeeFloat,
            other => FormatTag::Unknown(other),
        }
    }
}

impl From<FormatTag> for u16 {
    fn from(tag: FormatTag) -> Self {
        match tag {
            FormatTag::Pcm => 0x0001,
            FormatTag::IeeeFloat => 0x0003,
            FormatTag::Unknown(val) => val,
        }
    }
}

/// Chunk header (4 byte ID + 4 byte size)
#[derive(Debug, Clone, Copy)]
pub struct ChunkHeader {
    pub id: [u8; 4],
    pub size: u32,
}

impl ChunkHeader {
    /// Read a chunk header from a stream
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut id = [0u8; 4];
        reader.read_exact(&mut id)?;
        let size = reader.read_u32::<LittleEndian>()?;
        Ok(ChunkHeader { id, size })
    }

    /// Write a chunk header to a stream
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.id)?;
        writer.write_u32::<LittleEndian>(self.size)?;
        Ok(())
    }
}
