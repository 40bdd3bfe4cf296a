//! WAV file encoder implementation

use super::{
    ChunkHeader, FormatTag, DATA_CHUNK, FMT_CHUNK, FMT_CHUNK_SIZE, HEADER_OVERHEAD, RIFF_MAGIC,
    WAVE_MAGIC,
};
use crate::codec::sample::SampleBuffer;
use crate::error::Result;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

/// Encode a sample buffer as a complete WAV stream
///
/// The RIFF descriptor, fmt chunk and data chunk are written in order with
/// all sizes computed up front, so the writer never needs to seek. The
/// payload bytes are written verbatim.
pub fn encode<W: Write>(writer: &mut W, buffer: &SampleBuffer) -> Result<()> {
    write_riff_header(writer, buffer)?;
    write_fmt_chunk(writer, buffer)?;
    write_data_chunk(writer, buffer)?;
    Ok(())
}

/// Payload length in bytes for the whole samples the buffer holds
fn payload_len(buffer: &SampleBuffer) -> u64 {
    buffer.sample_count() * u64::from(buffer.params().bytes_per_sample())
}

fn write_riff_header<W: Write>(writer: &mut W, buffer: &SampleBuffer) -> Result<()> {
    let size = (u64::from(HEADER_OVERHEAD) + payload_len(buffer)) as u32;
    tracing::trace!("Chunk size: {}", size);

    ChunkHeader {
        id: *RIFF_MAGIC,
        size,
    }
    .write(writer)?;
    writer.write_all(WAVE_MAGIC)?;
    Ok(())
}

fn write_fmt_chunk<W: Write>(writer: &mut W, buffer: &SampleBuffer) -> Result<()> {
    let params = buffer.params();

    ChunkHeader {
        id: *FMT_CHUNK,
        size: FMT_CHUNK_SIZE,
    }
    .write(writer)?;

    let format_tag = if params.is_float() {
        FormatTag::IeeeFloat
    } else {
        FormatTag::Pcm
    };
    tracing::trace!("Audio format: {:?}", format_tag);

    writer.write_u16::<LittleEndian>(u16::from(format_tag))?;
    writer.write_u16::<LittleEndian>(u16::from(params.channels()))?;
    writer.write_u32::<LittleEndian>(params.sample_rate())?;
    writer.write_u32::<LittleEndian>(params.byte_rate())?;
    writer.write_u16::<LittleEndian>(params.block_align())?;
    writer.write_u16::<LittleEndian>(params.bits_per_sample())?;
    Ok(())
}

fn write_data_chunk<W: Write>(writer: &mut W, buffer: &SampleBuffer) -> Result<()> {
    let len = payload_len(buffer);
    tracing::trace!("Subchunk size: {}", len);

    ChunkHeader {
        id: *DATA_CHUNK,
        size: len as u32,
    }
    .write(writer)?;
    writer.write_all(&buffer.data()[..len as usize])?;
    Ok(())
}
