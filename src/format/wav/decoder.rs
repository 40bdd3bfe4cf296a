//! WAV file decoder implementation

use super::{ChunkHeader, FormatTag, DATA_CHUNK, FMT_CHUNK, RIFF_MAGIC, WAVE_MAGIC};
use crate::codec::sample::SampleBuffer;
use crate::codec::{CodecDescriptor, CodecParams, WavDescriptor};
use crate::error::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

/// Parser state carried across the decode pass
struct WavParser<'a, R> {
    reader: &'a mut R,
    stream_len: u64,
    declared_total_size: u32,
}

impl<'a, R: Read + Seek> WavParser<'a, R> {
    /// Measure the stream and rewind to the start
    fn new(reader: &'a mut R) -> Result<Self> {
        let stream_len = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;
        tracing::trace!("Input stream length: {} bytes", stream_len);

        Ok(WavParser {
            reader,
            stream_len,
            declared_total_size: 0,
        })
    }

    /// Parse the 12-byte RIFF chunk descriptor
    fn parse_riff_header(&mut self) -> Result<()> {
        let header = ChunkHeader::read(self.reader)?;
        tracing::trace!("Chunk ID: {}", String::from_utf8_lossy(&header.id));
        if &header.id != RIFF_MAGIC {
            return Err(Error::format_mismatch("RIFF chunk descriptor not found"));
        }

        self.declared_total_size = header.size;
        tracing::trace!("Chunk size: {}", self.declared_total_size);

        let mut riff_type = [0u8; 4];
        self.reader.read_exact(&mut riff_type)?;
        tracing::trace!("RIFF type: {}", String::from_utf8_lossy(&riff_type));
        if &riff_type != WAVE_MAGIC {
            return Err(Error::format_mismatch("RIFF type is not WAVE"));
        }

        Ok(())
    }

    /// Parse the fmt subchunk into validated codec parameters
    fn parse_fmt_chunk(&mut self) -> Result<CodecParams> {
        let header = ChunkHeader::read(self.reader)?;
        tracing::trace!("Subchunk ID: {}", String::from_utf8_lossy(&header.id));
        if &header.id != FMT_CHUNK {
            return Err(Error::format_mismatch("fmt chunk not found"));
        }

        tracing::trace!("Subchunk size: {}", header.size);
        if header.size > self.declared_total_size {
            return Err(Error::size_inconsistency(format!(
                "fmt chunk size {} exceeds declared RIFF size {}",
                header.size, self.declared_total_size
            )));
        }

        let format_tag = FormatTag::from(self.reader.read_u16::<LittleEndian>()?);
        tracing::trace!("Audio format: {:?}", format_tag);
        let is_float = match format_tag {
            FormatTag::Pcm => false,
            FormatTag::IeeeFloat => true,
            FormatTag::Unknown(code) => {
                return Err(Error::unsupported(format!(
                    "Unsupported sample format: {}",
                    code
                )));
            }
        };

        let channels = self.reader.read_u16::<LittleEndian>()?;
        tracing::trace!("Number of channels: {}", channels);
        if channels != 1 {
            return Err(Error::unsupported(format!(
                "Unsupported channel count: {}",
                channels
            )));
        }

        let sample_rate = self.reader.read_u32::<LittleEndian>()?;
        tracing::trace!("Sample rate: {}", sample_rate);

        // Byte rate and block align are derivable from the other fields;
        // read them to stay in step with the stream and discard the values
        let byte_rate = self.reader.read_u32::<LittleEndian>()?;
        tracing::trace!("Byte rate: {}", byte_rate);
        let block_align = self.reader.read_u16::<LittleEndian>()?;
        tracing::trace!("Block align: {}", block_align);

        let bits_per_sample = self.reader.read_u16::<LittleEndian>()?;
        tracing::trace!("Bits per sample: {}", bits_per_sample);

        CodecParams::new(sample_rate, channels as u8, bits_per_sample, is_float)
    }

    /// Visit one chunk; append its payload when it is a data chunk
    fn parse_next_chunk(&mut self, buffer: &mut SampleBuffer) -> Result<()> {
        let header = ChunkHeader::read(self.reader)?;
        tracing::trace!("Subchunk ID: {}", String::from_utf8_lossy(&header.id));
        tracing::trace!("Subchunk size: {}", header.size);

        if &header.id != DATA_CHUNK {
            // Not the chunk type we are after; skip its payload and keep looking
            self.reader.seek(SeekFrom::Current(i64::from(header.size)))?;
            return Ok(());
        }

        if header.size >= self.declared_total_size {
            return Err(Error::size_inconsistency(format!(
                "data chunk size {} too large for declared RIFF size {}",
                header.size, self.declared_total_size
            )));
        }

        buffer.append_from_reader(self.reader, header.size)
    }

    fn position(&mut self) -> Result<u64> {
        Ok(self.reader.stream_position()?)
    }
}

/// Decode a complete WAV stream into a sample buffer
///
/// The stream length is measured up front and bounds the chunk scan; every
/// chunk after the header is visited and the payloads of all data chunks are
/// concatenated in order. Parsing stops at the first malformed field.
pub fn decode<R: Read + Seek>(reader: &mut R) -> Result<SampleBuffer> {
    let mut parser = WavParser::new(reader)?;

    parser.parse_riff_header()?;
    let params = parser.parse_fmt_chunk()?;

    let descriptor = CodecDescriptor::Wav(WavDescriptor::new(params));
    let mut buffer = SampleBuffer::new(descriptor);

    while parser.position()? < parser.stream_len {
        parser.parse_next_chunk(&mut buffer)?;
    }

    Ok(buffer)
}
