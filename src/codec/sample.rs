//! Sample buffer for decoded audio

use crate::codec::{CodecDescriptor, CodecParams, SampleFormat};
use crate::error::{Error, Result};
use std::io::Read;

/// A run of decoded samples with exclusive ownership of the payload
///
/// The payload is the raw little-endian byte image of the samples and always
/// holds at least `sample_count` whole samples. Buffers are never shared;
/// cloning copies the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    descriptor: CodecDescriptor,
    sample_count: u64,
    data: Vec<u8>,
}

impl SampleBuffer {
    /// Create an empty buffer for the given descriptor
    pub fn new(descriptor: CodecDescriptor) -> Self {
        SampleBuffer {
            descriptor,
            sample_count: 0,
            data: Vec::new(),
        }
    }

    /// Create a buffer holding caller-supplied sample bytes
    ///
    /// The sample count is the number of whole samples `data` contains;
    /// trailing bytes short of a full sample are kept but not counted.
    pub fn from_data(descriptor: CodecDescriptor, data: Vec<u8>) -> Self {
        let sample_count = data.len() as u64 / descriptor.params().bytes_per_sample() as u64;
        SampleBuffer {
            descriptor,
            sample_count,
            data,
        }
    }

    /// Create a zero-filled buffer holding `sample_count` samples
    ///
    /// The fill is zero bytes regardless of format. Callers that need
    /// unsigned 8-bit silence at 128 must write it themselves.
    pub fn try_allocate(descriptor: CodecDescriptor, sample_count: u64) -> Result<Self> {
        let byte_len = sample_count
            .checked_mul(descriptor.params().bytes_per_sample() as u64)
            .ok_or(Error::Allocation(u64::MAX))?;
        let len = usize::try_from(byte_len).map_err(|_| Error::Allocation(byte_len))?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::Allocation(byte_len))?;
        data.resize(len, 0);

        Ok(SampleBuffer {
            descriptor,
            sample_count,
            data,
        })
    }

    /// Append `byte_len` bytes read from `reader` to the payload
    ///
    /// The sample count advances by the number of whole samples the new bytes
    /// contain. A short read fails the operation; the buffer should then be
    /// discarded.
    pub fn append_from_reader<R: Read>(&mut self, reader: &mut R, byte_len: u32) -> Result<()> {
        let old_len = self.data.len();
        let add = byte_len as usize;

        self.data
            .try_reserve_exact(add)
            .map_err(|_| Error::Allocation(byte_len as u64))?;
        self.data.resize(old_len + add, 0);
        reader.read_exact(&mut self.data[old_len..])?;

        self.sample_count += u64::from(byte_len) / self.params().bytes_per_sample() as u64;
        Ok(())
    }

    /// Descriptor for the contained samples
    pub fn descriptor(&self) -> &CodecDescriptor {
        &self.descriptor
    }

    /// Common codec parameters
    pub fn params(&self) -> &CodecParams {
        self.descriptor.params()
    }

    /// In-memory sample format
    pub fn sample_format(&self) -> SampleFormat {
        self.params().sample_format()
    }

    /// Number of whole samples held
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Raw little-endian payload
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the payload for in-place sample writes
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Payload length in bytes
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// True when no samples are held
    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// Playback duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.sample_count as f64 / self.params().sample_rate() as f64
    }
}
