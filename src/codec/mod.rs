//! Codec descriptors and sample storage
//!
//! A decoded stream is described by a `CodecDescriptor`, a tagged enum with
//! one variant per codec family. Every variant embeds the same `CodecParams`
//! record, reachable through `CodecDescriptor::params()` regardless of the
//! variant, so container-agnostic code never matches on the family.

pub mod sample;

pub use sample::SampleBuffer;

use crate::error::{Error, Result};
use std::fmt;

/// Codec family identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecKind {
    /// RIFF/WAVE container audio
    Wav,
}

/// Audio sample format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// Unsigned 8-bit PCM, silence at 128
    U8,
    /// 32-bit IEEE float
    F32,
}

impl SampleFormat {
    /// Get the size in bytes of one sample
    pub fn sample_size(&self) -> usize {
        match self {
            SampleFormat::U8 => 1,
            SampleFormat::F32 => 4,
        }
    }

    /// Check if this is a floating point format
    pub fn is_float(&self) -> bool {
        matches!(self, SampleFormat::F32)
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleFormat::U8 => "u8",
            SampleFormat::F32 => "f32",
        };
        write!(f, "{}", name)
    }
}

/// Stream parameters shared by every codec family
///
/// Only mono streams in unsigned 8-bit PCM or 32-bit IEEE float are
/// representable; `new` rejects everything else, so a value of this type is
/// always a playable configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecParams {
    sample_rate: u32,
    bits_per_sample: u16,
    channels: u8,
    is_float: bool,
}

impl CodecParams {
    /// Validate and build a parameter set
    pub fn new(sample_rate: u32, channels: u8, bits_per_sample: u16, is_float: bool) -> Result<Self> {
        if channels != 1 {
            return Err(Error::unsupported(format!(
                "Unsupported channel count: {}",
                channels
            )));
        }

        match (is_float, bits_per_sample) {
            (false, 8) | (true, 32) => Ok(CodecParams {
                sample_rate,
                bits_per_sample,
                channels,
                is_float,
            }),
            _ => Err(Error::unsupported(format!(
                "Unsupported bits per sample: {} (float: {})",
                bits_per_sample, is_float
            ))),
        }
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bits per sample (8 or 32)
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Number of channels (always 1)
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// True for IEEE float samples, false for unsigned PCM
    pub fn is_float(&self) -> bool {
        self.is_float
    }

    /// Get the in-memory sample format
    pub fn sample_format(&self) -> SampleFormat {
        if self.is_float {
            SampleFormat::F32
        } else {
            SampleFormat::U8
        }
    }

    /// Bytes per sample for a single channel
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Average bytes per second
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.channels as u32 * self.bytes_per_sample() as u32
    }

    /// Bytes per frame across all channels
    pub fn block_align(&self) -> u16 {
        self.channels as u16 * self.bytes_per_sample()
    }
}

/// WAV-specific descriptor data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavDescriptor {
    params: CodecParams,
}

impl WavDescriptor {
    /// Create a WAV descriptor from validated parameters
    pub fn new(params: CodecParams) -> Self {
        WavDescriptor { params }
    }

    /// Common codec parameters
    pub fn params(&self) -> &CodecParams {
        &self.params
    }
}

/// Descriptor for any supported codec family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecDescriptor {
    /// RIFF/WAVE audio
    Wav(WavDescriptor),
}

impl CodecDescriptor {
    /// Codec family of this descriptor
    pub fn kind(&self) -> CodecKind {
        match self {
            CodecDescriptor::Wav(_) => CodecKind::Wav,
        }
    }

    /// Common parameters independent of the codec family
    pub fn params(&self) -> &CodecParams {
        match self {
            CodecDescriptor::Wav(d) => d.params(),
        }
    }
}
