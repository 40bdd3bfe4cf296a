//! Common test utilities for wavemix integration tests
//!
//! This module provides helper functions for building sample buffers and
//! WAV byte images shared by the test suites.

use wavemix::{CodecDescriptor, CodecParams, SampleBuffer, WavDescriptor};

// ============================================================================
// Descriptors and Sample Buffers
// ============================================================================

/// Mono unsigned 8-bit PCM descriptor
pub fn pcm8_descriptor(sample_rate: u32) -> CodecDescriptor {
    let params = CodecParams::new(sample_rate, 1, 8, false).expect("valid PCM-8 parameters");
    CodecDescriptor::Wav(WavDescriptor::new(params))
}

/// Mono 32-bit IEEE float descriptor
pub fn float32_descriptor(sample_rate: u32) -> CodecDescriptor {
    let params = CodecParams::new(sample_rate, 1, 32, true).expect("valid float32 parameters");
    CodecDescriptor::Wav(WavDescriptor::new(params))
}

/// Build a PCM-8 sample buffer from raw sample values
pub fn u8_buffer(sample_rate: u32, samples: &[u8]) -> SampleBuffer {
    SampleBuffer::from_data(pcm8_descriptor(sample_rate), samples.to_vec())
}

/// Build a float32 sample buffer from sample values
pub fn f32_buffer(sample_rate: u32, samples: &[f32]) -> SampleBuffer {
    let mut data = Vec::with_capacity(samples.len() * 4);
    for s in samples {
        data.extend_from_slice(&s.to_le_bytes());
    }
    SampleBuffer::from_data(float32_descriptor(sample_rate), data)
}

/// Build a float32 sine burst test tone
pub fn sine_f32(sample_rate: u32, samples: usize, frequency: f64) -> SampleBuffer {
    let mut values = Vec::with_capacity(samples);
    for i in 0..samples {
        let t = i as f64 / sample_rate as f64;
        let sample = (2.0 * std::f64::consts::PI * frequency * t).sin() * 0.5;
        values.push(sample as f32);
    }
    f32_buffer(sample_rate, &values)
}

/// Read float samples back out of a buffer's payload
pub fn f32_samples(buffer: &SampleBuffer) -> Vec<f32> {
    buffer
        .data()
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

// ============================================================================
// WAV Byte Images
// ============================================================================
//
// Field offsets in a canonical single-data-chunk image:
//
//   0..4    "RIFF"          24..28  sample rate
//   4..8    RIFF size       28..32  byte rate
//   8..12   "WAVE"          32..34  block align
//   12..16  "fmt "          34..36  bits per sample
//   16..20  fmt size        36..40  "data"
//   20..22  format code     40..44  data size
//   22..24  channels        44..    payload

/// Offset of the RIFF size field
pub const RIFF_SIZE_OFFSET: usize = 4;
/// Offset of the fmt chunk size field
pub const FMT_SIZE_OFFSET: usize = 16;
/// Offset of the data chunk size field
pub const DATA_SIZE_OFFSET: usize = 40;

/// Build a canonical single-data-chunk WAV image
pub fn build_wav(
    format_code: u16,
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
    payload: &[u8],
) -> Vec<u8> {
    let bytes_per_sample = (bits_per_sample / 8).max(1) as u32;
    let byte_rate = sample_rate * channels as u32 * bytes_per_sample;
    let block_align = channels * (bits_per_sample / 8);

    let mut bytes = Vec::with_capacity(44 + payload.len());
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
    bytes.extend_from_slice(&format_code.to_le_bytes());
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&byte_rate.to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&bits_per_sample.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

/// Build a mono PCM-8 image at 44.1 kHz, the common case in these tests
pub fn build_pcm8_wav(payload: &[u8]) -> Vec<u8> {
    build_wav(1, 1, 44100, 8, payload)
}

/// Build a mono float32 image at 44.1 kHz
pub fn build_float32_wav(samples: &[f32]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(samples.len() * 4);
    for s in samples {
        payload.extend_from_slice(&s.to_le_bytes());
    }
    build_wav(3, 1, 44100, 32, &payload)
}

/// Build a mono image whose chunk list after the fmt chunk is caller-chosen
///
/// Each entry is a chunk tag plus its payload; declared sizes are the
/// payload lengths and the RIFF size covers everything after the first
/// 8 bytes.
pub fn build_wav_with_chunks(
    format_code: u16,
    sample_rate: u32,
    bits_per_sample: u16,
    chunks: &[(&[u8; 4], &[u8])],
) -> Vec<u8> {
    let chunk_bytes: usize = chunks.iter().map(|(_, payload)| 8 + payload.len()).sum();
    let riff_size = 4 + 24 + chunk_bytes as u32;
    let bytes_per_sample = (bits_per_sample / 8).max(1) as u32;

    let mut bytes = Vec::with_capacity(8 + riff_size as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&riff_size.to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&format_code.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * bytes_per_sample).to_le_bytes());
    bytes.extend_from_slice(&(bits_per_sample / 8).to_le_bytes());
    bytes.extend_from_slice(&bits_per_sample.to_le_bytes());

    for (tag, payload) in chunks {
        bytes.extend_from_slice(*tag);
        bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        bytes.extend_from_slice(payload);
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_pcm8_wav_layout() {
        let image = build_pcm8_wav(&[1, 2, 3, 4]);
        assert_eq!(image.len(), 48);
        assert_eq!(&image[0..4], b"RIFF");
        assert_eq!(&image[8..12], b"WAVE");
        assert_eq!(&image[36..40], b"data");
        assert_eq!(u32::from_le_bytes([image[4], image[5], image[6], image[7]]), 40);
    }

    #[test]
    fn test_build_wav_with_chunks_sizes() {
        let image = build_wav_with_chunks(1, 8000, 8, &[(b"data", &[1, 2])]);
        // RIFF size covers WAVE + fmt chunk + one 10-byte data chunk
        assert_eq!(
            u32::from_le_bytes([image[4], image[5], image[6], image[7]]),
            38
        );
        assert_eq!(image.len(), 46);
    }

    #[test]
    fn test_sine_shape() {
        let buffer = sine_f32(8000, 16, 440.0);
        assert_eq!(buffer.sample_count(), 16);
        let samples = f32_samples(&buffer);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|s| s.abs() <= 0.5));
    }
}
