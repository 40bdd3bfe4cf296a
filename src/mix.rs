//! Two-input level mixing
//!
//! Mixing combines two decoded streams sample by sample, scaling each input
//! by its own gain level. The output spans the longer input; past the end of
//! the shorter one the missing samples are treated as silence.

use crate::codec::sample::SampleBuffer;
use crate::codec::SampleFormat;
use crate::error::{Error, Result};

/// Mix two sample buffers into a new buffer with per-input gain levels
///
/// Both inputs must carry bit-for-bit identical descriptors and be mono.
/// Float samples are combined as `in1*level1 + in2*level2` with no clamping.
/// Unsigned 8-bit samples are combined the same way on raw values, then
/// rounded, shifted down by 128 and clamped to the valid range on both ends.
pub fn mix(in1: &SampleBuffer, in2: &SampleBuffer, level1: f32, level2: f32) -> Result<SampleBuffer> {
    if in1.descriptor() != in2.descriptor() {
        return Err(Error::format_mismatch(
            "Mix inputs have different descriptors",
        ));
    }
    if in1.params().channels() != 1 {
        return Err(Error::format_mismatch("Mix inputs must be mono"));
    }

    let out_count = in1.sample_count().max(in2.sample_count());
    let mut out = SampleBuffer::try_allocate(*in1.descriptor(), out_count)?;

    match in1.sample_format() {
        SampleFormat::F32 => mix_f32(&mut out, in1, in2, level1, level2),
        SampleFormat::U8 => mix_u8(&mut out, in1, in2, level1, level2),
    }

    Ok(out)
}

/// Float sample at `index`, or silence past the end of the buffer
fn sample_f32(buffer: &SampleBuffer, index: u64) -> f32 {
    if index >= buffer.sample_count() {
        return 0.0;
    }

    let data = buffer.data();
    let offset = index as usize * 4;
    f32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Raw unsigned sample at `index`, or silence past the end of the buffer
fn sample_u8(buffer: &SampleBuffer, index: u64) -> f32 {
    if index >= buffer.sample_count() {
        return 0.0;
    }
    buffer.data()[index as usize] as f32
}

fn mix_f32(out: &mut SampleBuffer, in1: &SampleBuffer, in2: &SampleBuffer, level1: f32, level2: f32) {
    for i in 0..out.sample_count() {
        let mixed = sample_f32(in1, i) * level1 + sample_f32(in2, i) * level2;
        let offset = i as usize * 4;
        out.data_mut()[offset..offset + 4].copy_from_slice(&mixed.to_le_bytes());
    }
}

fn mix_u8(out: &mut SampleBuffer, in1: &SampleBuffer, in2: &SampleBuffer, level1: f32, level2: f32) {
    for i in 0..out.sample_count() {
        let raw = sample_u8(in1, i) * level1 + sample_u8(in2, i) * level2;
        let mixed = (raw.round() as i64 - 128).clamp(0, 255);
        out.data_mut()[i as usize] = mixed as u8;
    }
}
