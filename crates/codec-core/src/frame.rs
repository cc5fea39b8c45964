//! Codec frames and fixed time base frame sizing
//!
//! All sizing operates on a fixed 10 ms frame time base. The arithmetic is
//! truncating integer arithmetic, kept in the exact operation order expected
//! by existing peers; a rate that does not divide evenly is silently
//! truncated, never rounded, so buffer sizes stay bit-identical across
//! implementations. Zero inputs simply yield a size of zero.

use crate::descriptor::CodecDescriptor;
use bytes::Bytes;

/// Codec frame time base in msec
pub const FRAME_TIME_BASE_MS: usize = 10;

/// Bytes per sample for linear PCM
pub const LINEAR_BYTES_PER_SAMPLE: usize = 2;

/// Bits per sample for linear PCM
pub const LINEAR_BITS_PER_SAMPLE: u8 = 16;

/// Codec attributes used for encoded frame sizing
///
/// Decoded linear PCM is fixed at 16 bits per sample, so only the encoded
/// representation needs a per-codec width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecAttribs {
    /// Bits per sample of the encoded representation
    pub bits_per_sample: u8,
}

impl CodecAttribs {
    /// Create codec attributes with the given encoded sample width
    pub fn new(bits_per_sample: u8) -> Self {
        Self { bits_per_sample }
    }
}

/// Calculate the encoded frame size in bytes for one 10 ms frame
pub fn encoded_frame_size(descriptor: &CodecDescriptor, attribs: &CodecAttribs) -> usize {
    // 1000 - msec per sec, 8 - bits per byte
    descriptor.channel_count as usize
        * attribs.bits_per_sample as usize
        * FRAME_TIME_BASE_MS
        * descriptor.sampling_rate as usize
        / 1000
        / 8
}

/// Calculate the sample count of one 10 ms frame (timestamp units)
pub fn frame_sample_count(descriptor: &CodecDescriptor) -> usize {
    descriptor.channel_count as usize * FRAME_TIME_BASE_MS * descriptor.sampling_rate as usize
        / 1000
}

/// Calculate the linear (16-bit PCM) frame size in bytes for one 10 ms frame
pub fn linear_frame_size(sampling_rate: u16, channel_count: u8) -> usize {
    channel_count as usize * LINEAR_BYTES_PER_SAMPLE * FRAME_TIME_BASE_MS * sampling_rate as usize
        / 1000
}

/// One fixed-duration frame of audio data
///
/// The buffer is opaque to this crate: it may hold encoded or linear data,
/// produced and consumed by the codec engines. Buffers are sized with the
/// functions above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecFrame {
    /// Raw buffer, which may contain encoded or decoded data
    pub buffer: Bytes,
}

impl CodecFrame {
    /// Wrap an existing buffer as a codec frame
    pub fn new(buffer: Bytes) -> Self {
        Self { buffer }
    }

    /// Allocate a zero-filled frame of the given size in bytes
    pub fn zeroed(size: usize) -> Self {
        Self {
            buffer: Bytes::from(vec![0u8; size]),
        }
    }

    /// Frame size in bytes
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the frame carries no data
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(sampling_rate: u16, channel_count: u8) -> CodecDescriptor {
        CodecDescriptor::new(96)
            .with_name("test")
            .with_sampling_rate(sampling_rate)
            .with_channel_count(channel_count)
    }

    #[test]
    fn test_narrowband_mono_sizing() {
        let d = descriptor(8000, 1);
        assert_eq!(encoded_frame_size(&d, &CodecAttribs::new(16)), 160);
        assert_eq!(frame_sample_count(&d), 80);
        assert_eq!(linear_frame_size(8000, 1), 160);
    }

    #[test]
    fn test_wideband_stereo_sizing() {
        let d = descriptor(16000, 2);
        assert_eq!(encoded_frame_size(&d, &CodecAttribs::new(16)), 640);
        assert_eq!(frame_sample_count(&d), 320);
        assert_eq!(linear_frame_size(16000, 2), 640);
    }

    #[test]
    fn test_sub_byte_widths() {
        // 8-bit G.711 and 4-bit ADPCM style widths at 8 kHz
        let d = descriptor(8000, 1);
        assert_eq!(encoded_frame_size(&d, &CodecAttribs::new(8)), 80);
        assert_eq!(encoded_frame_size(&d, &CodecAttribs::new(4)), 40);
    }

    #[test]
    fn test_truncation_is_floor_not_round() {
        // 11025 Hz: 10ms holds 110.25 samples; the .25 truncates
        let d = descriptor(11025, 1);
        assert_eq!(frame_sample_count(&d), 110);
        // 1 * 16 * 10 * 11025 / 1000 / 8 = 1764 / 8 = 220 (220.5 floored)
        assert_eq!(encoded_frame_size(&d, &CodecAttribs::new(16)), 220);
        assert_eq!(linear_frame_size(11025, 1), 220);
    }

    #[test]
    fn test_zero_inputs_yield_zero() {
        let d = descriptor(0, 0);
        assert_eq!(encoded_frame_size(&d, &CodecAttribs::new(16)), 0);
        assert_eq!(frame_sample_count(&d), 0);
        assert_eq!(linear_frame_size(0, 1), 0);
        assert_eq!(linear_frame_size(8000, 0), 0);
    }

    #[test]
    fn test_zeroed_frame() {
        let size = linear_frame_size(8000, 1);
        let frame = CodecFrame::zeroed(size);
        assert_eq!(frame.len(), 160);
        assert!(!frame.is_empty());
        assert!(frame.buffer.iter().all(|&b| b == 0));
    }
}
