//! Codec descriptors and the negotiation match predicate
//!
//! A [`CodecDescriptor`] captures the negotiable parameters of one codec
//! configuration as exchanged with the signaling layer: the RTP payload type,
//! the codec name, the sampling rate, the channel count and an opaque format
//! parameter string. Two descriptors are compared with [`CodecDescriptor::matches`],
//! which implements the two-tier payload typing scheme of real-time transport:
//! payload types below 96 are globally pre-assigned and identified by number
//! alone, everything else is identified by name plus parameters.

use crate::error::{CodecError, Result};
use std::fmt;

/// First payload type of the dynamic range
///
/// Payload types 0-95 are statically assigned; 96-255 are negotiated
/// per-session and carry no global meaning.
pub const DYNAMIC_PAYLOAD_TYPE_START: u8 = 96;

/// Codec descriptor
///
/// Either *static-complete* (payload type < 96; name, rate and channels may
/// be unset) or *dynamic-complete* (payload type >= 96; name, rate and
/// channels all meaningfully set). Equality is defined only through
/// [`matches`](Self::matches) — the static branch deliberately ignores every
/// field but the payload type, so a field-by-field `PartialEq` would be
/// misleading.
#[derive(Debug, Clone, Default)]
pub struct CodecDescriptor {
    /// Payload type carried in each RTP packet
    pub payload_type: u8,
    /// Codec name, compared case-insensitively; meaningful for dynamic types
    pub name: String,
    /// Sampling rate in Hz
    pub sampling_rate: u16,
    /// Number of channels
    pub channel_count: u8,
    /// Codec dependent additional format parameters, never matched
    pub format: Option<String>,
}

impl CodecDescriptor {
    /// Create a descriptor with the given payload type and all other fields
    /// at their reset state
    pub fn new(payload_type: u8) -> Self {
        Self {
            payload_type,
            ..Self::default()
        }
    }

    /// PCMU (G.711 μ-law), static payload type 0
    pub fn pcmu() -> Self {
        Self::new(0)
            .with_name("PCMU")
            .with_sampling_rate(8000)
            .with_channel_count(1)
    }

    /// PCMA (G.711 A-law), static payload type 8
    pub fn pcma() -> Self {
        Self::new(8)
            .with_name("PCMA")
            .with_sampling_rate(8000)
            .with_channel_count(1)
    }

    /// G.722 wideband, static payload type 9
    pub fn g722() -> Self {
        Self::new(9)
            .with_name("G722")
            .with_sampling_rate(16000)
            .with_channel_count(1)
    }

    /// G.729, static payload type 18
    pub fn g729() -> Self {
        Self::new(18)
            .with_name("G729")
            .with_sampling_rate(8000)
            .with_channel_count(1)
    }

    /// Set the codec name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the sampling rate
    pub fn with_sampling_rate(mut self, sampling_rate: u16) -> Self {
        self.sampling_rate = sampling_rate;
        self
    }

    /// Set the channel count
    pub fn with_channel_count(mut self, channel_count: u8) -> Self {
        self.channel_count = channel_count;
        self
    }

    /// Set the codec dependent format parameters
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Reset all fields to the empty/zero state
    pub fn reset(&mut self) {
        self.payload_type = 0;
        self.name.clear();
        self.sampling_rate = 0;
        self.channel_count = 0;
        self.format = None;
    }

    /// Whether the payload type is in the statically assigned range (< 96)
    pub fn is_static(&self) -> bool {
        self.payload_type < DYNAMIC_PAYLOAD_TYPE_START
    }

    /// Whether the payload type is in the dynamically negotiated range (>= 96)
    pub fn is_dynamic(&self) -> bool {
        !self.is_static()
    }

    /// Match two codec descriptors
    ///
    /// If both payload types are in the static range, the numeric codes fully
    /// identify the codecs and nothing else is compared. Otherwise the names
    /// are compared with ASCII-only case folding together with sampling rate
    /// and channel count; the payload type numbers themselves are
    /// session-local in the dynamic range and may legitimately differ between
    /// two descriptions of the same codec.
    ///
    /// The predicate is symmetric and total; a descriptor with inconsistent
    /// state simply participates with whatever field values it holds.
    pub fn matches(&self, other: &CodecDescriptor) -> bool {
        if self.is_static() && other.is_static() {
            self.payload_type == other.payload_type
        } else {
            self.name.eq_ignore_ascii_case(&other.name)
                && self.sampling_rate == other.sampling_rate
                && self.channel_count == other.channel_count
        }
    }

    /// Validate the descriptor against the completeness invariant
    ///
    /// A dynamic-range descriptor must carry a non-empty name, a non-zero
    /// sampling rate and a non-zero channel count to be negotiable. A
    /// static-range descriptor is identified by number alone, so its other
    /// fields are not checked.
    pub fn validate(&self) -> Result<()> {
        if self.is_static() {
            return Ok(());
        }
        if self.name.is_empty() {
            return Err(CodecError::invalid_descriptor(format!(
                "dynamic payload type {} with empty codec name",
                self.payload_type
            )));
        }
        if self.sampling_rate == 0 {
            return Err(CodecError::invalid_descriptor(format!(
                "codec {} with zero sampling rate",
                self.name
            )));
        }
        if self.channel_count == 0 {
            return Err(CodecError::invalid_descriptor(format!(
                "codec {} with zero channel count",
                self.name
            )));
        }
        Ok(())
    }
}

impl fmt::Display for CodecDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (PT:{}, {}Hz, {}ch)",
            self.name, self.payload_type, self.sampling_rate, self.channel_count
        )
    }
}
