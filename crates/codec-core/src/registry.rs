//! Payload type registry
//!
//! Maps between codec names and RTP payload types for one signaling scope.
//! The static RFC 3551 assignments the media engine ships are seeded at
//! creation; dynamic payload types are registered as negotiation discovers
//! them and may be replaced when a session re-negotiates.

use crate::descriptor::{CodecDescriptor, DYNAMIC_PAYLOAD_TYPE_START};
use crate::error::{CodecError, Result};
use std::collections::HashMap;
use tracing::{debug, warn};

/// One registered codec entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCodec {
    /// Codec name as it appears in signaling
    pub name: String,
    /// Assigned payload type
    pub payload_type: u8,
    /// Sampling rate in Hz
    pub sampling_rate: u16,
    /// Number of channels
    pub channel_count: u8,
}

/// Registry of codec name / payload type assignments
///
/// Keyed by payload type, which is unique within a scope; names are looked
/// up with ASCII case folding since signaling peers disagree on casing.
#[derive(Debug, Clone)]
pub struct CodecRegistry {
    entries: HashMap<u8, RegisteredCodec>,
}

impl CodecRegistry {
    /// Create a registry seeded with the static RFC 3551 assignments
    pub fn new() -> Self {
        let mut registry = Self {
            entries: HashMap::new(),
        };
        for descriptor in [
            CodecDescriptor::pcmu(),
            CodecDescriptor::pcma(),
            CodecDescriptor::g722(),
            CodecDescriptor::g729(),
        ] {
            registry.insert(&descriptor);
        }
        debug!("codec registry seeded with {} static codecs", registry.len());
        registry
    }

    fn insert(&mut self, descriptor: &CodecDescriptor) {
        self.entries.insert(
            descriptor.payload_type,
            RegisteredCodec {
                name: descriptor.name.clone(),
                payload_type: descriptor.payload_type,
                sampling_rate: descriptor.sampling_rate,
                channel_count: descriptor.channel_count,
            },
        );
    }

    /// Register a dynamically negotiated codec
    ///
    /// Re-registering an occupied dynamic payload type replaces the previous
    /// entry, which happens when a session re-negotiates.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::PayloadTypeConflict`] if the payload type is in
    /// the static range, and [`CodecError::InvalidDescriptor`] if the entry
    /// is not dynamic-complete.
    pub fn register_dynamic(
        &mut self,
        name: impl Into<String>,
        payload_type: u8,
        sampling_rate: u16,
        channel_count: u8,
    ) -> Result<()> {
        if payload_type < DYNAMIC_PAYLOAD_TYPE_START {
            warn!(
                payload_type,
                "rejecting dynamic registration against static-range payload type"
            );
            return Err(CodecError::PayloadTypeConflict { payload_type });
        }
        let descriptor = CodecDescriptor::new(payload_type)
            .with_name(name)
            .with_sampling_rate(sampling_rate)
            .with_channel_count(channel_count);
        descriptor.validate()?;

        if let Some(previous) = self.entries.get(&payload_type) {
            debug!(
                payload_type,
                previous = %previous.name,
                new = %descriptor.name,
                "replacing dynamic payload type registration"
            );
        }
        self.insert(&descriptor);
        Ok(())
    }

    /// Look up an entry by codec name, case-insensitively
    pub fn lookup_name(&self, name: &str) -> Option<&RegisteredCodec> {
        self.entries
            .values()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Look up an entry by payload type
    pub fn lookup_payload_type(&self, payload_type: u8) -> Option<&RegisteredCodec> {
        self.entries.get(&payload_type)
    }

    /// Mint a descriptor for a registered codec name
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownCodec`] if the name is not registered.
    pub fn descriptor_for(&self, name: &str) -> Result<CodecDescriptor> {
        let entry = self
            .lookup_name(name)
            .ok_or_else(|| CodecError::unknown_codec(name))?;
        Ok(CodecDescriptor::new(entry.payload_type)
            .with_name(entry.name.clone())
            .with_sampling_rate(entry.sampling_rate)
            .with_channel_count(entry.channel_count))
    }

    /// All registered payload types in ascending order
    pub fn payload_types(&self) -> Vec<u8> {
        let mut payload_types: Vec<u8> = self.entries.keys().copied().collect();
        payload_types.sort_unstable();
        payload_types
    }

    /// Number of registered codecs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all dynamic registrations, keeping the static seeds
    pub fn clear_dynamic(&mut self) {
        self.entries
            .retain(|&payload_type, _| payload_type < DYNAMIC_PAYLOAD_TYPE_START);
        debug!("cleared dynamic payload type registrations");
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}
