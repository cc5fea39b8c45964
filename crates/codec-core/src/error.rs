//! Error handling for codec description and negotiation
//!
//! Nothing in this crate performs I/O, so every error is a plain value the
//! caller can branch on. Matching and sizing are total functions and never
//! fail; errors only arise from list capacity and boundary validation.

#![allow(missing_docs)]

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error type for codec descriptor and list operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Append attempted on a full codec list
    #[error("Codec list capacity exceeded: max {max_count} descriptors")]
    CapacityExceeded { max_count: usize },

    /// Descriptor state violates the static/dynamic completeness invariant
    #[error("Invalid codec descriptor: {details}")]
    InvalidDescriptor { details: String },

    /// Dynamic registration attempted against a static-range payload type
    #[error("Payload type conflict: {payload_type} is in the static range")]
    PayloadTypeConflict { payload_type: u8 },

    /// Codec name not present in the registry
    #[error("Unknown codec: {name}")]
    UnknownCodec { name: String },
}

impl CodecError {
    /// Create a new invalid descriptor error
    pub fn invalid_descriptor(details: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            details: details.into(),
        }
    }

    /// Create a new unknown codec error
    pub fn unknown_codec(name: impl Into<String>) -> Self {
        Self::UnknownCodec { name: name.into() }
    }

    /// Check if this error is recoverable
    ///
    /// A full list or an unknown codec is an expected negotiation outcome the
    /// caller can route around; a malformed descriptor or a static-range
    /// payload type conflict points at a caller bug.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::CapacityExceeded { .. } | Self::UnknownCodec { .. } => true,
            Self::InvalidDescriptor { .. } | Self::PayloadTypeConflict { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CodecError::invalid_descriptor("empty name");
        assert!(matches!(err, CodecError::InvalidDescriptor { .. }));
    }

    #[test]
    fn test_error_recoverability() {
        assert!(CodecError::CapacityExceeded { max_count: 4 }.is_recoverable());
        assert!(CodecError::unknown_codec("AMR").is_recoverable());
        assert!(!CodecError::invalid_descriptor("zero rate").is_recoverable());
        assert!(!CodecError::PayloadTypeConflict { payload_type: 8 }.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = CodecError::CapacityExceeded { max_count: 3 };
        let display = format!("{}", err);
        assert!(display.contains("max 3"));
    }
}
