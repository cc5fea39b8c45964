//! # Codec-Core: Codec Description & Negotiation Primitives
//!
//! This crate answers the two questions the rest of the Tandem media server
//! asks about codecs: "do these two codec descriptions refer to the same
//! configuration?" and "how many bytes or samples does one 10 ms frame of
//! this codec occupy?". Session negotiation builds its offer/answer scans on
//! the match predicate, and every media frame buffer downstream is sized with
//! the arithmetic here, so both are kept small, pure and total.
//!
//! ## What's here
//!
//! - [`CodecDescriptor`]: the negotiable parameter set identifying one codec
//!   configuration, with the static/dynamic payload type match predicate
//! - [`CodecList`]: a capacity-bounded, insertion-ordered codec set for one
//!   negotiation scope
//! - [`frame`]: fixed 10 ms time base frame sizing and the opaque
//!   [`CodecFrame`] buffer
//! - [`CodecRegistry`]: payload type / codec name assignments per signaling
//!   scope
//!
//! ## What's not
//!
//! Encode/decode engines, RTP transport and SDP offer/answer live in their
//! own crates; this crate only supplies the equality predicate and sizing
//! primitives they consume.
//!
//! ## Usage
//!
//! ```rust
//! use codec_core::{CodecDescriptor, CodecList};
//!
//! let mut supported = CodecList::new(4);
//! supported.try_append(CodecDescriptor::pcmu())?;
//! supported.try_append(
//!     CodecDescriptor::new(96)
//!         .with_name("opus")
//!         .with_sampling_rate(48000)
//!         .with_channel_count(2),
//! )?;
//!
//! // A peer offers opus under a different dynamic payload type
//! let offer = CodecDescriptor::new(111)
//!     .with_name("OPUS")
//!     .with_sampling_rate(48000)
//!     .with_channel_count(2);
//! let negotiated = supported.find_match(&offer).expect("opus is supported");
//!
//! // Size one 10ms frame buffer for the negotiated codec
//! let bytes = codec_core::frame::linear_frame_size(
//!     negotiated.sampling_rate,
//!     negotiated.channel_count,
//! );
//! assert_eq!(bytes, 1920);
//! # Ok::<(), codec_core::CodecError>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod descriptor;
pub mod error;
pub mod frame;
pub mod list;
pub mod registry;

// Re-export commonly used types
pub use descriptor::{CodecDescriptor, DYNAMIC_PAYLOAD_TYPE_START};
pub use error::{CodecError, Result};
pub use frame::{CodecAttribs, CodecFrame};
pub use list::CodecList;
pub use registry::{CodecRegistry, RegisteredCodec};

/// Version information for the codec library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the codec library
///
/// Installs a default tracing subscriber if none is set. Safe to call
/// multiple times.
pub fn init() {
    let _ = tracing_subscriber::fmt::try_init();
    tracing::debug!("codec-core v{} initialized", VERSION);
}
