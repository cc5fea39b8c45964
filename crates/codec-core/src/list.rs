//! Capacity-bounded, insertion-ordered codec list
//!
//! One list holds the codec set offered or supported within a single
//! negotiation scope. The capacity is fixed at creation and the backing
//! storage is never reallocated afterwards, so positional references stay
//! stable for the list's lifetime. Appends beyond capacity fail with
//! [`CodecError::CapacityExceeded`] and leave the list unchanged.

use crate::descriptor::CodecDescriptor;
use crate::error::{CodecError, Result};

/// Ordered, capacity-bounded sequence of codec descriptors
///
/// Insertion order is significant: codecs are appended in the order they are
/// discovered or offered, and negotiation scans the list front to back. The
/// default value is the uninitialized state with zero capacity, where every
/// append fails.
#[derive(Debug, Clone, Default)]
pub struct CodecList {
    codecs: Vec<CodecDescriptor>,
    max_count: usize,
}

impl CodecList {
    /// Create a list with storage reserved for exactly `max_count` descriptors
    pub fn new(max_count: usize) -> Self {
        Self {
            // Reserved up front; try_append bounds-checks first, so the
            // vector never grows past this and never reallocates.
            codecs: Vec::with_capacity(max_count),
            max_count,
        }
    }

    /// Reset to the uninitialized state: no storage, zero capacity
    pub fn reset(&mut self) {
        self.codecs = Vec::new();
        self.max_count = 0;
    }

    /// Append a fully-formed descriptor to the end of the list
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::CapacityExceeded`] if the list is full; the list
    /// is left unchanged.
    pub fn try_append(&mut self, descriptor: CodecDescriptor) -> Result<()> {
        if self.codecs.len() >= self.max_count {
            return Err(CodecError::CapacityExceeded {
                max_count: self.max_count,
            });
        }
        self.codecs.push(descriptor);
        Ok(())
    }

    /// Number of descriptors appended so far
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Whether the list holds no descriptors
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Whether another append would fail
    pub fn is_full(&self) -> bool {
        self.codecs.len() >= self.max_count
    }

    /// Fixed capacity chosen at creation
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Descriptor at the given append position
    pub fn get(&self, index: usize) -> Option<&CodecDescriptor> {
        self.codecs.get(index)
    }

    /// Iterate over the descriptors in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, CodecDescriptor> {
        self.codecs.iter()
    }

    /// View the descriptors as a slice in insertion order
    pub fn as_slice(&self) -> &[CodecDescriptor] {
        &self.codecs
    }

    /// Find the first descriptor in insertion order that matches the argument
    ///
    /// This is the scan primitive consumed by negotiation: which of several
    /// matches wins is policy decided by the caller, but "first in insertion
    /// order" is what a front-to-back scan of this list yields.
    pub fn find_match(&self, descriptor: &CodecDescriptor) -> Option<&CodecDescriptor> {
        self.codecs.iter().find(|c| c.matches(descriptor))
    }
}

impl<'a> IntoIterator for &'a CodecList {
    type Item = &'a CodecDescriptor;
    type IntoIter = std::slice::Iter<'a, CodecDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.codecs.iter()
    }
}
