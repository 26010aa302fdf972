use crate::errors::PackedEventError;
use crate::layout::HEADER_SIZE;
use crate::view::{PackedEventView, ScanMode};
use std::fmt;

/// Owned packed event buffer.
///
/// Guarantees the buffer holds at least the fixed header, so views can be
/// created without a fallible length check. Use this for bytes copied out of a
/// store; use [`PackedEventView::new`] directly for borrowed store memory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackedEvent(Vec<u8>);

impl PackedEvent {
    /// Wraps bytes previously produced by [`PackedEventBuilder`](crate::PackedEventBuilder).
    ///
    /// # Errors
    ///
    /// Returns [`PackedEventError::Format`] if `bytes` is shorter than 88 bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, PackedEventError> {
        if bytes.len() < HEADER_SIZE {
            return Err(PackedEventError::Format {
                len: bytes.len(),
                min: HEADER_SIZE,
            });
        }
        Ok(Self(bytes))
    }

    pub(crate) fn from_built(bytes: Vec<u8>) -> Self {
        debug_assert!(bytes.len() >= HEADER_SIZE);
        Self(bytes)
    }

    /// Returns a strict view over the buffer.
    pub fn view(&self) -> PackedEventView<'_> {
        self.view_with_mode(ScanMode::Strict)
    }

    /// Returns a view over the buffer using the given scan mode.
    pub fn view_with_mode(&self, mode: ScanMode) -> PackedEventView<'_> {
        PackedEventView::from_checked(&self.0, mode)
    }

    /// Encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the event and returns the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Total encoded length in bytes (never less than 88).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a packed event carries at least its header.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl AsRef<[u8]> for PackedEvent {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for PackedEvent {
    type Error = PackedEventError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl From<PackedEvent> for Vec<u8> {
    fn from(event: PackedEvent) -> Self {
        event.0
    }
}

/// Lowercase hex of the encoded bytes.
impl fmt::Display for PackedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}
