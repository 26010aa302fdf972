//! Packed event assembly.

use crate::errors::PackedEventError;
use crate::event::PackedEvent;
use crate::layout::{EventHeader, HEADER_SIZE};
use crate::tags::TagBuilder;
use tracing::trace;

/// Builder for a complete packed event buffer.
///
/// Concatenates the 88-byte header with the accumulated tag region. Integer
/// ranges and tag contents are not validated beyond their encoded widths.
///
/// # Example
///
/// ```rust
/// use packed_event::{PackedEventBuilder, TagBuilder};
///
/// let mut tags = TagBuilder::new();
/// tags.add(b'e', b"deadbeef")?;
///
/// let event = PackedEventBuilder::new(&[0u8; 32], &[1u8; 32], 1_700_000_000, 1, 0, &tags)?
///     .finish();
/// assert_eq!(event.len(), 98);
/// assert_eq!(event.view().kind(), 1);
/// # Ok::<(), packed_event::PackedEventError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedEventBuilder {
    buf: Vec<u8>,
}

impl PackedEventBuilder {
    /// Assembles a packed event.
    ///
    /// # Errors
    ///
    /// Returns [`PackedEventError::InvalidLength`] if `id` or `pubkey` is not
    /// exactly 32 bytes.
    pub fn new(
        id: &[u8],
        pubkey: &[u8],
        created_at: u64,
        kind: u64,
        expiration: u64,
        tags: &TagBuilder,
    ) -> Result<Self, PackedEventError> {
        let header = EventHeader::new(id, pubkey, created_at, kind, expiration)?;
        Ok(Self::from_header(&header, tags))
    }

    /// Assembles a packed event from an already validated header.
    pub fn from_header(header: &EventHeader, tags: &TagBuilder) -> Self {
        let tag_bytes = tags.as_bytes();
        let mut buf = Vec::with_capacity(HEADER_SIZE + tag_bytes.len());
        buf.extend_from_slice(&header.to_bytes());
        buf.extend_from_slice(tag_bytes);

        trace!(
            kind = header.kind,
            tags = tags.len(),
            size = buf.len(),
            "packed event assembled"
        );

        Self { buf }
    }

    /// Encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the builder and returns the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Consumes the builder and returns the owned packed event.
    pub fn finish(self) -> PackedEvent {
        PackedEvent::from_built(self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_event_is_88_bytes() {
        let built =
            PackedEventBuilder::new(&[0; 32], &[1; 32], 5, 7, 0, &TagBuilder::new()).unwrap();
        assert_eq!(built.as_bytes().len(), HEADER_SIZE);
        assert_eq!(&built.as_bytes()[32..64], &[1u8; 32]);
    }

    #[test]
    fn tag_region_follows_header() {
        let mut tags = TagBuilder::new();
        tags.add(b'p', b"cafebabe").unwrap();
        let bytes = PackedEventBuilder::new(&[0; 32], &[0; 32], 0, 0, 0, &tags)
            .unwrap()
            .into_bytes();
        assert_eq!(&bytes[HEADER_SIZE..], b"p\x08cafebabe");
    }

    #[test]
    fn rejects_short_id() {
        let err = PackedEventBuilder::new(&[0; 31], &[0; 32], 0, 0, 0, &TagBuilder::new())
            .unwrap_err();
        assert_eq!(
            err,
            PackedEventError::InvalidLength {
                field: "id",
                expected: 32,
                actual: 31
            }
        );
    }

    #[test]
    fn rejects_long_pubkey() {
        let result = PackedEventBuilder::new(&[0; 32], &[0; 64], 0, 0, 0, &TagBuilder::new());
        assert!(matches!(
            result,
            Err(PackedEventError::InvalidLength { field: "pubkey", .. })
        ));
    }

    #[test]
    fn output_is_deterministic() {
        let mut tags = TagBuilder::new();
        tags.add(b't', b"rust").unwrap();
        let a = PackedEventBuilder::new(&[9; 32], &[8; 32], 1, 2, 3, &tags).unwrap();
        let b = PackedEventBuilder::new(&[9; 32], &[8; 32], 1, 2, 3, &tags).unwrap();
        assert_eq!(a, b);
    }
}
