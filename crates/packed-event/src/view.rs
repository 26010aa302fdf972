//! Zero-copy read access to packed event buffers.

use crate::errors::PackedEventError;
use crate::layout::{
    read_u64, EventHeader, CREATED_AT_OFFSET, EXPIRATION_OFFSET, HEADER_SIZE, ID_OFFSET, ID_SIZE,
    KIND_OFFSET, PUBKEY_OFFSET, TAG_PREFIX_SIZE,
};
use crate::tags::Tag;
use std::iter::FusedIterator;
use std::ops::ControlFlow;
use tracing::warn;

/// Scan mode for handling a malformed tag region.
///
/// Only buffers that did not come from
/// [`PackedEventBuilder`](crate::PackedEventBuilder) (for example, corrupted
/// storage) can contain a truncated record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Strict mode: a truncated record is an error.
    #[default]
    Strict,
    /// Permissive mode: a truncated record is treated as the end of the tags.
    Permissive,
}

/// Borrowed view over a packed event.
///
/// The view holds a reference into memory owned by the caller (typically a
/// store transaction) and cannot outlive it. Only the header length is checked
/// on construction; accessors do not re-validate.
///
/// # Example
///
/// ```rust
/// use packed_event::{PackedEventBuilder, PackedEventView, TagBuilder};
///
/// let mut tags = TagBuilder::new();
/// tags.add(b'e', b"deadbeef")?;
/// let bytes = PackedEventBuilder::new(&[0u8; 32], &[1u8; 32], 1_700_000_000, 1, 0, &tags)?
///     .into_bytes();
///
/// let view = PackedEventView::new(&bytes)?;
/// assert_eq!(view.created_at(), 1_700_000_000);
/// assert!(view.has_tag_with_value("e", b"deadbeef")?);
/// # Ok::<(), packed_event::PackedEventError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedEventView<'a> {
    buf: &'a [u8],
    mode: ScanMode,
}

impl<'a> PackedEventView<'a> {
    /// Wraps `buf` in strict scan mode.
    ///
    /// # Errors
    ///
    /// Returns [`PackedEventError::Format`] if `buf` is shorter than 88 bytes.
    pub fn new(buf: &'a [u8]) -> Result<Self, PackedEventError> {
        Self::with_mode(buf, ScanMode::Strict)
    }

    /// Wraps `buf` using the given scan mode.
    pub fn with_mode(buf: &'a [u8], mode: ScanMode) -> Result<Self, PackedEventError> {
        if buf.len() < HEADER_SIZE {
            return Err(PackedEventError::Format {
                len: buf.len(),
                min: HEADER_SIZE,
            });
        }
        Ok(Self::from_checked(buf, mode))
    }

    pub(crate) fn from_checked(buf: &'a [u8], mode: ScanMode) -> Self {
        Self { buf, mode }
    }

    /// Scan mode used by [`tags`](Self::tags) and the helpers built on it.
    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Event id (32 bytes).
    pub fn id(&self) -> &'a [u8] {
        &self.buf[ID_OFFSET..PUBKEY_OFFSET]
    }

    /// Author pubkey (32 bytes).
    pub fn pubkey(&self) -> &'a [u8] {
        &self.buf[PUBKEY_OFFSET..CREATED_AT_OFFSET]
    }

    /// Creation time.
    pub fn created_at(&self) -> u64 {
        read_u64(self.buf, CREATED_AT_OFFSET)
    }

    /// Event kind.
    pub fn kind(&self) -> u64 {
        read_u64(self.buf, KIND_OFFSET)
    }

    /// Raw expiration field; 0 means unset.
    pub fn expiration(&self) -> u64 {
        read_u64(self.buf, EXPIRATION_OFFSET)
    }

    /// Expiration time, or `None` when unset.
    pub fn expiration_at(&self) -> Option<u64> {
        match self.expiration() {
            0 => None,
            ts => Some(ts),
        }
    }

    /// Returns true if an expiration is set and has been reached at `now`.
    pub fn is_expired(&self, now: u64) -> bool {
        self.expiration_at().is_some_and(|ts| ts <= now)
    }

    /// Copies the fixed header out of the buffer.
    pub fn header(&self) -> EventHeader {
        let mut id = [0u8; ID_SIZE];
        id.copy_from_slice(self.id());
        let mut pubkey = [0u8; ID_SIZE];
        pubkey.copy_from_slice(self.pubkey());

        EventHeader {
            id,
            pubkey,
            created_at: self.created_at(),
            kind: self.kind(),
            expiration: self.expiration(),
        }
    }

    /// The whole encoded buffer.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.buf
    }

    /// The encoded tag region (everything after the header).
    pub fn tag_bytes(&self) -> &'a [u8] {
        &self.buf[HEADER_SIZE..]
    }

    /// Iterates over tag records in stored order.
    ///
    /// Each call starts a fresh scan from the first record.
    pub fn tags(&self) -> TagIter<'a> {
        TagIter::new(self.tag_bytes(), self.mode)
    }

    /// Calls `visitor` for each tag record until it returns
    /// [`ControlFlow::Break`].
    ///
    /// Records after the one that broke the scan are never visited.
    ///
    /// # Errors
    ///
    /// Returns [`PackedEventError::TruncatedTag`] in strict mode if a record
    /// runs past the end of the buffer. Records before it have been visited.
    pub fn for_each_tag<F>(&self, mut visitor: F) -> Result<(), PackedEventError>
    where
        F: FnMut(Tag<'a>) -> ControlFlow<()>,
    {
        for tag in self.tags() {
            if visitor(tag?).is_break() {
                break;
            }
        }
        Ok(())
    }

    /// Returns true if a tag matches `tag_name` and `tag_value`.
    ///
    /// Only the first byte of `tag_name` is compared against the stored
    /// one-byte name, so `"event"` matches records stored under `e`. The value
    /// must match exactly. An empty `tag_name` never matches.
    pub fn has_tag_with_value(
        &self,
        tag_name: &str,
        tag_value: &[u8],
    ) -> Result<bool, PackedEventError> {
        let Some(&first) = tag_name.as_bytes().first() else {
            return Ok(false);
        };

        let mut found = false;
        self.for_each_tag(|tag| {
            if tag.name == first && tag.value == tag_value {
                found = true;
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;
        Ok(found)
    }

    /// Walks the whole tag region in strict mode and returns the record count.
    ///
    /// Useful for checking buffers of unknown provenance before trusting them.
    pub fn validate(&self) -> Result<usize, PackedEventError> {
        TagIter::new(self.tag_bytes(), ScanMode::Strict)
            .try_fold(0, |count, tag| tag.map(|_| count + 1))
    }
}

impl<'a> TryFrom<&'a [u8]> for PackedEventView<'a> {
    type Error = PackedEventError;

    fn try_from(buf: &'a [u8]) -> Result<Self, Self::Error> {
        Self::new(buf)
    }
}

/// Iterator over the tag records of a packed event.
///
/// Yields `Err(TruncatedTag)` at most once (strict mode) and is exhausted
/// afterwards.
#[derive(Debug, Clone)]
pub struct TagIter<'a> {
    rest: &'a [u8],
    offset: usize,
    mode: ScanMode,
}

impl<'a> TagIter<'a> {
    fn new(tag_bytes: &'a [u8], mode: ScanMode) -> Self {
        Self {
            rest: tag_bytes,
            offset: HEADER_SIZE,
            mode,
        }
    }
}

impl<'a> Iterator for TagIter<'a> {
    type Item = Result<Tag<'a>, PackedEventError>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.rest;
        if bytes.is_empty() {
            return None;
        }

        match bytes {
            [name, len, rest @ ..] if rest.len() >= usize::from(*len) => {
                let (value, tail) = rest.split_at(usize::from(*len));
                self.rest = tail;
                self.offset += TAG_PREFIX_SIZE + value.len();
                Some(Ok(Tag { name: *name, value }))
            }
            _ => {
                self.rest = &[];
                match self.mode {
                    ScanMode::Strict => Some(Err(PackedEventError::TruncatedTag {
                        offset: self.offset,
                    })),
                    ScanMode::Permissive => {
                        warn!(
                            offset = self.offset,
                            remaining = bytes.len(),
                            "truncated tag record ignored"
                        );
                        None
                    }
                }
            }
        }
    }
}

impl FusedIterator for TagIter<'_> {}
