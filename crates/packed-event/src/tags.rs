use crate::errors::PackedEventError;
use crate::layout::{MAX_TAG_VALUE_SIZE, TAG_PREFIX_SIZE};

/// A single tag record borrowed from a packed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag<'a> {
    /// One-byte tag name (the first character of the full tag name).
    pub name: u8,
    /// Raw tag value, at most 255 bytes.
    pub value: &'a [u8],
}

impl<'a> Tag<'a> {
    /// Returns the tag name as a `char`.
    pub fn name_char(&self) -> char {
        char::from(self.name)
    }
}

/// Append-only accumulator for the tag region of a packed event.
///
/// Each call to [`TagBuilder::add`] appends `[name][len][value]`. Records keep
/// their insertion order; there is no removal, lookup, or deduplication.
///
/// # Example
///
/// ```rust
/// use packed_event::TagBuilder;
///
/// let mut tags = TagBuilder::new();
/// tags.add(b'e', b"deadbeef")?.add(b'p', b"cafebabe")?;
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags.as_bytes().len(), 20);
/// # Ok::<(), packed_event::PackedEventError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBuilder {
    buf: Vec<u8>,
    count: usize,
}

impl TagBuilder {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tag record.
    ///
    /// # Errors
    ///
    /// Returns [`PackedEventError::ValueTooLarge`] if `value` is longer than
    /// 255 bytes. Nothing is appended in that case.
    pub fn add(&mut self, name: u8, value: &[u8]) -> Result<&mut Self, PackedEventError> {
        let len = u8::try_from(value.len()).map_err(|_| PackedEventError::ValueTooLarge {
            size: value.len(),
            max: MAX_TAG_VALUE_SIZE,
        })?;

        self.buf.reserve(TAG_PREFIX_SIZE + value.len());
        self.buf.push(name);
        self.buf.push(len);
        self.buf.extend_from_slice(value);
        self.count += 1;
        Ok(self)
    }

    /// Number of records added so far.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no records have been added.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Encoded tag region.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}
