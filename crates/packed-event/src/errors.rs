use thiserror::Error;

/// Errors that can occur while building or reading packed events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackedEventError {
    /// Buffer is shorter than the fixed header.
    #[error("packed event too short: {len} bytes, expected at least {min}")]
    Format {
        /// Actual buffer length.
        len: usize,
        /// Minimum length (the header size).
        min: usize,
    },
    /// Identifier field does not have the required width.
    #[error("unexpected {field} size: {actual} bytes, expected {expected}")]
    InvalidLength {
        /// Name of the offending field (`id` or `pubkey`).
        field: &'static str,
        /// Required width in bytes.
        expected: usize,
        /// Width that was supplied.
        actual: usize,
    },
    /// Tag value does not fit in a single length byte.
    #[error("tag value size {size} exceeds maximum {max}")]
    ValueTooLarge {
        /// Actual value size.
        size: usize,
        /// Maximum allowed size.
        max: usize,
    },
    /// Tag record runs past the end of the buffer (strict scanning only).
    #[error("truncated tag record at offset {offset}")]
    TruncatedTag {
        /// Byte offset of the record within the packed buffer.
        offset: usize,
    },
}
