//! Compact binary encoding of the indexable fields of Nostr events.
//!
//! A packed event is a fixed 88-byte header followed by a tag region:
//!
//! ```text
//! [0:32]   id
//! [32:64]  pubkey
//! [64:72]  created_at   (u64 little-endian)
//! [72:80]  kind         (u64 little-endian)
//! [80:88]  expiration   (u64 little-endian, 0 = unset)
//! [88:..]  tags: [name: 1][len: 1][value: len], repeated to the end
//! ```
//!
//! This crate provides:
//! - [`TagBuilder`] to accumulate tag records in order
//! - [`PackedEventBuilder`] to assemble the complete buffer
//! - [`PackedEventView`] for zero-copy access to stored buffers
//! - [`nostr`] helpers to pack event JSON and summarize packed events
//!
//! It owns no storage and performs no I/O; callers hand the bytes to their
//! key-value store and wrap whatever the store returns in a view.
//!
//! ## Quick Start
//!
//! ```rust
//! use packed_event::{PackedEventBuilder, PackedEventView, TagBuilder};
//!
//! let mut tags = TagBuilder::new();
//! tags.add(b'e', b"deadbeef")?;
//! tags.add(b'p', b"cafebabe")?;
//!
//! let bytes = PackedEventBuilder::new(&[0u8; 32], &[1u8; 32], 1_700_000_000, 1, 0, &tags)?
//!     .into_bytes();
//! assert_eq!(bytes.len(), 108);
//!
//! let view = PackedEventView::new(&bytes)?;
//! for tag in view.tags() {
//!     let tag = tag?;
//!     println!("{} = {:?}", tag.name_char(), tag.value);
//! }
//! # Ok::<(), packed_event::PackedEventError>(())
//! ```

#![deny(missing_docs)]

/// Packed event assembly.
pub mod builder;
/// Error types for packing and reading.
pub mod errors;
/// Owned packed event buffers.
pub mod event;
/// Binary layout constants and the fixed header.
pub mod layout;
/// Nostr event JSON conversion.
pub mod nostr;
/// Tag records and the tag accumulator.
pub mod tags;
/// Zero-copy views and tag scanning.
pub mod view;

pub use builder::PackedEventBuilder;
pub use errors::PackedEventError;
pub use event::PackedEvent;
pub use layout::{EventHeader, HEADER_SIZE, MAX_TAG_VALUE_SIZE};
pub use nostr::{
    display_tag_value, pack_event_json, summarize, tag_value_for_match, ConvertError,
};
pub use tags::{Tag, TagBuilder};
pub use view::{PackedEventView, ScanMode, TagIter};
