//! Conversion between Nostr event JSON and packed events.
//!
//! Only the indexable fields are read. Content and signatures are ignored and
//! nothing here verifies the event id or signature.

use crate::builder::PackedEventBuilder;
use crate::errors::PackedEventError;
use crate::event::PackedEvent;
use crate::layout::ID_SIZE;
use crate::tags::{Tag, TagBuilder};
use crate::view::PackedEventView;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when converting event JSON.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Event JSON is missing fields or has the wrong types.
    #[error("invalid event JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A hex field could not be decoded to 32 bytes.
    #[error("invalid hex in {field}: {source}")]
    InvalidHex {
        /// Field that failed to decode.
        field: &'static str,
        /// Underlying decode error.
        source: hex::FromHexError,
    },
    /// The `expiration` tag is not a decimal timestamp.
    #[error("invalid expiration tag value: '{0}'")]
    InvalidExpiration(String),
    /// Packing failed.
    #[error(transparent)]
    Packed(#[from] PackedEventError),
}

#[derive(Debug, Deserialize)]
struct EventFields {
    id: String,
    pubkey: String,
    created_at: u64,
    kind: u64,
    #[serde(default)]
    tags: Vec<Vec<String>>,
}

/// Packs the indexable fields of a Nostr event.
///
/// Tag extraction:
/// - `e` and `p` values are stored as their 32 decoded bytes; values that are
///   not 64 hex characters are skipped.
/// - The first `expiration` tag sets the header's expiration field.
/// - Other single-character tags are stored as raw UTF-8 bytes.
/// - Tags with fewer than two entries and other multi-character names are
///   skipped.
///
/// # Example
///
/// ```rust
/// use packed_event::nostr::pack_event_json;
/// use serde_json::json;
///
/// let event = json!({
///     "id": "00".repeat(32),
///     "pubkey": "01".repeat(32),
///     "created_at": 1_700_000_000u64,
///     "kind": 1,
///     "tags": [["t", "rust"], ["expiration", "1800000000"]],
///     "content": "hello",
///     "sig": ""
/// });
///
/// let packed = pack_event_json(&event)?;
/// let view = packed.view();
/// assert_eq!(view.expiration_at(), Some(1_800_000_000));
/// assert!(view.has_tag_with_value("t", b"rust")?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn pack_event_json(event: &Value) -> Result<PackedEvent, ConvertError> {
    let fields = EventFields::deserialize(event)?;

    let id = decode_id("id", &fields.id)?;
    let pubkey = decode_id("pubkey", &fields.pubkey)?;

    let mut tags = TagBuilder::new();
    let mut expiration = None;

    for tag in &fields.tags {
        let [name, value, ..] = tag.as_slice() else {
            debug!(?tag, "skipping tag with fewer than two entries");
            continue;
        };

        match name.as_str() {
            "e" | "p" => match decode_id("tag", value) {
                Ok(bytes) => {
                    tags.add(name.as_bytes()[0], &bytes)?;
                }
                Err(_) => debug!(%name, %value, "skipping malformed id tag"),
            },
            "expiration" => {
                if expiration.is_none() {
                    let ts = value
                        .parse::<u64>()
                        .map_err(|_| ConvertError::InvalidExpiration(value.clone()))?;
                    expiration = Some(ts);
                }
            }
            single if single.len() == 1 => {
                tags.add(single.as_bytes()[0], value.as_bytes())?;
            }
            _ => debug!(%name, "skipping multi-character tag"),
        }
    }

    let built = PackedEventBuilder::new(
        &id,
        &pubkey,
        fields.created_at,
        fields.kind,
        expiration.unwrap_or(0),
        &tags,
    )?;
    Ok(built.finish())
}

/// Converts a textual tag filter value into its stored form.
///
/// Values for names starting with `e` or `p` are hex-decoded to 32 bytes, the
/// same way [`pack_event_json`] stores them. Anything else is used verbatim.
pub fn tag_value_for_match(tag_name: &str, value: &str) -> Result<Vec<u8>, ConvertError> {
    match tag_name.as_bytes().first() {
        Some(b'e' | b'p') => Ok(decode_id("tag value", value)?.to_vec()),
        _ => Ok(value.as_bytes().to_vec()),
    }
}

/// Renders a packed event as JSON for inspection.
pub fn summarize(view: &PackedEventView<'_>) -> Result<Value, PackedEventError> {
    let mut tags = Vec::new();
    view.for_each_tag(|tag| {
        tags.push(json!([tag.name_char().to_string(), display_tag_value(&tag)]));
        std::ops::ControlFlow::Continue(())
    })?;

    Ok(json!({
        "id": hex::encode(view.id()),
        "pubkey": hex::encode(view.pubkey()),
        "created_at": view.created_at(),
        "kind": view.kind(),
        "expiration": view.expiration_at(),
        "tags": tags,
    }))
}

/// Renders a stored tag value as text.
///
/// 32-byte `e` and `p` values are event ids and pubkeys and always render as
/// hex, whatever their bytes. Other values render as text when they are
/// printable UTF-8 and as hex otherwise.
pub fn display_tag_value(tag: &Tag<'_>) -> String {
    match (tag.name, std::str::from_utf8(tag.value)) {
        (b'e' | b'p', _) if tag.value.len() == ID_SIZE => hex::encode(tag.value),
        (_, Ok(s)) if !s.chars().any(char::is_control) => s.to_string(),
        _ => hex::encode(tag.value),
    }
}

fn decode_id(field: &'static str, value: &str) -> Result<[u8; ID_SIZE], ConvertError> {
    let mut out = [0u8; ID_SIZE];
    hex::decode_to_slice(value, &mut out)
        .map_err(|source| ConvertError::InvalidHex { field, source })?;
    Ok(out)
}
