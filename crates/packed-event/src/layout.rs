use crate::errors::PackedEventError;

/// Width of the event id and pubkey fields: 32 bytes.
pub const ID_SIZE: usize = 32;

/// Offset of the event id.
pub const ID_OFFSET: usize = 0;

/// Offset of the author pubkey.
pub const PUBKEY_OFFSET: usize = 32;

/// Offset of `created_at` (u64, little-endian).
pub const CREATED_AT_OFFSET: usize = 64;

/// Offset of `kind` (u64, little-endian).
pub const KIND_OFFSET: usize = 72;

/// Offset of `expiration` (u64, little-endian, 0 when unset).
pub const EXPIRATION_OFFSET: usize = 80;

/// Fixed header size in bytes: 88 bytes. Tag records start here.
pub const HEADER_SIZE: usize = 88;

/// Tag record prefix: name byte plus length byte.
pub const TAG_PREFIX_SIZE: usize = 2;

/// Maximum tag value size: 255 bytes.
pub const MAX_TAG_VALUE_SIZE: usize = u8::MAX as usize;

/// Decodes the u64 stored at `offset`.
///
/// Callers guarantee `offset + 8 <= buf.len()`.
pub(crate) fn read_u64(buf: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buf[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}

/// Fixed header of a packed event (88 bytes).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventHeader {
    /// Event id.
    pub id: [u8; ID_SIZE],
    /// Author pubkey.
    pub pubkey: [u8; ID_SIZE],
    /// Creation time, seconds since the Unix epoch.
    pub created_at: u64,
    /// Event kind.
    pub kind: u64,
    /// Expiration time, 0 when unset.
    pub expiration: u64,
}

impl EventHeader {
    /// Header size constant.
    pub const SIZE: usize = HEADER_SIZE;

    /// Creates a header, checking that `id` and `pubkey` are exactly 32 bytes.
    pub fn new(
        id: &[u8],
        pubkey: &[u8],
        created_at: u64,
        kind: u64,
        expiration: u64,
    ) -> Result<Self, PackedEventError> {
        Ok(Self {
            id: fixed_id("id", id)?,
            pubkey: fixed_id("pubkey", pubkey)?,
            created_at,
            kind,
            expiration,
        })
    }

    /// Serializes the header to bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[ID_OFFSET..PUBKEY_OFFSET].copy_from_slice(&self.id);
        bytes[PUBKEY_OFFSET..CREATED_AT_OFFSET].copy_from_slice(&self.pubkey);
        bytes[CREATED_AT_OFFSET..KIND_OFFSET].copy_from_slice(&self.created_at.to_le_bytes());
        bytes[KIND_OFFSET..EXPIRATION_OFFSET].copy_from_slice(&self.kind.to_le_bytes());
        bytes[EXPIRATION_OFFSET..HEADER_SIZE].copy_from_slice(&self.expiration.to_le_bytes());
        bytes
    }

    /// Deserializes a header from the first 88 bytes of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PackedEventError> {
        if bytes.len() < HEADER_SIZE {
            return Err(PackedEventError::Format {
                len: bytes.len(),
                min: HEADER_SIZE,
            });
        }

        Self::new(
            &bytes[ID_OFFSET..PUBKEY_OFFSET],
            &bytes[PUBKEY_OFFSET..CREATED_AT_OFFSET],
            read_u64(bytes, CREATED_AT_OFFSET),
            read_u64(bytes, KIND_OFFSET),
            read_u64(bytes, EXPIRATION_OFFSET),
        )
    }
}

fn fixed_id(field: &'static str, value: &[u8]) -> Result<[u8; ID_SIZE], PackedEventError> {
    <[u8; ID_SIZE]>::try_from(value).map_err(|_| PackedEventError::InvalidLength {
        field,
        expected: ID_SIZE,
        actual: value.len(),
    })
}
