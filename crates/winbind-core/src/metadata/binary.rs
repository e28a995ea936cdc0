//! Binary serialization for snapshots using postcard.
//!
//! Layout: 4-byte magic, little-endian `u16` format version, postcard body.

use super::error::SnapshotError;
use super::types::MetadataSnapshot;

/// Leading bytes of a binary snapshot.
pub const MAGIC: [u8; 4] = *b"WBMD";

/// Current binary format version.
pub const VERSION: u16 = 1;

const HEADER_LEN: usize = MAGIC.len() + 2;

impl MetadataSnapshot {
    /// Deserialize a snapshot from binary format.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        if bytes.len() < HEADER_LEN || bytes[..MAGIC.len()] != MAGIC {
            return Err(SnapshotError::Encoding);
        }
        let found = u16::from_le_bytes([bytes[4], bytes[5]]);
        if found != VERSION {
            return Err(SnapshotError::Version {
                found,
                expected: VERSION,
            });
        }
        Ok(postcard::from_bytes(&bytes[HEADER_LEN..])?)
    }

    /// Serialize the snapshot to binary format.
    pub fn to_binary(&self) -> Vec<u8> {
        let body = postcard::to_allocvec(self).expect("serialization should not fail");
        let mut out = Vec::with_capacity(HEADER_LEN + body.len());
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&body);
        out
    }

    /// Load from either encoding, picking binary when the magic is present.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        if bytes.starts_with(&MAGIC) {
            return Self::from_binary(bytes);
        }
        let text = std::str::from_utf8(bytes).map_err(|_| SnapshotError::Encoding)?;
        Self::from_json(text)
    }
}
