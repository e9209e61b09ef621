//! The persisted vault record.
//!
//! A vault is one JSON file with this shape:
//!
//! ```json
//! {
//!   "version": "1",
//!   "kdf": "argon2id",
//!   "salt": "<32 lowercase hex chars>",
//!   "data": {
//!     "nonce": "<24 lowercase hex chars>",
//!     "ciphertext": "<hex, includes the 16-byte auth tag>"
//!   }
//! }
//! ```
//!
//! - **version**: format version, currently `"1"`.
//! - **kdf**: key-derivation algorithm tag, always `"argon2id"`.
//! - **salt**: 16 random bytes generated once at vault creation and
//!   immutable for the life of the vault.
//! - **data**: the AEAD output covering the entire serialized entry
//!   collection.  Nonce and ciphertext are stored as separate fields.

use serde::{Deserialize, Serialize};

use crate::crypto::aead::NONCE_LEN;
use crate::crypto::kdf::SALT_LEN;
use crate::errors::{LatchVaultError, Result};

/// Current record format version.
pub const RECORD_VERSION: &str = "1";

/// Key-derivation algorithm tag written into every record.
pub const KDF_NAME: &str = "argon2id";

/// The AEAD output as stored on disk: nonce and ciphertext, hex-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SealedData {
    /// The 12-byte nonce used for this ciphertext (hex in JSON).
    #[serde(serialize_with = "hex_encode", deserialize_with = "hex_decode")]
    pub nonce: Vec<u8>,

    /// The AEAD ciphertext including the auth tag (hex in JSON).
    #[serde(serialize_with = "hex_encode", deserialize_with = "hex_decode")]
    pub ciphertext: Vec<u8>,
}

/// The full on-disk vault record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultRecord {
    /// Format version.
    pub version: String,

    /// KDF algorithm identifier.
    pub kdf: String,

    /// The salt used for Argon2id key derivation (hex in JSON).
    #[serde(serialize_with = "hex_encode", deserialize_with = "hex_decode")]
    pub salt: Vec<u8>,

    /// The sealed entry collection.
    pub data: SealedData,
}

impl VaultRecord {
    /// Build a record with the current version and KDF tags.
    pub fn new(salt: [u8; SALT_LEN], nonce: [u8; NONCE_LEN], ciphertext: Vec<u8>) -> Self {
        Self {
            version: RECORD_VERSION.to_string(),
            kdf: KDF_NAME.to_string(),
            salt: salt.to_vec(),
            data: SealedData {
                nonce: nonce.to_vec(),
                ciphertext,
            },
        }
    }

    /// Check the structural invariants of a record read from disk.
    ///
    /// All of these are detectable without a password, so they surface
    /// as `InvalidVaultFormat` rather than `InvalidPassword`.
    pub fn validate(&self) -> Result<()> {
        if self.version != RECORD_VERSION {
            return Err(LatchVaultError::InvalidVaultFormat(format!(
                "unsupported version '{}', expected '{RECORD_VERSION}'",
                self.version
            )));
        }
        if self.kdf != KDF_NAME {
            return Err(LatchVaultError::InvalidVaultFormat(format!(
                "unsupported kdf '{}', expected '{KDF_NAME}'",
                self.kdf
            )));
        }
        self.salt_bytes()?;
        if self.data.nonce.len() != NONCE_LEN {
            return Err(LatchVaultError::InvalidVaultFormat(format!(
                "nonce must be {NONCE_LEN} bytes (got {})",
                self.data.nonce.len()
            )));
        }
        Ok(())
    }

    /// The salt as a fixed-size array.
    pub fn salt_bytes(&self) -> Result<[u8; SALT_LEN]> {
        self.salt.as_slice().try_into().map_err(|_| {
            LatchVaultError::InvalidVaultFormat(format!(
                "salt must be {SALT_LEN} bytes (got {})",
                self.salt.len()
            ))
        })
    }
}

// ---------------------------------------------------------------------------
// Serde helpers for hex-encoded Vec<u8> fields
// ---------------------------------------------------------------------------

pub(crate) fn hex_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&hex::encode(data))
}

pub(crate) fn hex_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    hex::decode(&s).map_err(serde::de::Error::custom)
}
