//! The in-memory master key wrapper.

use zeroize::Zeroize;

use crate::crypto::kdf::KEY_LEN;

/// A wrapper around the 32-byte master key that automatically zeroes
/// its memory when dropped.
///
/// The master key only ever lives inside this wrapper while a session
/// is unlocked.  Locking the session (or letting it expire) drops the
/// wrapper, which wipes the key bytes.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct MasterKey {
    bytes: [u8; KEY_LEN],
}

impl MasterKey {
    /// Create a new `MasterKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to pass to the AEAD cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
