//! AES-256-GCM authenticated encryption.
//!
//! Each call to `seal` generates a fresh random 12-byte nonce and returns
//! it alongside the ciphertext.  The two are stored as separate fields in
//! the vault record, so `open` takes them back as separate arguments.
//!
//! `open` reports every failure as `AuthenticationFailure`, whether the
//! key is wrong, the nonce is mangled, or the ciphertext was tampered
//! with.  Callers must not be able to tell these apart.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use crate::errors::{LatchVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns the freshly generated nonce and the ciphertext (which includes
/// the 16-byte auth tag).  A new random nonce is drawn on every call; the
/// same plaintext sealed twice produces different ciphertexts.
pub fn seal(key: &[u8], plaintext: &[u8]) -> Result<([u8; NONCE_LEN], Vec<u8>)> {
    // Build the cipher from the raw key bytes.
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| LatchVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Generate a random 12-byte nonce.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    // Encrypt and authenticate the plaintext.
    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| LatchVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    Ok((nonce.into(), ciphertext))
}

/// Decrypt data that was produced by `seal`.
///
/// Any failure collapses to `AuthenticationFailure`: a wrong key, a wrong
/// nonce, and a modified ciphertext are indistinguishable to the caller.
pub fn open(key: &[u8], nonce: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if nonce.len() != NONCE_LEN {
        return Err(LatchVaultError::AuthenticationFailure);
    }

    let nonce = Nonce::from_slice(nonce);

    // Build the cipher from the raw key bytes.
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|_| LatchVaultError::AuthenticationFailure)?;

    // Decrypt and verify the auth tag.
    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| LatchVaultError::AuthenticationFailure)?;

    Ok(plaintext)
}
