//! High-level vault operations used by CLI commands.
//!
//! `VaultEngine` composes the store, the crypto layer, and the session
//! into the operations a caller actually invokes: init, unlock, lock,
//! status, and the two read paths (list and get-secret).  Every read
//! path decrypts the whole record under the session key; there is no
//! partial decryption.

use std::time::Duration;

use serde::Serialize;
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::{aead, kdf, MasterKey};
use crate::errors::{LatchVaultError, Result};
use crate::session::Session;

use super::entry::{EntryPreview, VaultData};
use super::record::VaultRecord;
use super::store::VaultStore;

/// Read-only snapshot of the vault + session state.
///
/// Produced by `status` without touching the session timer, so asking
/// for status can neither expire nor extend a session.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VaultStatus {
    /// Whether a vault record exists on disk.
    pub vault_exists: bool,

    /// Whether the session currently holds a key.
    pub unlocked: bool,
}

/// The main vault handle.  Create one with `VaultEngine::new`, then
/// drive it through `init`/`unlock` before the read paths.
pub struct VaultEngine {
    store: VaultStore,
    session: Session,
}

impl VaultEngine {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Build an engine over `store` with the standard session timeout.
    pub fn new(store: VaultStore) -> Self {
        Self {
            store,
            session: Session::new(),
        }
    }

    /// Build an engine whose session uses an explicit timeout.
    pub fn with_timeout(store: VaultStore, timeout: Duration) -> Self {
        Self {
            store,
            session: Session::with_timeout(timeout),
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &VaultStore {
        &self.store
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Create a brand-new vault protected by `password`.
    ///
    /// Generates the vault's salt (the only operation that ever does),
    /// derives the key, seals an empty entry collection, persists the
    /// record, and establishes the session with the freshly derived key.
    pub fn init(&mut self, password: &[u8]) -> Result<()> {
        if self.store.exists() {
            return Err(LatchVaultError::VaultAlreadyExists(
                self.store.path().to_path_buf(),
            ));
        }

        let salt = kdf::generate_salt()?;

        let mut key_bytes = kdf::derive_master_key(password, &salt)?;
        let key = MasterKey::new(key_bytes);
        key_bytes.zeroize();

        let payload = serde_json::to_vec(&VaultData::empty())
            .map_err(|e| LatchVaultError::SerializationError(format!("payload: {e}")))?;
        let (nonce, ciphertext) = aead::seal(key.as_bytes(), &payload)?;

        // Persist first; the session is only established once the record
        // is safely on disk.
        let record = VaultRecord::new(salt, nonce, ciphertext);
        self.store.write(&record)?;
        self.session.establish(key);

        Ok(())
    }

    /// Unlock an existing vault with `password`.
    ///
    /// On success the session is established with the derived key.  On
    /// any password-dependent failure the session is left locked and the
    /// caller sees a uniform `InvalidPassword`.
    pub fn unlock(&mut self, password: &[u8]) -> Result<()> {
        let record = self.store.read()?;

        match Self::verify_password(&record, password) {
            Ok(key) => {
                self.session.establish(key);
                Ok(())
            }
            Err(e) => {
                self.session.clear();
                Err(e)
            }
        }
    }

    /// Clear the session, wiping the key.  Succeeds even when already
    /// locked.
    pub fn lock(&mut self) {
        self.session.clear();
    }

    /// Report whether a vault exists and whether the session is unlocked.
    ///
    /// Reads raw state only — does not evaluate or refresh the session
    /// timer.
    pub fn status(&self) -> VaultStatus {
        VaultStatus {
            vault_exists: self.store.exists(),
            unlocked: self.session.is_unlocked(),
        }
    }

    // ------------------------------------------------------------------
    // Read paths
    // ------------------------------------------------------------------

    /// Search entries by case-insensitive substring match on `id` or
    /// `title`.  An empty query lists every entry.
    ///
    /// Returns previews only — secret fields never appear in bulk
    /// listings.  Refreshes the session on success.
    pub fn list(&mut self, query: &str) -> Result<Vec<EntryPreview>> {
        let previews = self.load_data()?.search(query);
        self.session.refresh();
        Ok(previews)
    }

    /// Return the raw value of one named field on one entry.
    ///
    /// Any field name is accepted — this is a generic accessor, not
    /// limited to `password`.  Fails with `EntryNotFound` when no entry
    /// has the given id, `FieldNotFound` when the entry lacks the field.
    /// Refreshes the session on success.
    pub fn get_secret(&mut self, entry_id: &str, field: &str) -> Result<String> {
        let data = self.load_data()?;

        let entry = data
            .find(entry_id)
            .ok_or_else(|| LatchVaultError::EntryNotFound(entry_id.to_string()))?;

        let value = entry
            .field(field)
            .ok_or_else(|| LatchVaultError::FieldNotFound(field.to_string()))?
            .to_string();

        self.session.refresh();
        Ok(value)
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    /// Derive the key from the stored salt and prove it opens the record.
    ///
    /// Every password-dependent failure (derivation, AEAD verification,
    /// payload parsing) collapses into `InvalidPassword` so a caller can
    /// never tell a wrong password from a corrupted or tampered record.
    fn verify_password(record: &VaultRecord, password: &[u8]) -> Result<MasterKey> {
        let salt = record.salt_bytes()?;

        let mut key_bytes = kdf::derive_master_key(password, &salt)
            .map_err(|_| LatchVaultError::InvalidPassword)?;
        let key = MasterKey::new(key_bytes);
        key_bytes.zeroize();

        let plaintext = Zeroizing::new(
            aead::open(key.as_bytes(), &record.data.nonce, &record.data.ciphertext)
                .map_err(|_| LatchVaultError::InvalidPassword)?,
        );

        serde_json::from_slice::<VaultData>(&plaintext)
            .map_err(|_| LatchVaultError::InvalidPassword)?;

        Ok(key)
    }

    /// Decrypt and parse the full record under the session key.
    ///
    /// The session gate runs first, so a locked or expired session fails
    /// before any disk read.
    fn load_data(&mut self) -> Result<VaultData> {
        let key = self.session.check()?;
        let record = self.store.read()?;

        let plaintext = Zeroizing::new(
            aead::open(key.as_bytes(), &record.data.nonce, &record.data.ciphertext)
                .map_err(|_| LatchVaultError::InvalidPassword)?,
        );

        serde_json::from_slice(&plaintext).map_err(|_| LatchVaultError::InvalidPassword)
    }
}
