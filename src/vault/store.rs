//! On-disk persistence of the vault record.
//!
//! `VaultStore` owns the path to the vault file and nothing else — it
//! reads and writes whole `VaultRecord`s without looking inside the
//! ciphertext.  Writes are atomic (temp file + rename) so a reader never
//! observes a partially written record.

use std::fs;
use std::path::{Path, PathBuf};

use super::record::VaultRecord;
use crate::errors::{LatchVaultError, Result};

/// Handle to a vault file on disk.
pub struct VaultStore {
    path: PathBuf,
}

impl VaultStore {
    /// Create a store for the vault file at `path`.
    ///
    /// The file does not need to exist yet; `write` creates any missing
    /// parent directories.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a vault record exists at this path.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and structurally validate the record.
    ///
    /// Fails with `VaultNotFound` when no file exists and with
    /// `InvalidVaultFormat` when the JSON does not parse or the record
    /// invariants (version, kdf tag, salt and nonce lengths) are broken.
    pub fn read(&self) -> Result<VaultRecord> {
        if !self.path.exists() {
            return Err(LatchVaultError::VaultNotFound(self.path.clone()));
        }

        let data = fs::read(&self.path)?;

        let record: VaultRecord = serde_json::from_slice(&data)
            .map_err(|e| LatchVaultError::InvalidVaultFormat(format!("record JSON: {e}")))?;

        record.validate()?;
        Ok(record)
    }

    /// Write the record to disk **atomically**, replacing any prior one.
    ///
    /// 1. Serialize the record to JSON.
    /// 2. Write to a temp file in the same directory.
    /// 3. Restrict permissions to the owner (Unix).
    /// 4. Rename the temp file over the target path.
    ///
    /// The temp file lives in the same directory so the rename is
    /// guaranteed to be atomic on the same filesystem.
    pub fn write(&self, record: &VaultRecord) -> Result<()> {
        let json = serde_json::to_vec(record)
            .map_err(|e| LatchVaultError::SerializationError(format!("record: {e}")))?;

        let parent = self.path.parent().unwrap_or(Path::new("."));
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, &json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}
