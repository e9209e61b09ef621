use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{LatchVaultError, Result};

/// User-level configuration, loaded from `config.toml` in the LatchVault
/// config directory.
///
/// Every field has a sensible default so LatchVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Where the vault file lives.  When unset, `vault.enc` inside the
    /// config directory is used.
    #[serde(default)]
    pub vault_path: Option<PathBuf>,

    /// Whether command outcomes are recorded in the local audit log.
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_audit_enabled() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_path: None,
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Name of the config file inside the config directory.
    const FILE_NAME: &'static str = "config.toml";

    /// Name of the vault file used when `vault_path` is unset.
    const VAULT_FILE_NAME: &'static str = "vault.enc";

    /// The LatchVault config directory (e.g. `~/.config/latchvault`).
    ///
    /// `None` when the platform provides no config directory at all.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("latchvault"))
    }

    /// Load settings from the standard config directory.
    ///
    /// Missing directory or missing file both yield defaults; only a
    /// file that exists but cannot be parsed is an error.
    pub fn load() -> Result<Self> {
        match Self::config_dir() {
            Some(dir) => Self::load_from(&dir),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from `<dir>/config.toml`.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            LatchVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve the vault file path relative to `dir` (the config
    /// directory).
    ///
    /// A configured `vault_path` wins; a relative one is taken relative
    /// to `dir`.
    pub fn vault_path(&self, dir: &Path) -> PathBuf {
        match &self.vault_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => dir.join(path),
            None => dir.join(Self::VAULT_FILE_NAME),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
