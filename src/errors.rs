use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in LatchVault.
///
/// Password-dependent failures are deliberately collapsed into
/// `InvalidPassword`: a wrong password and a tampered or corrupted
/// ciphertext produce the same error, so callers cannot distinguish them.
#[derive(Debug, Error)]
pub enum LatchVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Authentication failure")]
    AuthenticationFailure,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Vault errors ---
    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    #[error("Invalid vault record: {0}")]
    InvalidVaultFormat(String),

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    #[error("Field '{0}' not found")]
    FieldNotFound(String),

    // --- Session errors ---
    #[error("Vault is locked")]
    SessionLocked,

    #[error("Session expired")]
    SessionExpired,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,

    #[error("Password mismatch — passwords do not match")]
    PasswordMismatch,

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("Password generation failed: {0}")]
    GenerationFailed(String),

    // --- Audit errors ---
    #[error("Audit error: {0}")]
    AuditError(String),
}

/// Convenience type alias for LatchVault results.
pub type Result<T> = std::result::Result<T, LatchVaultError>;
