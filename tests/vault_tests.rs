//! Integration tests for the LatchVault record format and store.

use std::fs;

use latchvault::crypto::{generate_salt, seal};
use latchvault::errors::LatchVaultError;
use latchvault::vault::{VaultRecord, VaultStore};
use tempfile::TempDir;

/// Helper: create a temporary vault file path inside a fresh temp dir.
fn vault_path() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("vault.enc");
    (dir, path)
}

/// Helper: a well-formed record sealed under an arbitrary key.
fn sample_record() -> VaultRecord {
    let salt = generate_salt().expect("generate salt");
    let key = [0x42u8; 32];
    let (nonce, ciphertext) = seal(&key, b"{\"entries\":[]}").expect("seal");
    VaultRecord::new(salt, nonce, ciphertext)
}

// ---------------------------------------------------------------------------
// Persisted JSON shape
// ---------------------------------------------------------------------------

#[test]
fn record_serializes_to_documented_shape() {
    let record = sample_record();
    let json = serde_json::to_value(&record).expect("serialize record");

    assert_eq!(json["version"], "1");
    assert_eq!(json["kdf"], "argon2id");

    // 16-byte salt -> 32 hex chars, 12-byte nonce -> 24 hex chars.
    let salt = json["salt"].as_str().expect("salt is a string");
    assert_eq!(salt.len(), 32);
    assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(salt, salt.to_lowercase(), "hex must be lowercase");

    let nonce = json["data"]["nonce"].as_str().expect("nonce is a string");
    assert_eq!(nonce.len(), 24);

    let ct = json["data"]["ciphertext"]
        .as_str()
        .expect("ciphertext is a string");
    assert!(!ct.is_empty());
    assert!(ct.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn record_roundtrips_through_json() {
    let record = sample_record();

    let json = serde_json::to_vec(&record).expect("serialize");
    let back: VaultRecord = serde_json::from_slice(&json).expect("deserialize");

    assert_eq!(back.version, record.version);
    assert_eq!(back.kdf, record.kdf);
    assert_eq!(back.salt, record.salt);
    assert_eq!(back.data.nonce, record.data.nonce);
    assert_eq!(back.data.ciphertext, record.data.ciphertext);
}

// ---------------------------------------------------------------------------
// Structural validation
// ---------------------------------------------------------------------------

#[test]
fn validate_rejects_unknown_version() {
    let mut record = sample_record();
    record.version = "2".to_string();

    let result = record.validate();
    assert!(matches!(
        result,
        Err(LatchVaultError::InvalidVaultFormat(_))
    ));
}

#[test]
fn validate_rejects_unknown_kdf() {
    let mut record = sample_record();
    record.kdf = "scrypt".to_string();

    assert!(record.validate().is_err());
}

#[test]
fn validate_rejects_bad_salt_length() {
    let mut record = sample_record();
    record.salt = vec![0u8; 8];

    assert!(record.validate().is_err());
}

#[test]
fn validate_rejects_bad_nonce_length() {
    let mut record = sample_record();
    record.data.nonce = vec![0u8; 16];

    assert!(record.validate().is_err());
}

#[test]
fn validate_accepts_well_formed_record() {
    assert!(sample_record().validate().is_ok());
}

// ---------------------------------------------------------------------------
// Store read/write
// ---------------------------------------------------------------------------

#[test]
fn write_then_read_roundtrip() {
    let (_dir, path) = vault_path();
    let store = VaultStore::new(&path);
    let record = sample_record();

    store.write(&record).expect("write record");
    assert!(store.exists());

    let back = store.read().expect("read record");
    assert_eq!(back.salt, record.salt);
    assert_eq!(back.data.ciphertext, record.data.ciphertext);
}

#[test]
fn read_missing_vault_fails_with_not_found() {
    let (_dir, path) = vault_path();
    let store = VaultStore::new(&path);

    let result = store.read();
    assert!(matches!(result, Err(LatchVaultError::VaultNotFound(_))));
}

#[test]
fn read_rejects_malformed_json() {
    let (_dir, path) = vault_path();
    fs::write(&path, b"this is not json").expect("write garbage");

    let store = VaultStore::new(&path);
    let result = store.read();
    assert!(matches!(
        result,
        Err(LatchVaultError::InvalidVaultFormat(_))
    ));
}

#[test]
fn read_rejects_json_missing_fields() {
    let (_dir, path) = vault_path();
    fs::write(&path, br#"{"version": "1"}"#).expect("write partial record");

    let store = VaultStore::new(&path);
    assert!(store.read().is_err());
}

#[test]
fn read_rejects_invalid_hex() {
    let (_dir, path) = vault_path();
    let json = br#"{"version":"1","kdf":"argon2id","salt":"zzzz","data":{"nonce":"00","ciphertext":"00"}}"#;
    fs::write(&path, json).expect("write record with bad hex");

    let store = VaultStore::new(&path);
    let result = store.read();
    assert!(matches!(
        result,
        Err(LatchVaultError::InvalidVaultFormat(_))
    ));
}

#[test]
fn write_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("vault.enc");

    let store = VaultStore::new(&path);
    store.write(&sample_record()).expect("write should create dirs");
    assert!(path.exists());
}

#[test]
fn write_leaves_no_temp_file_behind() {
    let (dir, path) = vault_path();
    let store = VaultStore::new(&path);
    store.write(&sample_record()).expect("write");

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["vault.enc".to_string()]);
}

#[test]
fn write_replaces_existing_record() {
    let (_dir, path) = vault_path();
    let store = VaultStore::new(&path);

    let first = sample_record();
    store.write(&first).expect("write first");

    let second = sample_record();
    store.write(&second).expect("write second");

    let back = store.read().expect("read");
    assert_eq!(back.salt, second.salt);
    assert_ne!(back.salt, first.salt);
}

#[cfg(unix)]
#[test]
fn written_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, path) = vault_path();
    let store = VaultStore::new(&path);
    store.write(&sample_record()).expect("write");

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
