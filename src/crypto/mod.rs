//! Cryptographic primitives for LatchVault.
//!
//! This module provides:
//! - AES-256-GCM authenticated encryption (`aead`)
//! - Argon2id password-based key derivation (`kdf`)
//! - The self-zeroizing master key wrapper (`keys`)

pub mod aead;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, derive_master_key, ...};
pub use aead::{open, seal};
pub use kdf::{derive_master_key, generate_salt};
pub use keys::MasterKey;
