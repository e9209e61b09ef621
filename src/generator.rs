//! Random password generation.
//!
//! Builds a character set from the selected classes and samples each
//! position uniformly.  Ambiguous characters (`0`, `O`, `1`, `l`, `I`)
//! can be excluded for passwords that get read aloud or retyped.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{LatchVaultError, Result};

/// Minimum accepted password length.
const MIN_LENGTH: u32 = 8;

/// Maximum accepted password length.
const MAX_LENGTH: u32 = 128;

const AMBIGUOUS: &[char] = &['0', 'O', '1', 'l', 'I'];

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|\\:;\"'<>,.?/~`";

/// Which character classes a generated password draws from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordOptions {
    pub length: u32,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }
}

/// Generate a random password from the given options.
pub fn generate_password(options: &PasswordOptions) -> Result<String> {
    if options.length < MIN_LENGTH {
        return Err(LatchVaultError::GenerationFailed(format!(
            "length must be at least {MIN_LENGTH} characters"
        )));
    }
    if options.length > MAX_LENGTH {
        return Err(LatchVaultError::GenerationFailed(format!(
            "length cannot exceed {MAX_LENGTH} characters"
        )));
    }

    let mut charset: Vec<char> = Vec::new();
    if options.lowercase {
        charset.extend(LOWERCASE.chars());
    }
    if options.uppercase {
        charset.extend(UPPERCASE.chars());
    }
    if options.digits {
        charset.extend(DIGITS.chars());
    }
    if options.symbols {
        charset.extend(SYMBOLS.chars());
    }

    if charset.is_empty() {
        return Err(LatchVaultError::GenerationFailed(
            "at least one character class must be selected".into(),
        ));
    }

    if options.exclude_ambiguous {
        charset.retain(|c| !AMBIGUOUS.contains(c));
    }

    if charset.is_empty() {
        return Err(LatchVaultError::GenerationFailed(
            "no characters left after excluding ambiguous ones".into(),
        ));
    }

    let mut rng = rand::rng();
    let password = (0..options.length)
        .map(|_| charset[rng.random_range(0..charset.len())])
        .collect();

    Ok(password)
}
