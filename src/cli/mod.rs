//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{LatchVaultError, Result};

/// LatchVault CLI: local encrypted secrets vault.
#[derive(Parser)]
#[command(
    name = "latchvault",
    about = "Local encrypted secrets vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the vault file (default: vault.enc in the config directory)
    #[arg(long, global = true, env = "LATCHVAULT_VAULT")]
    pub vault: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new vault protected by a master password
    Init,

    /// Verify the master password against the vault
    Unlock,

    /// Lock the vault
    Lock,

    /// Show whether the vault exists and is unlocked
    Status,

    /// Search entries by id or title
    Search {
        /// Substring to match (all entries when omitted)
        #[arg(default_value = "")]
        query: String,
    },

    /// Print a single field of an entry
    RequestSecret {
        /// Entry id (e.g. gmail.com)
        entry_id: String,

        /// Field to return
        #[arg(default_value = "password")]
        field: String,

        /// Copy the value to the clipboard instead of printing it
        #[arg(long)]
        copy: bool,
    },

    /// Generate a random password
    Generate {
        /// Password length (8-128)
        #[arg(short, long, default_value = "16")]
        length: u32,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// Leave out ambiguous characters (0, O, 1, l, I)
        #[arg(long)]
        exclude_ambiguous: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },

    /// View the audit log of vault operations
    Audit {
        /// Number of entries to show (default: 50)
        #[arg(long, default_value = "50")]
        last: usize,

        /// Show entries since a duration ago (e.g. 7d, 24h, 30m)
        #[arg(long)]
        since: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master password, trying in order:
/// 1. `LATCHVAULT_PASSWORD` env var (scripts, CI)
/// 2. Interactive hidden prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("LATCHVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master password")
        .interact()
        .map_err(|e| LatchVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation (used during `init`).
///
/// Also respects `LATCHVAULT_PASSWORD` for scripted usage.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("LATCHVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let password = dialoguer::Password::new()
        .with_prompt("Choose master password")
        .with_confirmation(
            "Confirm master password",
            "Passwords do not match, try again",
        )
        .interact()
        .map_err(|e| LatchVaultError::CommandFailed(format!("password prompt: {e}")))?;

    Ok(Zeroizing::new(password))
}

/// Resolve the vault file path, trying in order:
/// 1. `--vault` flag (or `LATCHVAULT_VAULT` env var)
/// 2. `vault_path` from the config file
/// 3. `vault.enc` inside the LatchVault config directory
pub fn vault_path(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    if let Some(path) = &cli.vault {
        return Ok(path.clone());
    }

    let dir = Settings::config_dir().ok_or_else(|| {
        LatchVaultError::ConfigError("could not determine a config directory".into())
    })?;

    Ok(settings.vault_path(&dir))
}
