//! `latchvault request-secret` — fetch a single field from an entry.

use arboard::Clipboard;

use crate::cli::{output, prompt_password, vault_path, Cli};
use crate::config::Settings;
use crate::errors::{LatchVaultError, Result};
use crate::vault::{VaultEngine, VaultStore};

/// Execute the `request-secret` command.
///
/// With `--copy` the value goes to the system clipboard instead of
/// stdout, which keeps it out of shell history and pipe buffers.
pub fn execute(cli: &Cli, entry_id: &str, field: &str, copy: bool) -> Result<()> {
    let settings = Settings::load()?;
    let path = vault_path(cli, &settings)?;

    let password = prompt_password()?;

    let mut engine = VaultEngine::new(VaultStore::new(&path));
    engine.unlock(password.as_bytes())?;

    let value = match engine.get_secret(entry_id, field) {
        Ok(value) => value,
        Err(e) => {
            #[cfg(feature = "audit-log")]
            crate::audit::log_audit(
                &settings,
                &path,
                "request-secret",
                "error",
                Some(entry_id),
                Some(&e.to_string()),
            );

            return Err(e);
        }
    };

    #[cfg(feature = "audit-log")]
    crate::audit::log_audit(
        &settings,
        &path,
        "request-secret",
        "success",
        Some(entry_id),
        Some(field),
    );

    if copy {
        copy_to_clipboard(&value)?;
        output::success_message("Secret copied to clipboard");
    } else {
        output::success_value("value", &value);
    }
    Ok(())
}

fn copy_to_clipboard(value: &str) -> Result<()> {
    let mut clipboard =
        Clipboard::new().map_err(|e| LatchVaultError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(value)
        .map_err(|e| LatchVaultError::ClipboardError(e.to_string()))?;
    Ok(())
}
