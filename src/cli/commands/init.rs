//! `latchvault init` — create a new vault protected by a master password.

use crate::cli::{output, prompt_new_password, vault_path, Cli};
use crate::config::Settings;
use crate::errors::Result;
use crate::vault::{VaultEngine, VaultStore};

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = Settings::load()?;
    let path = vault_path(cli, &settings)?;

    // Prompt for a new password (with confirmation) before any work.
    let password = prompt_new_password()?;

    let mut engine = VaultEngine::new(VaultStore::new(&path));
    engine.init(password.as_bytes())?;

    #[cfg(feature = "audit-log")]
    crate::audit::log_audit(&settings, &path, "init", "success", None, None);

    output::success_message(&format!("Vault created at {}", path.display()));
    Ok(())
}
