//! `latchvault unlock` — verify the master password against the vault.

use crate::cli::{output, prompt_password, vault_path, Cli};
use crate::config::Settings;
use crate::errors::Result;
use crate::vault::{VaultEngine, VaultStore};

/// Execute the `unlock` command.
///
/// Failed attempts are recorded in the audit log; the uniform
/// `InvalidPassword` error is all that ever leaves the process.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = Settings::load()?;
    let path = vault_path(cli, &settings)?;

    let password = prompt_password()?;

    let mut engine = VaultEngine::new(VaultStore::new(&path));
    match engine.unlock(password.as_bytes()) {
        Ok(()) => {
            #[cfg(feature = "audit-log")]
            crate::audit::log_audit(&settings, &path, "unlock", "success", None, None);

            output::success_message("Vault unlocked");
            Ok(())
        }
        Err(e) => {
            #[cfg(feature = "audit-log")]
            crate::audit::log_audit(
                &settings,
                &path,
                "unlock",
                "error",
                None,
                Some(&e.to_string()),
            );

            Err(e)
        }
    }
}
