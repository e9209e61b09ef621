//! `latchvault lock` — discard any unlocked session state.
//!
//! Every invocation runs in its own process, so there is never a live
//! session to tear down here; the command exists so scripts driving the
//! vault can pair every unlock with an explicit lock.

use crate::cli::{output, vault_path, Cli};
use crate::config::Settings;
use crate::errors::Result;
use crate::vault::{VaultEngine, VaultStore};

/// Execute the `lock` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = Settings::load()?;
    let path = vault_path(cli, &settings)?;

    let mut engine = VaultEngine::new(VaultStore::new(&path));
    engine.lock();

    #[cfg(feature = "audit-log")]
    crate::audit::log_audit(&settings, &path, "lock", "success", None, None);

    output::success();
    Ok(())
}
