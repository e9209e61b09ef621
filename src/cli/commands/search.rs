//! `latchvault search` — list entries matching a query.

use crate::cli::{output, prompt_password, vault_path, Cli};
use crate::config::Settings;
use crate::errors::Result;
use crate::vault::{VaultEngine, VaultStore};

/// Execute the `search` command.
///
/// An empty query lists every entry. Only id, title and username reach
/// stdout; secret fields stay sealed until explicitly requested.
pub fn execute(cli: &Cli, query: &str) -> Result<()> {
    let settings = Settings::load()?;
    let path = vault_path(cli, &settings)?;

    let password = prompt_password()?;

    let mut engine = VaultEngine::new(VaultStore::new(&path));
    engine.unlock(password.as_bytes())?;
    let entries = engine.list(query)?;

    #[cfg(feature = "audit-log")]
    crate::audit::log_audit(&settings, &path, "search", "success", Some(query), None);

    output::success_value("entries", &entries);
    Ok(())
}
