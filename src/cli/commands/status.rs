//! `latchvault status` — report vault presence and session state.

use crate::cli::{output, vault_path, Cli};
use crate::config::Settings;
use crate::errors::Result;
use crate::vault::{VaultEngine, VaultStore};

/// Execute the `status` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = Settings::load()?;
    let path = vault_path(cli, &settings)?;

    let engine = VaultEngine::new(VaultStore::new(&path));
    let status = engine.status();

    output::success_object(&status);
    Ok(())
}
