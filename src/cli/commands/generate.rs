//! `latchvault generate` — produce a random password.
//!
//! Works without a vault or a password; the generator never touches
//! encrypted state.

use crate::cli::output;
use crate::errors::Result;
use crate::generator::{generate_password, PasswordOptions};

/// Execute the `generate` command.
#[allow(clippy::fn_params_excessive_bools)]
pub fn execute(
    length: u32,
    no_lowercase: bool,
    no_uppercase: bool,
    no_digits: bool,
    no_symbols: bool,
    exclude_ambiguous: bool,
) -> Result<()> {
    let options = PasswordOptions {
        length,
        lowercase: !no_lowercase,
        uppercase: !no_uppercase,
        digits: !no_digits,
        symbols: !no_symbols,
        exclude_ambiguous,
    };

    let password = generate_password(&options)?;
    output::success_value("password", &password);
    Ok(())
}
