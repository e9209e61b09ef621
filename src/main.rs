use clap::Parser;
use latchvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => latchvault::cli::commands::init::execute(&cli),
        Commands::Unlock => latchvault::cli::commands::unlock::execute(&cli),
        Commands::Lock => latchvault::cli::commands::lock::execute(&cli),
        Commands::Status => latchvault::cli::commands::status::execute(&cli),
        Commands::Search { ref query } => latchvault::cli::commands::search::execute(&cli, query),
        Commands::RequestSecret {
            ref entry_id,
            ref field,
            copy,
        } => latchvault::cli::commands::request_secret::execute(&cli, entry_id, field, copy),
        Commands::Generate {
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_symbols,
            exclude_ambiguous,
        } => latchvault::cli::commands::generate::execute(
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_symbols,
            exclude_ambiguous,
        ),
        Commands::Completions { ref shell } => {
            latchvault::cli::commands::completions::execute(shell)
        }
        Commands::Audit { last, ref since } => {
            #[cfg(feature = "audit-log")]
            {
                latchvault::cli::commands::audit_cmd::execute(&cli, last, since.as_deref())
            }
            #[cfg(not(feature = "audit-log"))]
            {
                let _ = (last, since);
                Err(latchvault::errors::LatchVaultError::AuditError(
                    "this build was compiled without audit-log support".into(),
                ))
            }
        }
    };

    if let Err(e) = result {
        latchvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
