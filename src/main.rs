//! Marmoset - keep your Marmoset submission credentials in the platform keyring.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use marmoset::cli::output;
use marmoset::cli::{execute, Cli};
use marmoset::core::constants;
use marmoset::error::{ConfigError, Error, NoUserError, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::ENV_LOG).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("marmoset=debug")
        } else {
            EnvFilter::new("marmoset=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.owner) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::NoUser(NoUserError::Unknown(_)) => Some("run: marmoset list"),
            Error::NoUser(NoUserError::NoneStored(_)) => Some("run: marmoset add <username>"),
            Error::NoUser(NoUserError::MissingPassword(_)) => {
                Some("run: marmoset add <username> to store the password again")
            }
            Error::Store(StoreError::Keyring(_)) => {
                Some("set MARMOSET_BACKEND=file to use the file store instead")
            }
            Error::Config(ConfigError::UnknownBackend(_)) => {
                Some("set MARMOSET_BACKEND to 'keyring' or 'file'")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
