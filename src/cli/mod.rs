//! Command-line interface.

pub mod add;
pub mod completions;
pub mod default;
pub mod get;
pub mod list;
pub mod output;
pub mod rm;
pub mod whoami;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::constants;
use crate::core::domain::Owner;
use crate::core::registry::Registry;
use crate::core::store::{self, SecretStore};
use crate::error::Result;

/// Marmoset - keep your Marmoset submission credentials in the platform keyring.
#[derive(Parser)]
#[command(
    name = "marmoset",
    about = "Keep Marmoset submission credentials in your platform keyring",
    version
)]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Manage users for this account instead of the current OS account
    #[arg(long, global = true, env = constants::ENV_OWNER)]
    pub owner: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Store a username and password (prompts for the password if omitted)
    Add {
        /// Marmoset username
        username: String,
        /// Password (read interactively when not given)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show the default user, or a named one
    Get {
        /// Marmoset username (defaults to the default user)
        username: Option<String>,
        /// Also print the password
        #[arg(long)]
        show_password: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Make a user the default
    Default {
        /// Marmoset username
        username: String,
    },

    /// Remove a user and its stored password
    Rm {
        /// Marmoset username
        username: String,
    },

    /// List stored users
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the owning account and storage backend
    Whoami,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Everything a command needs to talk to the registry.
pub struct Context {
    pub config: Config,
    pub owner: Owner,
    pub registry: Registry<Box<dyn SecretStore>>,
}

impl Context {
    /// Load configuration and open the configured backend.
    pub fn open(owner: Option<String>) -> Result<Self> {
        let config = Config::load()?;
        let owner = owner
            .filter(|o| !o.is_empty())
            .map(Owner::new)
            .unwrap_or_else(Owner::current);
        let registry = Registry::new(store::default_backend(&config));
        Ok(Self {
            config,
            owner,
            registry,
        })
    }
}

/// Execute a command.
pub fn execute(command: Command, owner: Option<String>) -> Result<()> {
    use Command::*;

    match command {
        Add { username, password } => add::execute(&Context::open(owner)?, &username, password),
        Get {
            username,
            show_password,
            json,
        } => get::execute(
            &Context::open(owner)?,
            username.as_deref(),
            show_password,
            json,
        ),
        Default { username } => default::execute(&Context::open(owner)?, &username),
        Rm { username } => rm::execute(&Context::open(owner)?, &username),
        List { json } => list::execute(&Context::open(owner)?, json),
        Whoami => whoami::execute(&Context::open(owner)?),
        Completions { shell } => completions::execute(shell),
    }
}
