//! Add command - store a Marmoset username and password.

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::cli::{output, Context};
use crate::core::validation;
use crate::error::Result;

/// Store a credential, prompting for the password when none was passed.
pub fn execute(ctx: &Context, username: &str, password: Option<String>) -> Result<()> {
    // Reject bad usernames before asking for a password
    validation::validate_username(username)?;

    let password = match password {
        Some(password) => Zeroizing::new(password),
        None => Zeroizing::new(
            Password::new()
                .with_prompt(format!("Password for {}", username))
                .with_confirmation("Confirm password", "Passwords don't match")
                .interact()?,
        ),
    };

    let was_known = ctx.registry.exists(&ctx.owner, username)?;
    ctx.registry.store(&ctx.owner, username, &password)?;

    if was_known {
        output::success(&format!("updated password for {}", output::user(username)));
    } else {
        output::success(&format!("stored {}", output::user(username)));
    }

    let users = ctx.registry.users(&ctx.owner)?;
    if users.len() == 1 {
        output::dimmed(&format!("{} is the default user", username));
    }

    Ok(())
}
