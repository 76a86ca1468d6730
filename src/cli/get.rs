//! Get command - show the default user or a named one.

use crate::cli::{output, Context};
use crate::error::{NoUserError, Result};

/// Look up a user and print it.
///
/// Fails when nothing matches, so scripts can rely on the exit status.
pub fn execute(
    ctx: &Context,
    username: Option<&str>,
    show_password: bool,
    json: bool,
) -> Result<()> {
    let lookup = ctx.registry.retrieve(&ctx.owner, username)?;

    if lookup.is_listed() && lookup.password().is_none() {
        let name = lookup.username().unwrap_or_default().to_string();
        return Err(NoUserError::MissingPassword(name).into());
    }

    let Some(credential) = lookup.into_credential() else {
        return Err(match username.filter(|u| !u.is_empty()) {
            Some(name) => NoUserError::Unknown(name.to_string()),
            None => NoUserError::NoneStored(ctx.owner.to_string()),
        }
        .into());
    };

    if json {
        let mut result = serde_json::json!({ "username": credential.username() });
        if show_password {
            result["password"] = serde_json::json!(credential.password());
        }
        output::data(&serde_json::to_string_pretty(&result)?);
    } else if show_password {
        output::data(credential.username());
        output::data(credential.password());
    } else {
        output::data(credential.username());
    }

    Ok(())
}
