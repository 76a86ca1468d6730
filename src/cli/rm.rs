//! Remove command - forget a user and its password.

use crate::cli::{output, Context};
use crate::error::Result;

/// Remove a user.
pub fn execute(ctx: &Context, username: &str) -> Result<()> {
    ctx.registry.remove(&ctx.owner, Some(username))?;
    output::success(&format!("removed {}", output::user(username)));

    if let Some(default) = ctx.registry.users(&ctx.owner)?.default_user() {
        output::dimmed(&format!("default user: {}", default));
    }
    Ok(())
}
