//! Default command - switch the default user.

use crate::cli::{output, Context};
use crate::error::Result;

/// Make a user the default.
pub fn execute(ctx: &Context, username: &str) -> Result<()> {
    ctx.registry.set_default(&ctx.owner, Some(username))?;
    output::success(&format!("{} is now the default user", output::user(username)));
    Ok(())
}
