//! Whoami command - show which account owns the user list and where it lives.

use crate::cli::{output, Context};
use crate::core::config::Backend;
use crate::error::Result;

/// Print owner, service, and backend.
pub fn execute(ctx: &Context) -> Result<()> {
    output::kv("owner:  ", &ctx.owner);
    output::kv("service:", &ctx.config.service);
    output::kv("backend:", ctx.config.backend);
    if ctx.config.backend == Backend::File {
        output::kv("store:  ", ctx.config.store_path().display());
        output::warn("the file backend stores passwords unencrypted");
    }
    Ok(())
}
