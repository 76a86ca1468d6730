//! List command.
//!
//! List the owner's users, default first.

use crate::cli::{output, Context};
use crate::error::Result;

/// List users.
pub fn execute(ctx: &Context, json: bool) -> Result<()> {
    let users = ctx.registry.users(&ctx.owner)?;

    if json {
        let result = serde_json::json!({
            "owner": ctx.owner.name(),
            "default": users.default_user(),
            "users": users,
            "count": users.len()
        });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else if users.is_empty() {
        output::dimmed("no users stored");
        output::hint("run: marmoset add <username>");
    } else {
        output::blank();
        output::header(&format!("{} users for {}", users.len(), ctx.owner));
        output::rule();
        for (i, name) in users.iter().enumerate() {
            if i == 0 {
                output::list_item(&format!("{} (default)", output::user(name)));
            } else {
                output::list_item(name);
            }
        }
    }

    Ok(())
}
