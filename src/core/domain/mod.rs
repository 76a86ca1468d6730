//! Domain types.

mod credential;
mod owner;
mod user_list;

pub use credential::{Credential, Lookup};
pub use owner::Owner;
pub use user_list::UserList;
