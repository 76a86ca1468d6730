//! Input validation for marmoset operations.

use crate::core::constants::{USERS_KEY_PREFIX, USER_SEPARATOR};
use crate::error::{Result, ValidationError};

/// Validate a Marmoset username before it is stored.
///
/// Usernames double as secret store keys and as entries of the
/// comma-separated user list, so:
/// - Cannot be empty
/// - Cannot contain the list separator (`,`)
/// - Cannot have leading or trailing whitespace
/// - Cannot start with the user list key prefix
///
/// # Errors
///
/// Returns `ValidationError` if the username is invalid.
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(ValidationError::EmptyUsername.into());
    }

    let reason = if username.contains(USER_SEPARATOR) {
        Some(format!("cannot contain '{}'", USER_SEPARATOR))
    } else if username.trim() != username {
        Some("cannot have leading or trailing whitespace".to_string())
    } else if username.starts_with(USERS_KEY_PREFIX) {
        Some(format!("cannot start with '{}'", USERS_KEY_PREFIX))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ValidationError::InvalidUsername {
            username: username.to_string(),
            reason,
        }
        .into()),
        None => Ok(()),
    }
}
