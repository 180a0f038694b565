// ============================================================================
// ERRORS - Failures surfaced by the profile screen
// ============================================================================

use thiserror::Error;

use crate::utils::constants::NO_USER_MESSAGE;

/// `Display` is the text shown to the user in the alert dialog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("{}", NO_USER_MESSAGE)]
    NoUser,

    #[error("{0}")]
    Network(String),

    /// Backend rejected the request; `message` is its own description
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_user_facing_description() {
        assert_eq!(ProfileError::NoUser.to_string(), "No user on the session!");
        assert_eq!(
            ProfileError::Api {
                status: 409,
                message: "duplicate key value violates unique constraint".to_string(),
            }
            .to_string(),
            "duplicate key value violates unique constraint"
        );
        assert_eq!(
            ProfileError::Network("Failed to fetch".to_string()).to_string(),
            "Failed to fetch"
        );
    }
}
