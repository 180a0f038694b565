use crate::utils::constants::{NO_USER_MESSAGE, SAVE_CONFIRMATION_MESSAGE, SAVE_CONFIRMATION_TITLE};

/// One modal alert shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: Option<String>,
}

impl Notice {
    /// Single-line alert, the error's description as the title
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: description.into(),
            message: None,
        }
    }

    pub fn no_user() -> Self {
        Self::error(NO_USER_MESSAGE)
    }

    pub fn profile_updated() -> Self {
        Self {
            title: SAVE_CONFIRMATION_TITLE.to_string(),
            message: Some(SAVE_CONFIRMATION_MESSAGE.to_string()),
        }
    }

    pub fn is_profile_updated(&self) -> bool {
        self.message.as_deref() == Some(SAVE_CONFIRMATION_MESSAGE)
    }
}
