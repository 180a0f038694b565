use serde::{Deserialize, Serialize};

// ============================================================================
// SESSION - Auth provider session (read-only here)
// ============================================================================

/// User attached to a session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Session as persisted by the auth provider.
///
/// Only the fields the screen reads are modeled; everything else in the
/// stored JSON is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Unix seconds
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.email.as_deref())
    }

    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now_unix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_persisted_supabase_session() {
        let raw = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": 1700000000,
            "refresh_token": "refresh",
            "user": { "id": "u1", "email": "alice@example.com", "aud": "authenticated" }
        }"#;

        let session: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(session.user_id(), Some("u1"));
        assert_eq!(session.email(), Some("alice@example.com"));
        assert!(session.is_expired(1_700_000_000));
        assert!(!session.is_expired(1_699_999_999));
    }

    #[test]
    fn session_without_user_has_no_identity() {
        let session: Session = serde_json::from_str(r#"{"access_token":"jwt"}"#).unwrap();
        assert_eq!(session.user_id(), None);
        assert_eq!(session.email(), None);
        assert!(!session.is_expired(0));
    }
}
