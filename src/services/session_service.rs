use crate::config::CONFIG;
use crate::models::Session;
use crate::utils::{load_from_storage, remove_from_storage};

/// Reads the session the auth provider persisted in localStorage.
///
/// Signing in happens outside this app; this service only picks the result up
/// and forgets it on sign out.
#[derive(Clone)]
pub struct SessionService {
    storage_key: String,
}

impl SessionService {
    pub fn new() -> Self {
        Self::with_key(CONFIG.session_storage_key())
    }

    pub fn with_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    /// Expired or unreadable sessions count as absent
    pub fn load_session(&self) -> Option<Session> {
        match load_from_storage::<Session>(&self.storage_key) {
            Ok(Some(session)) => {
                if session.is_expired(chrono::Utc::now().timestamp()) {
                    log::warn!("⏰ [SESSION] Stored session expired, ignoring it");
                    None
                } else {
                    log::info!("💾 [SESSION] Session restored from {}", self.storage_key);
                    Some(session)
                }
            }
            Ok(None) => {
                log::info!("🔓 [SESSION] No stored session under {}", self.storage_key);
                None
            }
            Err(e) => {
                log::error!("❌ [SESSION] {}", e);
                None
            }
        }
    }

    pub fn clear_session(&self) {
        remove_from_storage(&self.storage_key);
        log::info!("🗑️ [SESSION] Stored session cleared");
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
