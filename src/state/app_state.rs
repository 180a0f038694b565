// ============================================================================
// APP STATE - Global state of the app shell
// ============================================================================

use crate::services::{ApiClient, SessionService};
use crate::state::SessionState;

/// Global state; the profile screen keeps its own `ProfileState`
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub api: ApiClient,
    pub session_service: SessionService,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_services(ApiClient::new(), SessionService::new())
    }

    pub fn with_services(api: ApiClient, session_service: SessionService) -> Self {
        let state = Self {
            session: SessionState::new(),
            api,
            session_service,
        };

        // Keep the bearer token in step with the session
        {
            let api = state.api.clone();
            let session = state.session.clone();
            state.session.subscribe(move || {
                api.set_access_token(session.get_session().map(|s| s.access_token));
            });
        }

        state
    }

    /// Picks up a session persisted by the auth provider
    pub fn restore_session(&self) {
        let session = self.session_service.load_session();
        self.session.set_session(session);
    }

    /// Forgets the session locally after the backend sign-out ran
    pub fn end_session(&self) {
        self.session_service.clear_session();
        self.session.set_session(None);
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.session.subscribe(callback);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::{Session, SessionUser};

    fn state() -> AppState {
        let api = ApiClient::from_config(&AppConfig::default());
        AppState::with_services(api, SessionService::with_key("test-session"))
    }

    #[test]
    fn access_token_follows_session() {
        let state = state();
        assert_eq!(state.api.access_token(), None);

        state.session.set_session(Some(Session {
            access_token: "jwt-1".to_string(),
            refresh_token: None,
            token_type: None,
            expires_at: None,
            user: Some(SessionUser { id: "u1".to_string(), email: None }),
        }));
        assert_eq!(state.api.access_token().as_deref(), Some("jwt-1"));

        state.session.set_session(None);
        assert_eq!(state.api.access_token(), None);
    }

    #[test]
    fn unchanged_session_does_not_notify() {
        let state = state();
        let hits = std::rc::Rc::new(std::cell::Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe_to_changes(move || hits.set(hits.get() + 1));
        }

        assert!(!state.session.set_session(None));
        assert_eq!(hits.get(), 0);
    }
}
