// ============================================================================
// SESSION STATE - Current auth session owned by the app shell
// ============================================================================

use crate::models::Session;
use crate::state::ReactiveState;

#[derive(Clone, Default)]
pub struct SessionState {
    session: ReactiveState<Option<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_session(&self) -> Option<Session> {
        self.session.get()
    }

    /// Notifies only when the session value changes
    pub fn set_session(&self, session: Option<Session>) -> bool {
        self.session.set_if_changed(session)
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.session.subscribe(callback);
    }
}
