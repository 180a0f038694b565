// ============================================================================
// PROFILE VIEWMODEL - Profile screen logic
// ============================================================================
// Load on session, field edits, upsert on submit, sign out.
// Views render `ProfileState` and forward user actions here.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::Utc;

use crate::config::{SaveConfirmation, CONFIG};
use crate::errors::ProfileError;
use crate::models::{Notice, ProfileField, ProfileForm, ProfileUpdate, Session};
use crate::services::{ProfileBackend, Notifier};
use crate::state::ProfileState;

/// Remote operation occupying the in-flight slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Save,
}

/// Result of one `save` trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed(ProfileError),
    /// Another operation was outstanding; nothing was sent
    Skipped,
}

/// Holds the in-flight slot; releasing it clears `loading`
struct InFlightGuard {
    slot: Rc<Cell<Option<Operation>>>,
    mounted: Rc<Cell<bool>>,
    state: ProfileState,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.slot.set(None);
        if self.mounted.get() {
            self.state.set_loading(false);
        }
    }
}

pub struct ProfileViewModel<B, N> {
    backend: Rc<B>,
    notifier: Rc<N>,
    state: ProfileState,
    session: Rc<RefCell<Option<Session>>>,
    in_flight: Rc<Cell<Option<Operation>>>,
    /// Bumped on every session change; a load only applies to its own generation
    generation: Rc<Cell<u64>>,
    /// A load was requested while the slot was taken
    pending_load: Rc<Cell<bool>>,
    mounted: Rc<Cell<bool>>,
    confirmation: SaveConfirmation,
}

impl<B, N> Clone for ProfileViewModel<B, N> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            notifier: self.notifier.clone(),
            state: self.state.clone(),
            session: self.session.clone(),
            in_flight: self.in_flight.clone(),
            generation: self.generation.clone(),
            pending_load: self.pending_load.clone(),
            mounted: self.mounted.clone(),
            confirmation: self.confirmation,
        }
    }
}

impl<B: ProfileBackend, N: Notifier> ProfileViewModel<B, N> {
    /// Fresh screen: empty form, no session yet
    pub fn new(backend: B, notifier: N) -> Self {
        Self {
            backend: Rc::new(backend),
            notifier: Rc::new(notifier),
            state: ProfileState::new(),
            session: Rc::new(RefCell::new(None)),
            in_flight: Rc::new(Cell::new(None)),
            generation: Rc::new(Cell::new(0)),
            pending_load: Rc::new(Cell::new(false)),
            mounted: Rc::new(Cell::new(true)),
            confirmation: CONFIG.save_confirmation,
        }
    }

    pub fn with_confirmation(mut self, confirmation: SaveConfirmation) -> Self {
        self.confirmation = confirmation;
        self
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn form(&self) -> ProfileForm {
        self.state.form()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn in_flight(&self) -> Option<Operation> {
        self.in_flight.get()
    }

    /// Email shown in the read-only field
    pub fn email(&self) -> String {
        self.session
            .borrow()
            .as_ref()
            .and_then(Session::email)
            .unwrap_or_default()
            .to_string()
    }

    fn user_id(&self) -> Option<String> {
        self.session
            .borrow()
            .as_ref()
            .and_then(Session::user_id)
            .map(str::to_string)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Detaches the screen; late completions are dropped from here on
    pub fn unmount(&self) {
        if self.mounted.replace(false) {
            log::debug!("🧹 [PROFILE] Screen unmounted");
        }
    }

    /// New session value from the app shell. A present value that differs
    /// from the previous one triggers a load; if another operation holds the
    /// slot, the load runs as soon as it is released.
    pub async fn set_session(&self, session: Option<Session>) {
        let should_load = {
            let mut current = self.session.borrow_mut();
            if *current == session {
                false
            } else {
                let present = session.is_some();
                *current = session;
                self.generation.set(self.generation.get() + 1);
                present
            }
        };

        if should_load {
            self.load().await;
        }
    }

    pub fn update_field(&self, field: ProfileField, value: String) {
        self.state.set_field(field, value);
    }

    fn notify(&self, notice: Notice) {
        if self.is_mounted() {
            self.notifier.notify(notice);
        } else {
            log::info!("🔕 [PROFILE] Screen unmounted, dropping notice: {}", notice.title);
        }
    }

    fn begin(&self, operation: Operation) -> Option<InFlightGuard> {
        if let Some(outstanding) = self.in_flight.get() {
            log::warn!(
                "⏳ [PROFILE] {:?} ignored, {:?} still outstanding",
                operation,
                outstanding
            );
            return None;
        }

        self.in_flight.set(Some(operation));
        self.state.set_loading(true);
        Some(InFlightGuard {
            slot: self.in_flight.clone(),
            mounted: self.mounted.clone(),
            state: self.state.clone(),
        })
    }

    /// Fetches the session user's row and hydrates the form
    pub async fn load(&self) {
        self.load_once().await;
        self.run_pending_load().await;
    }

    /// Runs a load queued behind the operation that just released the slot
    async fn run_pending_load(&self) {
        while self.in_flight.get().is_none()
            && self.is_mounted()
            && self.pending_load.replace(false)
        {
            log::info!("🔁 [PROFILE] Running queued load");
            self.load_once().await;
        }
    }

    async fn load_once(&self) {
        let Some(user_id) = self.user_id() else {
            log::warn!("⚠️ [PROFILE] Load without a session user");
            self.notify(Notice::no_user());
            return;
        };

        let Some(_guard) = self.begin(Operation::Load) else {
            self.pending_load.set(true);
            return;
        };

        let generation = self.generation.get();
        log::info!("📋 [PROFILE] Loading profile for {}", user_id);
        let result = self.backend.fetch_profile(&user_id).await;

        if !self.is_mounted() {
            log::info!("🔕 [PROFILE] Load finished after unmount, result discarded");
            return;
        }

        if self.generation.get() != generation {
            log::info!("🔕 [PROFILE] Session changed during load of {}, result discarded", user_id);
            return;
        }

        // This load already covers the current session
        self.pending_load.set(false);

        match result {
            Ok(Some(row)) => {
                self.state.form.update(|form| form.hydrate(row));
                log::info!("✅ [PROFILE] Profile loaded");
            }
            Ok(None) => {
                log::info!("📭 [PROFILE] No profile row yet, keeping current form");
            }
            Err(e) => {
                log::error!("❌ [PROFILE] Load failed: {}", e);
                self.notify(Notice::error(e.to_string()));
            }
        }
    }

    /// Upserts the current form under the session user's id
    pub async fn save(&self) -> SaveOutcome {
        let outcome = self.persist().await;

        if outcome == SaveOutcome::Skipped || !self.is_mounted() {
            return outcome;
        }

        let confirm = match self.confirmation {
            SaveConfirmation::Always => true,
            SaveConfirmation::OnSuccess => outcome == SaveOutcome::Saved,
        };
        if confirm {
            self.notify(Notice::profile_updated());
        }

        self.run_pending_load().await;
        outcome
    }

    async fn persist(&self) -> SaveOutcome {
        let Some(user_id) = self.user_id() else {
            log::warn!("⚠️ [PROFILE] Save without a session user");
            self.notify(Notice::no_user());
            return SaveOutcome::Failed(ProfileError::NoUser);
        };

        let Some(_guard) = self.begin(Operation::Save) else {
            return SaveOutcome::Skipped;
        };

        let update = ProfileUpdate::from_form(&user_id, &self.state.form(), Utc::now());
        log::info!("💾 [PROFILE] Saving profile for {}", user_id);

        match self.backend.upsert_profile(&update).await {
            Ok(()) => {
                log::info!("✅ [PROFILE] Profile saved");
                SaveOutcome::Saved
            }
            Err(e) => {
                log::error!("❌ [PROFILE] Save failed: {}", e);
                self.notify(Notice::error(e.to_string()));
                SaveOutcome::Failed(e)
            }
        }
    }

    /// Delegates to the auth provider; the app shell reacts to the session ending
    pub async fn sign_out(&self) {
        log::info!("👋 [PROFILE] Signing out");
        if let Err(e) = self.backend.sign_out().await {
            log::error!("❌ [PROFILE] Sign out failed: {}", e);
        }
    }
}
