// ============================================================================
// PROFILE STATE - Form + loading flag of one mounted profile screen
// ============================================================================

use crate::models::{ProfileField, ProfileForm};
use crate::state::{ReactiveState, WeakReactiveState};
use crate::utils::constants::{LOADING_BUTTON_LABEL, UPDATE_BUTTON_LABEL};

#[derive(Clone, Default)]
pub struct ProfileState {
    pub form: ReactiveState<ProfileForm>,
    pub loading: ReactiveState<bool>,
}

impl ProfileState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> ProfileForm {
        self.form.get()
    }

    pub fn field(&self, field: ProfileField) -> String {
        self.form.with(|form| form.get(field).to_string())
    }

    pub fn set_field(&self, field: ProfileField, value: String) {
        self.form.update(|form| form.set(field, value));
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn set_loading(&self, loading: bool) {
        self.loading.set_if_changed(loading);
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            LOADING_BUTTON_LABEL
        } else {
            UPDATE_BUTTON_LABEL
        }
    }

    pub fn downgrade(&self) -> WeakProfileState {
        WeakProfileState {
            form: self.form.downgrade(),
            loading: self.loading.downgrade(),
        }
    }

    /// Like `subscribe`, but hands the callback this state without the
    /// subscription keeping it alive
    pub fn watch<F>(&self, callback: F)
    where
        F: Fn(&ProfileState) + 'static,
    {
        let weak = self.downgrade();
        self.subscribe(move || {
            if let Some(state) = weak.upgrade() {
                callback(&state);
            }
        });
    }

    /// Any change to the form or the loading flag
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        let callback = std::rc::Rc::new(callback);
        let on_form = callback.clone();
        self.form.subscribe(move || on_form());
        self.loading.subscribe(move || callback());
    }
}

pub struct WeakProfileState {
    form: WeakReactiveState<ProfileForm>,
    loading: WeakReactiveState<bool>,
}

impl WeakProfileState {
    pub fn upgrade(&self) -> Option<ProfileState> {
        Some(ProfileState {
            form: self.form.upgrade()?,
            loading: self.loading.upgrade()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn watcher_sees_changes_without_keeping_state_alive() {
        let state = ProfileState::new();
        let labels = Rc::new(RefCell::new(Vec::new()));
        {
            let labels = labels.clone();
            state.watch(move |state| labels.borrow_mut().push(state.submit_label()));
        }

        state.set_loading(true);
        state.set_loading(false);
        assert_eq!(*labels.borrow(), vec![LOADING_BUTTON_LABEL, UPDATE_BUTTON_LABEL]);

        let weak = state.downgrade();
        drop(state);
        assert!(weak.upgrade().is_none());
    }
}
