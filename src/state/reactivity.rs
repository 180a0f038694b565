// ============================================================================
// REACTIVITY - Shared value with change subscribers
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback = Rc<dyn Fn()>;

/// Value shared through `Rc<RefCell>` that notifies subscribers on writes.
///
/// Clones share both the value and the subscriber list.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Reads the value without cloning it
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        let value = self.value.borrow();
        reader(&*value)
    }

    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Handle that does not keep the value alive; for subscribers that
    /// need to read the state they are registered on
    pub fn downgrade(&self) -> WeakReactiveState<T> {
        WeakReactiveState {
            value: Rc::downgrade(&self.value),
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn notify(&self) {
        // Snapshot so callbacks may read the value or subscribe again
        let callbacks: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T: PartialEq> ReactiveState<T> {
    /// Writes and notifies only when the value actually changes
    pub fn set_if_changed(&self, new_value: T) -> bool {
        if *self.value.borrow() == new_value {
            return false;
        }
        self.set(new_value);
        true
    }
}

pub struct WeakReactiveState<T> {
    value: Weak<RefCell<T>>,
    subscribers: Weak<RefCell<Vec<Callback>>>,
}

impl<T> WeakReactiveState<T> {
    pub fn upgrade(&self) -> Option<ReactiveState<T>> {
        Some(ReactiveState {
            value: self.value.upgrade()?,
            subscribers: self.subscribers.upgrade()?,
        })
    }
}

impl<T> Clone for WeakReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T: Default> Default for ReactiveState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn notifies_on_set_and_update() {
        let state = ReactiveState::new(1);
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1));
        }

        state.set(2);
        state.update(|v| *v += 1);

        assert_eq!(state.get(), 3);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn set_if_changed_skips_equal_values() {
        let state = ReactiveState::new(false);
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1));
        }

        assert!(!state.set_if_changed(false));
        assert!(state.set_if_changed(true));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(String::new());
        let clone = state.clone();
        let seen = Rc::new(RefCell::new(String::new()));
        {
            let seen = seen.clone();
            let reader = state.clone();
            state.subscribe(move || *seen.borrow_mut() = reader.get());
        }

        clone.set("alice".to_string());

        assert_eq!(state.get(), "alice");
        assert_eq!(*seen.borrow(), "alice");
        assert_eq!(clone.subscriber_count(), 1);
    }

    #[test]
    fn weak_handle_does_not_keep_state_alive() {
        let state = ReactiveState::new(0);
        let weak = state.downgrade();
        {
            let weak = weak.clone();
            state.subscribe(move || {
                if let Some(state) = weak.upgrade() {
                    assert!(state.get() > 0);
                }
            });
        }
        state.set(1);
        assert!(weak.upgrade().is_some());

        drop(state);
        assert!(weak.upgrade().is_none());
    }
}
