use gloo_storage::{errors::StorageError, LocalStorage, Storage};
use serde::de::DeserializeOwned;

/// `Ok(None)` when the key is absent, `Err` when the stored JSON is unreadable.
pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Result<Option<T>, String> {
    match LocalStorage::get::<T>(key) {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(e) => Err(format!("Error reading localStorage[{}]: {}", key, e)),
    }
}

pub fn remove_from_storage(key: &str) {
    LocalStorage::delete(key);
}
