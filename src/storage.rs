//! Browser Session Storage
//!
//! `SessionStore` over `window.localStorage`, so the authenticated flag
//! survives a reload.

use favourites_core::SessionStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable, {} not persisted", key);
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("localStorage write failed for {}: {:?}", key, err);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.remove_item(key) {
                log::warn!("localStorage remove failed for {}: {:?}", key, err);
            }
        }
    }
}
