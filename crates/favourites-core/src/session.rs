//! Session Gate
//!
//! Holds the authenticated flag (persisted through an injectable
//! [`SessionStore`]) and the pre-auth view selector. Decides which screen is
//! shown; never talks to the network.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key of the persisted flag
pub const AUTH_KEY: &str = "authenticated";
const AUTH_VALUE: &str = "yes";

/// Minimal key/value persistence
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store, lost on drop
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// Views available before login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreAuthView {
    #[default]
    Home,
    Login,
    Signup,
}

/// What the app renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Login,
    Signup,
    Favourites,
}

#[derive(Debug)]
pub struct Session<S> {
    store: S,
    authenticated: bool,
    view: PreAuthView,
}

impl<S: SessionStore> Session<S> {
    /// Resume from whatever the store remembers
    pub fn restore(store: S) -> Self {
        let authenticated = store.get(AUTH_KEY).as_deref() == Some(AUTH_VALUE);
        Self {
            store,
            authenticated,
            view: PreAuthView::Home,
        }
    }

    pub fn authenticate(&mut self) {
        log::info!("session authenticated");
        self.authenticated = true;
        self.store.set(AUTH_KEY, AUTH_VALUE);
    }

    /// Explicit logout and forced logout on session expiry both land here
    pub fn deauthenticate(&mut self) {
        log::info!("session cleared");
        self.authenticated = false;
        self.view = PreAuthView::Home;
        self.store.remove(AUTH_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn show(&mut self, view: PreAuthView) {
        self.view = view;
    }

    pub fn view(&self) -> PreAuthView {
        self.view
    }

    pub fn screen(&self) -> Screen {
        if self.authenticated {
            return Screen::Favourites;
        }
        match self.view {
            PreAuthView::Home => Screen::Home,
            PreAuthView::Login => Screen::Login,
            PreAuthView::Signup => Screen::Signup,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
