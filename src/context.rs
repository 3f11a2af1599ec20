//! Application Context
//!
//! Session and toast handles provided via the Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use favourites_core::{HttpClient, Notice, PreAuthView, Screen, Session};

use crate::storage::LocalStore;

/// How long a toast stays on screen
const TOAST_MS: u32 = 1_000;

/// Session gate shared by every view, plus the one API client
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session<LocalStore>>,
    client: StoredValue<HttpClient, LocalStorage>,
}

impl SessionContext {
    pub fn new(session: Session<LocalStore>, client: HttpClient) -> Self {
        Self {
            session: RwSignal::new(session),
            client: StoredValue::new_local(client),
        }
    }

    /// Current screen (tracked)
    pub fn screen(&self) -> Screen {
        self.session.with(|s| s.screen())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with_untracked(|s| s.is_authenticated())
    }

    pub fn show(&self, view: PreAuthView) {
        self.session.update(|s| s.show(view));
    }

    pub fn authenticate(&self) {
        self.session.update(|s| s.authenticate());
    }

    /// Logout, explicit or forced by an expired session
    pub fn deauthenticate(&self) {
        self.session.update(|s| s.deauthenticate());
    }

    /// Shared client; clones share one connection pool and cookie jar
    pub fn client(&self) -> HttpClient {
        self.client.get_value()
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Single transient message slot, auto-dismissed
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<(u64, Notice)>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    /// Notice on screen (tracked)
    pub fn current(&self) -> Option<Notice> {
        self.current.with(|c| c.as_ref().map(|(_, n)| n.clone()))
    }

    pub fn show(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.current.set(Some((id, notice)));

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            // A newer toast keeps its own timer
            current.try_update(|c| {
                if matches!(c, Some((shown, _)) if *shown == id) {
                    *c = None;
                }
            });
        });
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}
