//! Item List Controller
//!
//! Drives an [`ItemListState`] against an [`ItemApi`], one request at a time,
//! and logs the session out when the server reports it expired.

use crate::api::ItemApi;
use crate::domain::ItemKey;
use crate::session::{Session, SessionStore};

use super::state::{Followup, ItemListState};

pub struct ItemListController<A, S> {
    api: A,
    session: Session<S>,
    state: ItemListState,
}

impl<A: ItemApi, S: SessionStore> ItemListController<A, S> {
    pub fn new(api: A, session: Session<S>) -> Self {
        Self {
            api,
            session,
            state: ItemListState::new(),
        }
    }

    pub fn state(&self) -> &ItemListState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ItemListState {
        &mut self.state
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn mount(&mut self) {
        let ticket = self.state.mount();
        self.run(Followup::Fetch(ticket)).await;
    }

    pub async fn refresh(&mut self) {
        let ticket = self.state.refresh();
        self.run(Followup::Fetch(ticket)).await;
    }

    pub async fn change_page(&mut self, page: u32) {
        if let Some(ticket) = self.state.request_page(page) {
            self.run(Followup::Fetch(ticket)).await;
        }
    }

    pub async fn add_link(&mut self, raw_link: &str) {
        let Some(key) = self.state.begin_add(raw_link) else {
            return;
        };
        let result = self.api.submit_item(&key).await;
        let followup = self.state.apply_add(result);
        self.run(followup).await;
    }

    pub async fn delete(&mut self, key: ItemKey) {
        self.state.begin_delete();
        let result = self.api.delete_item(&key).await;
        let followup = self.state.apply_delete(key, result);
        self.run(followup).await;
    }

    async fn run(&mut self, mut followup: Followup) {
        loop {
            followup = match followup {
                Followup::Fetch(ticket) => {
                    let result = self.api.get_item_list(ticket.page_index()).await;
                    self.state.apply_fetch(ticket, result)
                }
                Followup::Deauthenticate => {
                    self.session.deauthenticate();
                    return;
                }
                Followup::None | Followup::Ignored => return,
            };
        }
    }
}
