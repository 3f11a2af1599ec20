//! Item List Component
//!
//! Paginated favourites with add-by-link, refresh and delete. All list
//! transitions go through `ItemListState`; this component only runs the
//! requests it asks for and shows the notices it leaves behind.

use leptos::prelude::*;
use leptos::task::spawn_local;

use favourites_core::{FavouriteItem, Followup, ItemApi, ItemKey, ItemListState, ListPhase};

use crate::components::{ItemCard, Pagination};
use crate::context::{use_session, use_toaster, SessionContext, Toaster};

/// Glue between the list state signal and the network
#[derive(Clone, Copy)]
struct ListActions {
    session: SessionContext,
    toaster: Toaster,
    list: RwSignal<ItemListState>,
}

impl ListActions {
    fn flush_notice(&self) {
        if let Some(notice) = self.list.try_update(|s| s.take_notice()).flatten() {
            self.toaster.show(notice);
        }
    }

    fn follow(self, followup: Followup) {
        match followup {
            Followup::Fetch(ticket) => {
                let client = self.session.client();
                spawn_local(async move {
                    let result = client.get_item_list(ticket.page_index()).await;
                    let Some(next) = self.list.try_update(|s| s.apply_fetch(ticket, result)) else {
                        return;
                    };
                    self.flush_notice();
                    self.follow(next);
                });
            }
            Followup::Deauthenticate => self.session.deauthenticate(),
            Followup::None | Followup::Ignored => {}
        }
    }

    fn mount(self) {
        if let Some(ticket) = self.list.try_update(|s| s.mount()) {
            self.follow(Followup::Fetch(ticket));
        }
    }

    fn refresh(self) {
        if let Some(ticket) = self.list.try_update(|s| s.refresh()) {
            self.follow(Followup::Fetch(ticket));
        }
    }

    fn go_to(self, page: u32) {
        if let Some(ticket) = self.list.try_update(|s| s.request_page(page)).flatten() {
            self.follow(Followup::Fetch(ticket));
        }
    }

    fn add(self, raw: String, link: RwSignal<String>) {
        let Some(key) = self.list.try_update(|s| s.begin_add(&raw)).flatten() else {
            self.flush_notice();
            return;
        };
        let client = self.session.client();
        spawn_local(async move {
            let result = client.submit_item(&key).await;
            let added = result.is_ok();
            let Some(next) = self.list.try_update(|s| s.apply_add(result)) else {
                return;
            };
            if added {
                link.try_set(String::new());
            }
            self.flush_notice();
            self.follow(next);
        });
    }

    fn delete(self, key: ItemKey) {
        let client = self.session.client();
        self.list.update(|s| s.begin_delete());
        spawn_local(async move {
            let result = client.delete_item(&key).await;
            let Some(next) = self.list.try_update(|s| s.apply_delete(key, result)) else {
                return;
            };
            self.flush_notice();
            self.follow(next);
        });
    }
}

#[component]
pub fn ItemList() -> impl IntoView {
    let actions = ListActions {
        session: use_session(),
        toaster: use_toaster(),
        list: RwSignal::new(ItemListState::new()),
    };
    let list = actions.list;
    let link = RwSignal::new(String::new());

    // Initial load, once per mount
    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            actions.mount();
        }
    });

    let busy = Signal::derive(move || list.with(|s| s.phase() == ListPhase::Fetching));
    let current = Signal::derive(move || list.with(|s| s.current_page()));
    let total = Signal::derive(move || list.with(|s| s.total_pages()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions.add(link.get_untracked(), link);
    };

    view! {
        <div class="item-list">
            <form class="add-form" on:submit=on_submit>
                <input
                    type="text"
                    class="link-input"
                    placeholder="Paste a product link"
                    prop:value=move || link.get()
                    on:input=move |ev| link.set(event_target_value(&ev))
                />
                <button type="submit" class="add-btn" disabled=move || busy.get()>
                    "Add to Favourites!"
                </button>
                <button
                    type="button"
                    class="refresh-btn"
                    disabled=move || busy.get()
                    on:click=move |_| actions.refresh()
                >
                    "Refresh"
                </button>
            </form>

            <div class="items">
                <For
                    each=move || list.with(|s| s.items().to_vec())
                    key=|item: &FavouriteItem| item.key()
                    children=move |item| {
                        let key = item.key();
                        view! {
                            <ItemCard
                                item=item
                                on_delete=Callback::new(move |_: ()| actions.delete(key))
                                busy=busy
                            />
                        }
                    }
                />
                <Show when=move || list.with(|s| s.phase() == ListPhase::Loaded && s.items().is_empty())>
                    <p class="empty-hint">"No favourites on this page."</p>
                </Show>
            </div>

            <Pagination
                current=current
                total=total
                on_change=Callback::new(move |page: u32| actions.go_to(page))
            />
        </div>
    }
}
