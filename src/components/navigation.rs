//! Navigation Component
//!
//! Authenticated shell: title bar with logout, and the favourites list.

use leptos::prelude::*;

use crate::components::ItemList;
use crate::context::use_session;

#[component]
pub fn Navigation() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="navigation">
            <header class="nav-bar">
                <span class="nav-tab active">"My Favourites"</span>
                <button class="logout-btn" on:click=move |_| session.deauthenticate()>"Logout"</button>
            </header>
            <main class="main-content">
                <ItemList />
            </main>
        </div>
    }
}
