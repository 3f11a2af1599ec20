//! Home Component
//!
//! Landing view with the way into login or signup.

use leptos::prelude::*;

use favourites_core::PreAuthView;

use crate::context::use_session;

#[component]
pub fn Home() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="home">
            <h1 class="home-title">"My Shopee Favourites"</h1>
            <div class="home-actions">
                <button on:click=move |_| session.show(PreAuthView::Login)>"Login"</button>
                <button on:click=move |_| session.show(PreAuthView::Signup)>"Signup"</button>
            </div>
        </div>
    }
}
