//! Favourites Frontend App
//!
//! Root component: provides the session gate and toaster, then renders
//! exactly one of home / login / signup / favourites.

use leptos::prelude::*;

use favourites_core::messages::{self, AuthAction};
use favourites_core::{HttpClient, Screen, Session};

use crate::components::{AuthForm, Home, Navigation, Toast};
use crate::config::api_config;
use crate::context::{SessionContext, Toaster};
use crate::storage::LocalStore;

#[component]
pub fn App() -> impl IntoView {
    let client = match HttpClient::new(api_config()) {
        Ok(client) => client,
        Err(err) => {
            log::error!("failed to build HTTP client: {}", err);
            return view! { <p class="error-message">{messages::UNEXPECTED}</p> }.into_any();
        }
    };
    let session = SessionContext::new(Session::restore(LocalStore), client);
    let toaster = Toaster::new();
    provide_context(session);
    provide_context(toaster);

    // Only re-render the page when the screen actually changes
    let screen = Memo::new(move |_| session.screen());

    view! {
        <div class="app">
            <Toast />
            {move || match screen.get() {
                Screen::Home => view! { <Home /> }.into_any(),
                Screen::Login => view! { <AuthForm action=AuthAction::Login /> }.into_any(),
                Screen::Signup => view! { <AuthForm action=AuthAction::Signup /> }.into_any(),
                Screen::Favourites => view! { <Navigation /> }.into_any(),
            }}
        </div>
    }
    .into_any()
}
