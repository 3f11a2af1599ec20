//! Auth Form Component
//!
//! Shared login / signup form. Blank fields are rejected locally; server
//! failures are shown inline under the form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use favourites_core::messages::{self, AuthAction};
use favourites_core::{AuthApi, Credentials, PreAuthView};

use crate::context::use_session;

#[component]
pub fn AuthForm(action: AuthAction) -> impl IntoView {
    let session = use_session();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let (title, other_label, other_view) = match action {
        AuthAction::Login => ("Login", "Need an account? Signup", PreAuthView::Signup),
        AuthAction::Signup => ("Signup", "Have an account? Login", PreAuthView::Login),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let credentials = match Credentials::new(username.get_untracked(), password.get_untracked()) {
            Ok(c) => c,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };
        let client = session.client();

        set_error.set(None);
        set_pending.set(true);
        spawn_local(async move {
            let result = match action {
                AuthAction::Login => client.login(&credentials).await,
                AuthAction::Signup => client.signup(&credentials).await,
            };
            // The form may be gone if the user navigated away meanwhile
            set_pending.try_set(false);
            match result {
                Ok(()) => session.authenticate(),
                Err(err) => {
                    log::warn!("{:?} failed: {}", action, err);
                    set_error.try_set(Some(messages::auth_failure(action, &err).to_string()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>{title}</h2>
                <label>
                    "Username"
                    <input
                        type="text"
                        autocomplete="off"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                {move || error.get().map(|msg| view! {
                    <p class="error-message">"⚠ " {msg}</p>
                })}

                <button type="submit" disabled=move || pending.get()>{title}</button>
            </form>
            <div class="auth-switch">
                <button type="button" on:click=move |_| session.show(other_view)>{other_label}</button>
                <button type="button" on:click=move |_| session.show(PreAuthView::Home)>"Back"</button>
            </div>
        </div>
    }
}
