//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click asks, the second removes.

use leptos::prelude::*;

/// Shows a × button; once clicked, "Remove?" with ✓ / ✗.
///
/// # Arguments
/// * `on_confirm` - Runs when the user confirms
/// * `disabled` - Blocks the button while a request is in flight
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    class="delete-btn"
                    title="Remove from favourites"
                    disabled=move || disabled.get()
                    on:click=move |_| set_confirming.set(true)
                >
                    "×"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Remove?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
