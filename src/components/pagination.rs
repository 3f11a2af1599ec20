//! Pagination Component
//!
//! Page buttons for a 1-based page range.

use leptos::prelude::*;

#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    let last = move || total.get().max(1);

    view! {
        <nav class="pagination">
            <button
                class="page-btn"
                disabled=move || current.get() <= 1
                on:click=move |_| on_change.run(current.get_untracked().saturating_sub(1))
            >
                "‹"
            </button>
            <For
                each=move || 1..=last()
                key=|n| *n
                children=move |n| {
                    let is_current = move || current.get() == n;
                    view! {
                        <button
                            class=move || if is_current() { "page-btn active" } else { "page-btn" }
                            on:click=move |_| on_change.run(n)
                        >
                            {n}
                        </button>
                    }
                }
            />
            <button
                class="page-btn"
                disabled=move || current.get() >= last()
                on:click=move |_| on_change.run(current.get_untracked() + 1)
            >
                "›"
            </button>
        </nav>
    }
}
