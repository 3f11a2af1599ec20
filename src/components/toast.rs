//! Toast Component
//!
//! Renders the toaster's current notice, if any.

use leptos::prelude::*;

use favourites_core::NoticeKind;

use crate::context::use_toaster;

#[component]
pub fn Toast() -> impl IntoView {
    let toaster = use_toaster();

    move || {
        toaster.current().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "toast success",
                NoticeKind::Info => "toast info",
                NoticeKind::Error => "toast error",
            };
            view! {
                <div class=class on:click=move |_| toaster.dismiss()>
                    {notice.text}
                </div>
            }
        })
    }
}
