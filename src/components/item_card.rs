//! Item Card Component

use leptos::prelude::*;

use favourites_core::FavouriteItem;

use crate::components::DeleteConfirmButton;

/// One favourite: name, price and a delete button
#[component]
pub fn ItemCard(
    item: FavouriteItem,
    #[prop(into)] on_delete: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="item-card">
            <div class="item-info">
                <p class="item-name">{item.name.clone()}</p>
                <p class="item-price">{item.price.to_string()}</p>
            </div>
            <DeleteConfirmButton on_confirm=on_delete disabled=busy />
        </div>
    }
}
