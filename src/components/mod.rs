//! UI Components
//!
//! Reusable Leptos components.

mod auth_form;
mod delete_confirm_button;
mod home;
mod item_card;
mod item_list;
mod navigation;
mod pagination;
mod toast;

pub use auth_form::AuthForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use home::Home;
pub use item_card::ItemCard;
pub use item_list::ItemList;
pub use navigation::Navigation;
pub use pagination::Pagination;
pub use toast::Toast;
