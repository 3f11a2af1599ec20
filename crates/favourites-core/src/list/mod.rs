//! Favourites list synchronisation

mod controller;
mod notice;
mod state;

pub use controller::ItemListController;
pub use notice::{Notice, NoticeKind};
pub use state::{FetchTicket, Followup, ItemListState, ListPhase};
