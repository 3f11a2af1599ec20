//! Favourites Tracker Core
//!
//! Platform-neutral half of the favourites client:
//! - domain: items, pages, product links, credentials, wire error codes
//! - api: `AuthApi` / `ItemApi` and the reqwest `HttpClient`
//! - session: the authenticated flag and pre-auth view selector
//! - list: paginated list state machine and its async driver

pub mod api;
pub mod config;
pub mod domain;
pub mod list;
pub mod messages;
pub mod session;

pub use api::{ApiError, ApiResult, AuthApi, HttpClient, ItemApi};
pub use config::ApiConfig;
pub use domain::{Credentials, ErrorCode, FavouriteItem, ItemKey, Page, Price, ProductLink};
pub use list::{FetchTicket, Followup, ItemListController, ItemListState, ListPhase, Notice, NoticeKind};
pub use session::{MemoryStore, PreAuthView, Screen, Session, SessionStore};
