//! Domain Layer
//!
//! Favourite items, product links, credentials and wire error codes.
//! This layer performs no I/O.

mod item;
mod link;
mod credentials;
mod error_code;

pub use item::{FavouriteItem, ItemKey, Page, Price, PAGE_SIZE, PRICE_SCALE};
pub use link::{LinkError, ProductLink};
pub use credentials::{Credentials, CredentialsError};
pub use error_code::{ErrorCode, SUCCESS_CODE};
