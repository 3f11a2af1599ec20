//! API Client Layer
//!
//! Abstract interfaces to the remote favourites API and the typed error
//! they return. The wire's `errorCode` convention is translated once, in
//! [`wire`], so callers only ever see `Ok(payload)` or an [`ApiError`].

mod http;
mod wire;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Credentials, ErrorCode, FavouriteItem, ItemKey, Page};

pub use http::HttpClient;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 401: the session cookie is missing or expired
    #[error("session expired or missing")]
    Unauthorized,
    /// The server answered with a failure `errorCode`
    #[error("request rejected with code {0}")]
    Rejected(ErrorCode),
    /// Non-success status without a readable body
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ApiError::Rejected(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Malformed(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Login and signup against the user endpoints
///
/// A successful call leaves a session cookie with the transport; the client
/// never sees its value.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<()>;

    async fn signup(&self, credentials: &Credentials) -> ApiResult<()>;
}

/// Favourites CRUD; every call requires an active session
#[async_trait(?Send)]
pub trait ItemApi {
    /// Fetch one page. `page_index` is 0-based.
    async fn get_item_list(&self, page_index: u32) -> ApiResult<Page>;

    async fn submit_item(&self, key: &ItemKey) -> ApiResult<FavouriteItem>;

    async fn delete_item(&self, key: &ItemKey) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl<T: ItemApi + ?Sized> ItemApi for &T {
    async fn get_item_list(&self, page_index: u32) -> ApiResult<Page> {
        (**self).get_item_list(page_index).await
    }

    async fn submit_item(&self, key: &ItemKey) -> ApiResult<FavouriteItem> {
        (**self).submit_item(key).await
    }

    async fn delete_item(&self, key: &ItemKey) -> ApiResult<()> {
        (**self).delete_item(key).await
    }
}
