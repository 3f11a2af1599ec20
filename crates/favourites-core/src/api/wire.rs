//! Wire Format
//!
//! Request bodies and response envelopes as the gateway speaks them, and the
//! single place where `(status, errorCode)` becomes an [`ApiResult`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResult};
use crate::domain::{ErrorCode, FavouriteItem, ItemKey, Page, Price};

const STATUS_UNAUTHORIZED: u16 = 401;

// ========================
// Requests
// ========================

#[derive(Debug, Serialize)]
pub(crate) struct AddFavRequest {
    #[serde(rename = "itemID")]
    item_id: String,
    #[serde(rename = "shopID")]
    shop_id: String,
}

impl From<&ItemKey> for AddFavRequest {
    fn from(key: &ItemKey) -> Self {
        Self {
            item_id: key.item_id.to_string(),
            shop_id: key.shop_id.to_string(),
        }
    }
}

pub(crate) fn delete_query(key: &ItemKey) -> [(&'static str, String); 2] {
    [("itemID", key.item_id.to_string()), ("shopID", key.shop_id.to_string())]
}

pub(crate) fn list_query(page_index: u32) -> [(&'static str, u32); 1] {
    [("page", page_index)]
}

// ========================
// Responses
// ========================

#[derive(Debug, Deserialize)]
struct Envelope<B> {
    #[serde(rename = "errorCode", default)]
    error_code: Option<i32>,
    #[serde(rename = "errorMsg", default)]
    error_msg: Option<String>,
    #[serde(flatten)]
    body: B,
}

/// Body of responses that carry nothing besides the error code
#[derive(Debug, Deserialize)]
pub(crate) struct NoBody {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListBody {
    #[serde(default)]
    items: Option<Vec<WireItem>>,
    #[serde(default)]
    total_pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBody {
    #[serde(default)]
    item: Option<WireItem>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireId {
    Num(u64),
    Text(String),
}

impl WireId {
    fn into_u64(self) -> ApiResult<u64> {
        match self {
            WireId::Num(n) => Ok(n),
            WireId::Text(s) => s
                .parse()
                .map_err(|_| ApiError::Malformed(format!("bad id {:?}", s))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireItem {
    #[serde(rename = "itemId", alias = "itemID")]
    item_id: WireId,
    #[serde(rename = "shopId", alias = "shopID")]
    shop_id: WireId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    price: i64,
}

impl WireItem {
    fn into_item(self) -> ApiResult<FavouriteItem> {
        Ok(FavouriteItem {
            item_id: self.item_id.into_u64()?,
            shop_id: self.shop_id.into_u64()?,
            name: self.name,
            price: Price(self.price),
        })
    }
}

impl ListBody {
    pub(crate) fn into_page(self, page_index: u32) -> ApiResult<Page> {
        let items = self
            .items
            .unwrap_or_default()
            .into_iter()
            .map(WireItem::into_item)
            .collect::<ApiResult<Vec<_>>>()?;
        let mut total_pages = self.total_pages.unwrap_or(0);
        if !items.is_empty() {
            total_pages = total_pages.max(page_index + 1);
        }
        Ok(Page {
            number: page_index + 1,
            items,
            total_pages,
        })
    }
}

impl AddBody {
    pub(crate) fn into_item(self) -> ApiResult<FavouriteItem> {
        self.item
            .ok_or_else(|| ApiError::Malformed("missing item".to_string()))?
            .into_item()
    }
}

/// Classify a response
///
/// Precedence: 401 first (the gateway's 401 body is not an envelope), then
/// the body's `errorCode`, then any other non-2xx status.
pub(crate) fn decode<B: DeserializeOwned>(status: u16, body: &str) -> ApiResult<B> {
    if status == STATUS_UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    let success = (200..300).contains(&status);
    let envelope: Envelope<B> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(err) if success => return Err(ApiError::Malformed(err.to_string())),
        Err(_) => return Err(ApiError::Status(status)),
    };
    if let Err(code) = ErrorCode::check(envelope.error_code) {
        log::debug!(
            "api rejected: code={} msg={}",
            code,
            envelope.error_msg.as_deref().unwrap_or("")
        );
        return Err(ApiError::Rejected(code));
    }
    if !success {
        return Err(ApiError::Status(status));
    }
    Ok(envelope.body)
}
