//! Favourite Item Entity
//!
//! A saved marketplace product and the page it is listed on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of items the server returns per page
pub const PAGE_SIZE: usize = 5;

/// Prices arrive as integers scaled by this factor
pub const PRICE_SCALE: i64 = 100_000;

/// Unique identity of a favourite: (item id, shop id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub item_id: u64,
    pub shop_id: u64,
}

impl ItemKey {
    pub fn new(item_id: u64, shop_id: u64) -> Self {
        Self { item_id, shop_id }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.shop_id, self.item_id)
    }
}

/// Price in minor units, see [`PRICE_SCALE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub i64);

impl Price {
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / PRICE_SCALE as f64
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.as_major())
    }
}

/// A product saved to the user's favourites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavouriteItem {
    pub item_id: u64,
    pub shop_id: u64,
    pub name: String,
    pub price: Price,
}

impl FavouriteItem {
    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.item_id, self.shop_id)
    }
}

/// One page of favourites as reported by the server
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    /// 1-based page number
    pub number: u32,
    /// Newest first, at most [`PAGE_SIZE`] entries
    pub items: Vec<FavouriteItem>,
    pub total_pages: u32,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
