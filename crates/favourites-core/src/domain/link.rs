//! Product Link Parsing
//!
//! Extracts the (shop id, item id) pair from a pasted marketplace URL of the
//! shape `https://<domain>/<slug>-i.<shopID>.<itemID>[?query]`.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::item::ItemKey;

const PRODUCT_LINK_PATTERN: &str = r"^https://[^/\s]+/\S+-i\.([0-9]+)\.([0-9]+)(\?\S+)?$";

fn product_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PRODUCT_LINK_PATTERN).expect("product link pattern is valid"))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("not a product link")]
    Format,
    #[error("id out of range: {0}")]
    IdOutOfRange(String),
}

/// A validated product reference taken from a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductLink {
    pub shop_id: u64,
    pub item_id: u64,
}

impl ProductLink {
    /// Ids are numeric on the gateway side, so the captured digits are read
    /// as numbers: leading zeros are dropped (`0361953971` is shop
    /// `361953971`) and runs that overflow `u64` are rejected with
    /// [`LinkError::IdOutOfRange`].
    pub fn parse(raw: &str) -> Result<Self, LinkError> {
        let caps = product_link_regex().captures(raw).ok_or(LinkError::Format)?;
        let shop = &caps[1];
        let item = &caps[2];
        let shop_id = shop.parse().map_err(|_| LinkError::IdOutOfRange(shop.to_string()))?;
        let item_id = item.parse().map_err(|_| LinkError::IdOutOfRange(item.to_string()))?;
        Ok(Self { shop_id, item_id })
    }

    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.item_id, self.shop_id)
    }
}

impl FromStr for ProductLink {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
