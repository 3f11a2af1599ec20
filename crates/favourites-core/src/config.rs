//! API Configuration
//!
//! Base URL and endpoint paths of the favourites API. Defaults match the
//! gateway's routes; each value can be overridden from the environment.

use serde::{Deserialize, Serialize};

pub const ENV_BASE_URL: &str = "FAV_API_BASE_URL";
pub const ENV_SIGNUP_PATH: &str = "FAV_API_SIGNUP_PATH";
pub const ENV_LOGIN_PATH: &str = "FAV_API_LOGIN_PATH";
pub const ENV_ITEM_LIST_PATH: &str = "FAV_API_ITEM_LIST_PATH";
pub const ENV_ADD_ITEM_PATH: &str = "FAV_API_ADD_ITEM_PATH";
pub const ENV_DELETE_ITEM_PATH: &str = "FAV_API_DELETE_ITEM_PATH";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Endpoints {
    pub signup: String,
    pub login: String,
    pub item_list: String,
    pub add_item: String,
    pub delete_item: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            signup: "/api/user/signup".to_string(),
            login: "/api/user/login".to_string(),
            item_list: "/api/item/get/list".to_string(),
            add_item: "/api/item/add/fav".to_string(),
            delete_item: "/api/item/delete/fav".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoints: Endpoints,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoints: Endpoints::default(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Build from defaults, replacing any value `lookup` returns for its key
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let overrides: [(&str, &mut String); 6] = [
            (ENV_BASE_URL, &mut config.base_url),
            (ENV_SIGNUP_PATH, &mut config.endpoints.signup),
            (ENV_LOGIN_PATH, &mut config.endpoints.login),
            (ENV_ITEM_LIST_PATH, &mut config.endpoints.item_list),
            (ENV_ADD_ITEM_PATH, &mut config.endpoints.add_item),
            (ENV_DELETE_ITEM_PATH, &mut config.endpoints.delete_item),
        ];
        for (key, slot) in overrides {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *slot = value;
            }
        }
        config
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Join the base URL and an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
