//! Frontend API Configuration
//!
//! Values are baked in at build time (`FAV_API_*` variables); without a base
//! URL the page's own origin is used, which suits a gateway serving the app.

use favourites_core::config::{
    ENV_ADD_ITEM_PATH, ENV_BASE_URL, ENV_DELETE_ITEM_PATH, ENV_ITEM_LIST_PATH, ENV_LOGIN_PATH,
    ENV_SIGNUP_PATH,
};
use favourites_core::ApiConfig;

fn build_time(key: &str) -> Option<String> {
    let value = match key {
        ENV_BASE_URL => option_env!("FAV_API_BASE_URL"),
        ENV_SIGNUP_PATH => option_env!("FAV_API_SIGNUP_PATH"),
        ENV_LOGIN_PATH => option_env!("FAV_API_LOGIN_PATH"),
        ENV_ITEM_LIST_PATH => option_env!("FAV_API_ITEM_LIST_PATH"),
        ENV_ADD_ITEM_PATH => option_env!("FAV_API_ADD_ITEM_PATH"),
        ENV_DELETE_ITEM_PATH => option_env!("FAV_API_DELETE_ITEM_PATH"),
        _ => None,
    };
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

pub fn api_config() -> ApiConfig {
    let mut config = ApiConfig::from_lookup(build_time);
    if build_time(ENV_BASE_URL).is_none() {
        if let Some(origin) = page_origin() {
            config.base_url = origin;
        }
    }
    log::info!("API base URL: {}", config.base_url);
    config
}
