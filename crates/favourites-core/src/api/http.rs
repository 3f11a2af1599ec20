//! HTTP Client
//!
//! reqwest-backed implementation of [`AuthApi`] and [`ItemApi`]. In the
//! browser requests go out with `credentials: include` so the session cookie
//! rides along; natively the client keeps its own cookie store.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::wire::{self, AddBody, AddFavRequest, ListBody, NoBody};
use super::{ApiResult, AuthApi, ItemApi};
use crate::config::ApiConfig;
use crate::domain::{Credentials, FavouriteItem, ItemKey, Page};

#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ApiConfig,
    client: Client,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let client = build_client()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    async fn send<B: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<B> {
        let response = with_credentials(request).send().await.map_err(|e| {
            log::warn!("request failed: {}", e);
            e
        })?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        log::debug!("{} <- status {}", response_label(&body), status);
        wire::decode(status, &body)
    }
}

fn response_label(body: &str) -> String {
    const MAX: usize = 80;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder().cookie_store(true).build()
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder().build()
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

#[async_trait(?Send)]
impl AuthApi for HttpClient {
    async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        log::debug!("login as {}", credentials.username());
        let request = self
            .client
            .post(self.url(&self.config.endpoints.login))
            .json(credentials);
        self.send::<NoBody>(request).await.map(|_| ())
    }

    async fn signup(&self, credentials: &Credentials) -> ApiResult<()> {
        log::debug!("signup as {}", credentials.username());
        let request = self
            .client
            .post(self.url(&self.config.endpoints.signup))
            .json(credentials);
        self.send::<NoBody>(request).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl ItemApi for HttpClient {
    async fn get_item_list(&self, page_index: u32) -> ApiResult<Page> {
        log::debug!("get item list page_index={}", page_index);
        let request = self
            .client
            .get(self.url(&self.config.endpoints.item_list))
            .query(&wire::list_query(page_index));
        let body: ListBody = self.send(request).await?;
        body.into_page(page_index)
    }

    async fn submit_item(&self, key: &ItemKey) -> ApiResult<FavouriteItem> {
        log::debug!("submit item {}", key);
        let request = self
            .client
            .post(self.url(&self.config.endpoints.add_item))
            .json(&AddFavRequest::from(key));
        let body: AddBody = self.send(request).await?;
        body.into_item()
    }

    async fn delete_item(&self, key: &ItemKey) -> ApiResult<()> {
        log::debug!("delete item {}", key);
        let request = self
            .client
            .delete(self.url(&self.config.endpoints.delete_item))
            .query(&wire::delete_query(key));
        self.send::<NoBody>(request).await.map(|_| ())
    }
}
