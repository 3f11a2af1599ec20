//! In-process mock of the favourites gateway
//!
//! Mirrors the gateway's routes and error codes closely enough to exercise
//! the HTTP client end to end: cookie sessions, 401 on missing/expired
//! sessions, newest-first pages of five.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

use favourites_core::{ApiConfig, Credentials, HttpClient, AuthApi};

const PAGE_SIZE: usize = 5;

const USER_ALREADY_EXISTS: i32 = 240011;
const USER_DOES_NOT_EXIST: i32 = 240012;
const WRONG_PASSWORD: i32 = 240013;
const ITEM_IN_FAVOURITES: i32 = 340011;
const DATABASE_DELETE: i32 = 350015;
const BAD_REQUEST: i32 = 140011;

#[derive(Debug, Clone)]
struct StoredItem {
    item_id: u64,
    shop_id: u64,
    name: String,
    price: i64,
}

#[derive(Default)]
struct Backend {
    users: HashMap<String, String>,
    sessions: HashMap<String, String>,
    favourites: HashMap<String, Vec<StoredItem>>,
    item_requests: usize,
}

type Shared = Arc<Mutex<Backend>>;

pub struct MockServer {
    pub base_url: String,
    backend: Shared,
}

impl MockServer {
    pub async fn start() -> Self {
        let backend: Shared = Arc::new(Mutex::new(Backend::default()));
        let app = Router::new()
            .route("/api/user/signup", post(signup))
            .route("/api/user/login", post(login))
            .route("/api/item/get/list", get(get_list))
            .route("/api/item/add/fav", post(add_fav))
            .route("/api/item/delete/fav", delete(delete_fav))
            .with_state(backend.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("No local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock server crashed");
        });

        Self {
            base_url: format!("http://{}", addr),
            backend,
        }
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::with_base_url(self.base_url.clone())
    }

    pub fn client(&self) -> HttpClient {
        HttpClient::new(self.config()).expect("Failed to build client")
    }

    /// Client that has signed up and logged in as `username`
    pub async fn logged_in(&self, username: &str) -> HttpClient {
        let client = self.client();
        let creds = Credentials::new(username, "password").unwrap();
        client.signup(&creds).await.expect("signup failed");
        client.login(&creds).await.expect("login failed");
        client
    }

    /// Drop every issued session token
    pub fn expire_sessions(&self) {
        self.backend.lock().unwrap().sessions.clear();
    }

    /// Insert `count` favourites for `username`; the last inserted is newest
    pub fn seed(&self, username: &str, count: u64) {
        let mut backend = self.backend.lock().unwrap();
        let list = backend.favourites.entry(username.to_string()).or_default();
        for n in 1..=count {
            list.insert(0, stored_item(n, 1000));
        }
    }

    pub fn favourite_ids(&self, username: &str) -> Vec<u64> {
        let backend = self.backend.lock().unwrap();
        backend
            .favourites
            .get(username)
            .map(|items| items.iter().map(|i| i.item_id).collect())
            .unwrap_or_default()
    }

    /// Number of requests that reached the item routes
    pub fn item_requests(&self) -> usize {
        self.backend.lock().unwrap().item_requests
    }
}

fn stored_item(item_id: u64, shop_id: u64) -> StoredItem {
    StoredItem {
        item_id,
        shop_id,
        name: format!("Item {}", item_id),
        price: 1_990_000,
    }
}

fn reply(code: i32) -> Response {
    Json(json!({ "errorCode": code, "errorMsg": "" })).into_response()
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!("unauthorised"))).into_response()
}

fn session_user(backend: &Backend, headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().strip_prefix("token="))
        .find_map(|token| backend.sessions.get(token).cloned())
}

fn with_session(backend: &mut Backend, username: &str) -> Response {
    let token = format!("tok-{}", username);
    backend.sessions.insert(token.clone(), username.to_string());
    (
        [(header::SET_COOKIE, format!("token={}; Path=/; HttpOnly", token))],
        Json(json!({ "errorCode": -1, "errorMsg": "" })),
    )
        .into_response()
}

#[derive(Deserialize)]
struct CredsBody {
    username: String,
    password: String,
}

async fn signup(State(backend): State<Shared>, Json(body): Json<CredsBody>) -> Response {
    let mut backend = backend.lock().unwrap();
    if backend.users.contains_key(&body.username) {
        return reply(USER_ALREADY_EXISTS);
    }
    backend.users.insert(body.username.clone(), body.password);
    with_session(&mut backend, &body.username)
}

async fn login(State(backend): State<Shared>, Json(body): Json<CredsBody>) -> Response {
    let mut backend = backend.lock().unwrap();
    let known = backend.users.get(&body.username).cloned();
    match known {
        None => reply(USER_DOES_NOT_EXIST),
        Some(pw) if pw != body.password => reply(WRONG_PASSWORD),
        Some(_) => with_session(&mut backend, &body.username),
    }
}

#[derive(Deserialize)]
struct ListQuery {
    page: usize,
}

async fn get_list(State(backend): State<Shared>, headers: HeaderMap, Query(q): Query<ListQuery>) -> Response {
    let mut backend = backend.lock().unwrap();
    backend.item_requests += 1;
    let Some(user) = session_user(&backend, &headers) else {
        return unauthorized();
    };
    let all = backend.favourites.get(&user).cloned().unwrap_or_default();
    let total_pages = all.len().div_ceil(PAGE_SIZE);
    let items: Vec<_> = all
        .iter()
        .skip(q.page * PAGE_SIZE)
        .take(PAGE_SIZE)
        .map(|i| json!({ "itemId": i.item_id, "shopId": i.shop_id, "name": i.name, "price": i.price }))
        .collect();
    Json(json!({ "errorCode": -1, "errorMsg": "", "items": items, "totalPages": total_pages })).into_response()
}

#[derive(Deserialize)]
struct AddBody {
    #[serde(rename = "itemID")]
    item_id: String,
    #[serde(rename = "shopID")]
    shop_id: String,
}

async fn add_fav(State(backend): State<Shared>, headers: HeaderMap, Json(body): Json<AddBody>) -> Response {
    let mut backend = backend.lock().unwrap();
    backend.item_requests += 1;
    let Some(user) = session_user(&backend, &headers) else {
        return unauthorized();
    };
    let (Ok(item_id), Ok(shop_id)) = (body.item_id.parse::<u64>(), body.shop_id.parse::<u64>()) else {
        return reply(BAD_REQUEST);
    };
    let list = backend.favourites.entry(user).or_default();
    if list.iter().any(|i| i.item_id == item_id && i.shop_id == shop_id) {
        return reply(ITEM_IN_FAVOURITES);
    }
    let item = stored_item(item_id, shop_id);
    list.insert(0, item.clone());
    Json(json!({
        "errorCode": -1,
        "errorMsg": "",
        "item": { "itemId": item.item_id, "shopId": item.shop_id, "name": item.name, "price": item.price }
    }))
    .into_response()
}

#[derive(Deserialize)]
struct DeleteQuery {
    #[serde(rename = "itemID")]
    item_id: u64,
    #[serde(rename = "shopID")]
    shop_id: u64,
}

async fn delete_fav(State(backend): State<Shared>, headers: HeaderMap, Query(q): Query<DeleteQuery>) -> Response {
    let mut backend = backend.lock().unwrap();
    backend.item_requests += 1;
    let Some(user) = session_user(&backend, &headers) else {
        return unauthorized();
    };
    let list = backend.favourites.entry(user).or_default();
    let before = list.len();
    list.retain(|i| !(i.item_id == q.item_id && i.shop_id == q.shop_id));
    if list.len() == before {
        return reply(DATABASE_DELETE);
    }
    reply(-1)
}
