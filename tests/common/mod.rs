#![allow(dead_code)]

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use login_form::infrastructure::http::HttpUserDirectory;
use login_form::state::AppState;

/// Users served by the stub directory, in the same shape as the public
/// jsonplaceholder collection.
pub fn sample_users() -> Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough" }
        },
        {
            "id": 2,
            "name": "Test User",
            "username": "pw",
            "email": "a@b.com"
        }
    ])
}

/// Base URL of a running stub directory.
///
/// Routes:
/// - `GET /users`   - [`sample_users`]
/// - `GET /empty`   - `[]`
/// - `GET /broken`  - 500
/// - `GET /garbage` - a JSON object instead of a list
pub struct StubDirectory {
    pub base_url: String,
}

impl StubDirectory {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn users_url(&self) -> String {
        self.url("/users")
    }
}

pub async fn start_stub_directory() -> StubDirectory {
    let app = Router::new()
        .route("/users", get(|| async { Json(sample_users()) }))
        .route("/empty", get(|| async { Json(json!([])) }))
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response() }),
        )
        .route("/garbage", get(|| async { Json(json!({ "users": [] })) }));

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubDirectory {
        base_url: format!("http://{}:{}", addr.ip(), addr.port()),
    }
}

/// URL nothing listens on.
pub fn unreachable_url() -> String {
    "http://127.0.0.1:9/users".to_string()
}

pub fn create_test_state(users_url: String, reset_delay: Duration) -> AppState {
    AppState::new(Arc::new(HttpUserDirectory::new(users_url)), reset_delay)
}
