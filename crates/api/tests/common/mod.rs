#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use vitrine_api::config::{LogFormat, ServerConfig, StoreBackend};
use vitrine_api::router::build_app_router;
use vitrine_api::state::AppState;
use vitrine_db::MemoryThemeStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        store: StoreBackend::Memory,
        log_format: LogFormat::Pretty,
    }
}

/// A running application over an in-memory store.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub store: Arc<MemoryThemeStore>,
}

impl TestApp {
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build the full application router the way `main.rs` does: seed the
/// default theme, mount the controller, then apply the production middleware
/// stack.
pub async fn build_test_app() -> TestApp {
    let store = Arc::new(MemoryThemeStore::new());
    let config = test_config();
    let state = AppState::new(store.clone(), config.clone());

    state.catalog.seed_defaults().await.unwrap();
    state.controller.mount().await.unwrap();

    TestApp {
        router: build_app_router(state.clone(), &config),
        state,
        store,
    }
}

/// Same stack without seeding or mounting: the document still holds the
/// pre-paint placeholder.
pub fn build_unmounted_app() -> TestApp {
    let store = Arc::new(MemoryThemeStore::new());
    let config = test_config();
    let state = AppState::new(store.clone(), config.clone());

    TestApp {
        router: build_app_router(state.clone(), &config),
        state,
        store,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Minimal valid theme body: only the primary 500 step is overridden.
pub fn theme_body(slug: &str, primary_500: &str) -> serde_json::Value {
    serde_json::json!({
        "name": slug,
        "slug": slug,
        "colorScheme": {
            "primary": { "500": primary_500 },
            "secondary": {},
            "neutral": {},
            "background": {},
            "text": {},
            "border": {}
        }
    })
}
