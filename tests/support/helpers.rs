// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, Response, header};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

use newsdesk::application::ports::{time::Clock, util::IdGenerator};
use newsdesk::application::services::ApplicationServices;
use newsdesk::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use newsdesk::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{InMemoryArticleStore, TickingClock, UuidIds};

pub fn make_test_router() -> axum::Router {
    make_test_router_with(Arc::new(InMemoryArticleStore::new()), Arc::new(UuidIds))
}

pub fn make_test_router_with(
    store: Arc<InMemoryArticleStore>,
    ids: Arc<dyn IdGenerator>,
) -> axum::Router {
    make_router(store, ids, &["*".to_string()])
}

pub fn make_test_router_with_origins(allowed_origins: &[String]) -> axum::Router {
    make_router(
        Arc::new(InMemoryArticleStore::new()),
        Arc::new(UuidIds),
        allowed_origins,
    )
}

fn make_router(
    store: Arc<InMemoryArticleStore>,
    ids: Arc<dyn IdGenerator>,
    allowed_origins: &[String],
) -> axum::Router {
    let write_repo: Arc<dyn ArticleWriteRepository> = store.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = store;
    let clock: Arc<dyn Clock> = Arc::new(TickingClock::default());

    let services = Arc::new(ApplicationServices::new(write_repo, read_repo, clock, ids));
    build_router(HttpState { services }, allowed_origins)
}

pub fn sample_payload() -> Value {
    json!({
        "title": "A",
        "content": "B",
        "author": "C",
        "publishDate": "2024-01-01T00:00:00Z",
        "status": "draft",
        "category": "mining"
    })
}

pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    payload: &Value,
) -> Response<Body> {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn send(app: &axum::Router, method: &str, uri: &str) -> Response<Body> {
    send_with_headers(app, method, uri, &[]).await
}

pub async fn send_with_headers(
    app: &axum::Router,
    method: &str,
    uri: &str,
    headers: &[(&str, &str)],
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let req = builder.body(Body::empty()).unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
