use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use tf_core::{Error, NewsProvider, RawArticle, Result};
use tf_engine::Responder;
use tf_provider::FeedFetcher;
use tf_session::Session;
use tf_web::{create_app, AppState};

struct OfflineProvider;

#[async_trait]
impl NewsProvider for OfflineProvider {
    async fn search(&self, _query: &str, _page_size: usize) -> Result<Vec<RawArticle>> {
        Err(Error::Provider("offline".to_string()))
    }
}

async fn test_app() -> Router {
    let provider = Arc::new(OfflineProvider);
    let state = AppState {
        session: Session::new(),
        fetcher: FeedFetcher::new(provider.clone()),
        responder: Responder::new(provider),
    };
    create_app(state).await
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method("POST").uri(uri);
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[tokio::test]
async fn refresh_then_filter_feed() {
    let app = test_app().await;

    let response = app.clone().oneshot(post("/api/feed/refresh", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let feed = body_json(response).await;
    // Offline provider degrades to the three samples.
    assert_eq!(feed.as_array().unwrap().len(), 3);

    let response = app.clone().oneshot(get("/api/feed?category=Crypto")).await.unwrap();
    let filtered = body_json(response).await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);
    assert_eq!(filtered[0]["id"], "2");

    let response = app.clone().oneshot(get("/api/feed?category=Sports")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.clone().oneshot(get("/api/trending")).await.unwrap();
    let trending = body_json(response).await;
    assert!(!trending.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn chat_round_trip() {
    let app = test_app().await;
    app.clone().oneshot(post("/api/feed/refresh", None)).await.unwrap();

    let response = app
        .clone()
        .oneshot(post("/api/chat", Some(json!({ "text": "bitcoin" }))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let reply = body_json(response).await;
    assert_eq!(reply["sender"], "assistant");
    assert!(reply["text"].as_str().unwrap().contains("Category: Crypto"));

    let response = app.clone().oneshot(get("/api/chat")).await.unwrap();
    let transcript = body_json(response).await;
    // Greeting, user message, assistant reply.
    assert_eq!(transcript.as_array().unwrap().len(), 3);

    let response = app
        .clone()
        .oneshot(post("/api/chat", Some(json!({ "text": "   " }))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bookmarks_reads_and_comments() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post("/api/articles/2/bookmark", None))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["bookmarked"], true);

    let response = app
        .clone()
        .oneshot(post("/api/articles/2/bookmark", None))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["bookmarked"], false);

    let response = app
        .clone()
        .oneshot(post("/api/articles/2/read", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(post(
            "/api/articles/2/comments",
            Some(json!({ "text": "solid move" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let comment = body_json(response).await;
    assert_eq!(comment["text"], "solid move");
    assert!(comment["user"].as_str().unwrap().starts_with("User"));

    let comment_id = comment["id"].as_str().unwrap().to_string();
    let response = app
        .clone()
        .oneshot(post(
            &format!("/api/articles/2/comments/{}/like", comment_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["likes"], 1);

    let response = app
        .clone()
        .oneshot(post("/api/articles/2/comments/nope/like", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.clone().oneshot(get("/api/stats")).await.unwrap();
    let stats = body_json(response).await;
    assert_eq!(stats["read"], 1);
    assert_eq!(stats["bookmarks"], 0);
}

#[tokio::test]
async fn market_snapshot_served() {
    let app = test_app().await;
    let response = app.clone().oneshot(get("/api/market")).await.unwrap();
    let market = body_json(response).await;
    assert!(market["spy"]["price"].as_f64().unwrap() > 0.0);
    assert!(market["btc"]["price"].as_f64().unwrap() > 0.0);
}
