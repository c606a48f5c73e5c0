use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tf_core::{Category, ChatMessage};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct FeedParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub user: Option<String>,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub bookmarked: bool,
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub likes: u32,
}

pub async fn list_feed(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeedParams>,
) -> impl IntoResponse {
    let category = match params.category.as_deref() {
        Some(raw) => match raw.parse::<Category>() {
            Ok(category) => Some(category),
            Err(message) => return Err((StatusCode::BAD_REQUEST, message)),
        },
        None => None,
    };

    let articles = state
        .session
        .filtered_articles(category, params.q.as_deref())
        .await;
    Ok(Json(articles))
}

pub async fn refresh_feed(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let articles = state.fetcher.refresh().await;
    state.session.replace_articles(articles.clone()).await;
    Json(articles)
}

pub async fn list_trending(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.session.trending().await)
}

pub async fn market_snapshot(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.session.market().await)
}

pub async fn session_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.session.stats().await)
}

pub async fn chat_history(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.session.chat().await)
}

/// Ask the assistant. The user message and the reply are both appended to
/// the transcript; the reply is returned. Provider trouble never surfaces
/// here, the responder degrades to a canned message instead.
pub async fn send_chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatMessage>, (StatusCode, String)> {
    let text = request.text.trim().to_string();
    if text.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "message text is empty".to_string()));
    }

    state.session.push_chat(ChatMessage::user(text.clone())).await;

    let corpus = state.session.articles().await;
    let reply = state.responder.respond(&text, &corpus).await;
    debug!(chars = reply.text.len(), "assistant replied");

    state.session.push_chat(reply.clone()).await;
    Ok(Json(reply))
}

pub async fn toggle_bookmark(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let bookmarked = state.session.toggle_bookmark(&id).await;
    Json(BookmarkResponse { bookmarked })
}

pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    state.session.mark_read(&id).await;
    StatusCode::NO_CONTENT
}

pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    Json(state.session.comments(&id).await)
}

pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<CommentRequest>,
) -> impl IntoResponse {
    let user = request
        .user
        .unwrap_or_else(|| format!("User{}", rand::thread_rng().gen_range(0..1000)));

    match state.session.add_comment(&id, &user, &request.text).await {
        Ok(comment) => Ok((StatusCode::CREATED, Json(comment))),
        Err(error) => Err((StatusCode::BAD_REQUEST, error.to_string())),
    }
}

pub async fn like_comment(
    State(state): State<Arc<AppState>>,
    Path((id, comment_id)): Path<(String, String)>,
) -> impl IntoResponse {
    match state.session.like_comment(&id, &comment_id).await {
        Some(likes) => Ok(Json(LikeResponse { likes })),
        None => Err((StatusCode::NOT_FOUND, "comment not found".to_string())),
    }
}

pub async fn clear_bookmarks(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.session.clear_bookmarks().await;
    StatusCode::NO_CONTENT
}

pub async fn clear_read_history(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.session.clear_read_history().await;
    StatusCode::NO_CONTENT
}
