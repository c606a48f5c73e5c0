use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/feed", get(handlers::list_feed))
        .route("/api/feed/refresh", post(handlers::refresh_feed))
        .route("/api/trending", get(handlers::list_trending))
        .route("/api/market", get(handlers::market_snapshot))
        .route("/api/stats", get(handlers::session_stats))
        .route("/api/chat", get(handlers::chat_history).post(handlers::send_chat))
        .route("/api/articles/:id/bookmark", post(handlers::toggle_bookmark))
        .route("/api/articles/:id/read", post(handlers::mark_read))
        .route(
            "/api/articles/:id/comments",
            get(handlers::list_comments).post(handlers::add_comment),
        )
        .route(
            "/api/articles/:id/comments/:comment_id/like",
            post(handlers::like_comment),
        )
        .route("/api/bookmarks", delete(handlers::clear_bookmarks))
        .route("/api/read-history", delete(handlers::clear_read_history))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use tf_core::{Article, Error, Result};
}
