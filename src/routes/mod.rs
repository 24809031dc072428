// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Directory holding the chat front-end; `GET /` resolves to its `index.html`.
pub const PUBLIC_DIR: &str = "public";

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/chat", post(chat_handler).layer(DefaultBodyLimit::disable()))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(PUBLIC_DIR))
        .layer(TraceLayer::new_for_http())
}
