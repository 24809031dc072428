use axum::{Json, body::Bytes, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let generator = state.generator.as_deref().ok_or(AppError::NotConfigured)?;

    let payload = ChatRequest::from_body(&body);
    let trimmed = payload.message.trim();

    if trimmed.is_empty() {
        return Err(AppError::EmptyMessage);
    }

    let reply = generate_reply(generator, trimmed).await?;

    Ok(Json(ChatResponse { reply }))
}
