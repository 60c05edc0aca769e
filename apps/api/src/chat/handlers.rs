use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::messages::NewChatMessage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// POST /api/chat
/// Generates an answer, records the turn, and echoes both back.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(req) = payload.map_err(AppError::chat)?;
    if req.message.trim().is_empty() {
        return Err(AppError::chat(anyhow::anyhow!("message must not be empty")));
    }

    let response = state.assistant.generate_response(&req.message).await;

    let chat = state
        .store
        .create_chat_message(NewChatMessage {
            message: req.message,
            response,
        })
        .await
        .map_err(AppError::chat)?;

    Ok(Json(ChatResponse {
        message: chat.message,
        response: chat.response,
        timestamp: chat.created_at,
    }))
}
