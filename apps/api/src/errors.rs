use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Body of the failed-chat response. The chat UI shows it as the assistant's turn.
pub const CHAT_APOLOGY: &str = "I'm sorry, I'm having trouble processing your request right now. \
    Please try again later.";

const CHAT_FAILED_MESSAGE: &str = "Failed to process chat message";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Clients only ever see a static per-route message: bad input and server
/// faults are reported identically as 500s. The cause is logged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(&'static str),

    #[error("{message}: {error:#}")]
    Failed {
        message: &'static str,
        error: anyhow::Error,
    },

    #[error("Chat failed: {0:#}")]
    ChatFailed(anyhow::Error),
}

impl AppError {
    /// Adapter for `map_err` that tags any error with a route's public message.
    pub fn failed<E>(message: &'static str) -> impl FnOnce(E) -> AppError
    where
        E: Into<anyhow::Error>,
    {
        move |e| AppError::Failed {
            message,
            error: e.into(),
        }
    }

    pub fn chat<E: Into<anyhow::Error>>(e: E) -> AppError {
        AppError::ChatFailed(e.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            AppError::Failed { message, error } => {
                tracing::error!("{message}: {error:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": message }),
                )
            }
            AppError::ChatFailed(e) => {
                tracing::error!("Chat error: {e:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "message": CHAT_FAILED_MESSAGE,
                        "response": CHAT_APOLOGY
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
