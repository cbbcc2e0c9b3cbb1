use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Request body could not be decoded as the expected JSON shape.
    #[error("{context}: {source}")]
    InvalidBody {
        context: &'static str,
        source: serde_json::Error,
    },
}

impl AppError {
    pub fn invalid_body(context: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| AppError::InvalidBody { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
        };

        let message = self.to_string();
        tracing::warn!(status = %status.as_u16(), error = %message, "Rejected request");

        // Plain text body, not a JSON envelope
        (status, message).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
