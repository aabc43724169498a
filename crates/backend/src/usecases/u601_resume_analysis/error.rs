use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::usecases::u601_resume_analysis::ErrorResponse;
use thiserror::Error;

/// Ошибки шлюза анализа
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Missing inputs")]
    MissingInputs,

    #[error("Invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Invalid {field} part: {reason}")]
    InvalidPart { field: &'static str, reason: String },

    #[error("Analysis service unavailable: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Analysis service returned HTTP {0}")]
    UpstreamStatus(StatusCode),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MissingInputs
            | GatewayError::Multipart(_)
            | GatewayError::InvalidPart { .. } => StatusCode::BAD_REQUEST,
            GatewayError::Upstream(_) | GatewayError::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Analysis request failed: {}", self);
        } else {
            tracing::warn!("Analysis request rejected: {}", self);
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
