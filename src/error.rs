use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Per-request failure. Validation errors are detected before any
/// upstream call; upstream errors wrap whatever the model client returned.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Formato inválido. Use: /translate/idioma1-idioma2/texto")]
    InvalidFormat,

    #[error("O texto é obrigatório")]
    MissingText,

    #[error("Erro ao processar a tradução")]
    TranslationFailed(#[source] anyhow::Error),

    #[error("Erro ao detectar idioma")]
    DetectionFailed(#[source] anyhow::Error),
}

impl ServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidFormat | Self::MissingText)
    }

    pub fn status_code(&self) -> StatusCode {
        if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Message of the underlying upstream error, if any.
    pub fn details(&self) -> Option<String> {
        match self {
            Self::TranslationFailed(e) | Self::DetectionFailed(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self.details() {
            Some(details) => json!({
                "error": self.to_string(),
                "details": details,
            }),
            None => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
