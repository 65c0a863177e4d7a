use crate::domain::contact::ports::RelayError;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Validation(String),
    // The transport-unavailable and dispatch-failure kinds both answer
    // with a plain 500, matching the service this replaces.
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    SendFailed(String),
}

impl From<RelayError> for AppError {
    fn from(error: RelayError) -> Self {
        let message = error.to_string();
        match error {
            RelayError::MissingApiKey => AppError::Unauthorized(message),
            RelayError::InvalidApiKey => AppError::Forbidden(message),
            RelayError::Validation(_) => AppError::Validation(message),
            RelayError::NotConfigured => AppError::Unavailable(message),
            RelayError::SendFailed(_) => AppError::SendFailed(message),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SendFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
