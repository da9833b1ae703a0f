use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use feast_accounts::AccountError;

/// Application error type
///
/// Rendered as a plain-text body with the machine-readable code in the
/// `X-Error-Code` header.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// The one answer every failed login gets
    pub fn login_failed() -> Self {
        ApiError::Unauthorized(AccountError::LOGIN_FAILED_MESSAGE.to_string())
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Validation(msg) => ApiError::InvalidRequest(msg),
            AccountError::AccountNotFound(_) => ApiError::NotFound(err.to_string()),
            AccountError::InvalidCredentials => ApiError::login_failed(),
            AccountError::AlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AccountError::SelfDeletion => ApiError::Unprocessable(err.to_string()),
            AccountError::Storage(_) | AccountError::Crypto(_) | AccountError::Session(_) => {
                ApiError::Internal(anyhow::Error::new(err))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
            ApiError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE", msg)
            }
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, [("X-Error-Code", code)], message).into_response()
    }
}
