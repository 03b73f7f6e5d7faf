use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use gatehouse_application::{CurrentUserError, LoginError, LogoutError};
use gatehouse_core::{CsrfError, EmailError, PasswordError, SessionStoreError, UserStoreError};

use crate::config::constants::CSRF_MISMATCH_STATUS;

/// Every response body in the gateway is a message envelope or a profile.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Boundary error type: everything the handlers and middleware can fail
/// with, mapped to one status + generic message each.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // One fixed message for unknown email and wrong password alike, so the
    // response never reveals whether an account exists.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("CSRF token mismatch")]
    CsrfMismatch,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidCredentials | ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::CsrfMismatch => {
                StatusCode::from_u16(CSRF_MISMATCH_STATUS).unwrap_or(StatusCode::FORBIDDEN)
            }
            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(MessageResponse::new(self.to_string()));

        (status_code, body).into_response()
    }
}

impl From<EmailError> for ApiError {
    fn from(error: EmailError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(error: PasswordError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::PrincipalNotFound | UserStoreError::IncorrectPassword => {
                ApiError::InvalidCredentials
            }
            UserStoreError::PrincipalAlreadyExists => ApiError::InvalidInput(error.to_string()),
            UserStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<SessionStoreError> for ApiError {
    fn from(error: SessionStoreError) -> Self {
        match error {
            SessionStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<CsrfError> for ApiError {
    fn from(error: CsrfError) -> Self {
        match error {
            CsrfError::TokenMismatch | CsrfError::UnknownSession => ApiError::CsrfMismatch,
            CsrfError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::UserStoreError(e) => e.into(),
            LoginError::SessionStoreError(e) => e.into(),
            LoginError::CsrfError(e) => e.into(),
        }
    }
}

impl From<LogoutError> for ApiError {
    fn from(error: LogoutError) -> Self {
        match error {
            LogoutError::SessionStoreError(e) => e.into(),
            LogoutError::CsrfError(e) => e.into(),
        }
    }
}

impl From<CurrentUserError> for ApiError {
    fn from(error: CurrentUserError) -> Self {
        match error {
            CurrentUserError::Unauthenticated => ApiError::Unauthenticated,
            CurrentUserError::SessionStoreError(e) => e.into(),
            CurrentUserError::UserStoreError(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_the_contract() {
        assert_eq!(
            ApiError::InvalidInput("bad".into()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Unauthenticated.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::CsrfMismatch.into_response().status().as_u16(),
            CSRF_MISMATCH_STATUS
        );
        assert_eq!(
            ApiError::UnexpectedError("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn credential_failures_collapse_to_one_generic_error() {
        let not_found: ApiError = UserStoreError::PrincipalNotFound.into();
        let wrong_password: ApiError = UserStoreError::IncorrectPassword.into();

        assert_eq!(not_found.to_string(), "Invalid credentials");
        assert_eq!(wrong_password.to_string(), "Invalid credentials");
    }
}
