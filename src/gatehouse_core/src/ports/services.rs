use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{csrf_token::CsrfToken, session_id::SessionId};

#[derive(Debug, Error)]
pub enum CsrfError {
    #[error("CSRF token does not match the session")]
    TokenMismatch,
    #[error("No CSRF token issued for this session")]
    UnknownSession,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for CsrfError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::TokenMismatch, Self::TokenMismatch) => true,
            (Self::UnknownSession, Self::UnknownSession) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Cross-site request forgery defense. Tokens are opaque values bound to a
/// session; state-changing requests must echo the current one.
#[async_trait]
pub trait CsrfValidator: Send + Sync {
    /// Return the token bound to the session, minting one if none exists.
    async fn issue(&self, session: &SessionId) -> Result<CsrfToken, CsrfError>;

    /// Check a client-presented token against the session's current one.
    async fn validate(&self, session: &SessionId, token: &CsrfToken) -> Result<(), CsrfError>;

    /// Force a fresh token for the session, replacing any previous one.
    async fn rotate(&self, session: &SessionId) -> Result<CsrfToken, CsrfError>;

    /// Drop the token bound to a session (on invalidation).
    async fn discard(&self, session: &SessionId) -> Result<(), CsrfError>;
}
