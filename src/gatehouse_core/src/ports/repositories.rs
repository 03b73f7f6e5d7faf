use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    password::Password,
    principal::{Principal, PrincipalProfile},
    session_id::SessionId,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("Principal already exists")]
    PrincipalAlreadyExists,
    #[error("Principal not found")]
    PrincipalNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::PrincipalAlreadyExists, Self::PrincipalAlreadyExists) => true,
            (Self::PrincipalNotFound, Self::PrincipalNotFound) => true,
            (Self::IncorrectPassword, Self::IncorrectPassword) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// The authentication guard: owns principal records and password
/// verification. The gateway never sees a stored credential.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_principal(&self, principal: Principal) -> Result<(), UserStoreError>;
    async fn verify_credentials(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<PrincipalProfile, UserStoreError>;
    async fn get_profile(&self, email: &Email) -> Result<PrincipalProfile, UserStoreError>;
    async fn remove_principal(&self, email: &Email) -> Result<(), UserStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Owns the session lifecycle. The gateway only ever holds opaque ids.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Start an anonymous (guest) session.
    async fn start_session(&self) -> Result<SessionId, SessionStoreError>;

    /// Drop `old` (if any) and issue a fresh id bound to `principal`.
    /// Issuing a new id on every authentication defeats session fixation.
    async fn regenerate(
        &self,
        old: Option<&SessionId>,
        principal: Email,
    ) -> Result<SessionId, SessionStoreError>;

    /// Destroy a session. Unknown ids are not an error.
    async fn invalidate(&self, session: &SessionId) -> Result<(), SessionStoreError>;

    /// The principal bound to a live session, `None` for guest, expired,
    /// or unknown sessions.
    async fn principal_for(&self, session: &SessionId)
    -> Result<Option<Email>, SessionStoreError>;

    async fn is_valid(&self, session: &SessionId) -> Result<bool, SessionStoreError>;
}
