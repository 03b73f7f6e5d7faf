use gatehouse_core::{CsrfError, CsrfValidator, SessionId, SessionStore, SessionStoreError};

use super::login::EstablishedSession;

/// Error types for the logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
    #[error("CSRF error: {0}")]
    CsrfError(#[from] CsrfError),
}

/// Logout use case - invalidates the presented session unconditionally.
///
/// Succeeds whether or not the client was authenticated. The caller gets a
/// fresh guest session with a rotated CSRF token, so the invalidated id can
/// never authenticate again while the client remains able to make
/// state-changing requests.
pub struct LogoutUseCase<S, C>
where
    S: SessionStore,
    C: CsrfValidator,
{
    session_store: S,
    csrf_validator: C,
}

impl<S, C> LogoutUseCase<S, C>
where
    S: SessionStore,
    C: CsrfValidator,
{
    pub fn new(session_store: S, csrf_validator: C) -> Self {
        Self {
            session_store,
            csrf_validator,
        }
    }

    #[tracing::instrument(name = "LogoutUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        session: Option<SessionId>,
    ) -> Result<EstablishedSession, LogoutError> {
        if let Some(session) = &session {
            self.csrf_validator.discard(session).await?;
            self.session_store.invalidate(session).await?;
        }

        let guest = self.session_store.start_session().await?;
        let csrf_token = self.csrf_validator.rotate(&guest).await?;

        Ok(EstablishedSession {
            session: guest,
            csrf_token,
        })
    }
}
