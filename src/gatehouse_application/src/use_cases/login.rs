use gatehouse_core::{
    CsrfError, CsrfToken, CsrfValidator, Email, Password, SessionId, SessionStore,
    SessionStoreError, UserStore, UserStoreError,
};

/// A freshly established session and the CSRF token bound to it, ready to be
/// turned into cookies by the HTTP layer.
#[derive(Debug)]
pub struct EstablishedSession {
    pub session: SessionId,
    pub csrf_token: CsrfToken,
}

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
    #[error("CSRF error: {0}")]
    CsrfError(#[from] CsrfError),
}

/// Login use case - verifies credentials and establishes a session.
///
/// On success the session id presented by the client (guest or stale) is
/// dropped and a fresh one is bound to the principal, with a rotated CSRF
/// token. On failure no session is created.
pub struct LoginUseCase<U, S, C>
where
    U: UserStore,
    S: SessionStore,
    C: CsrfValidator,
{
    user_store: U,
    session_store: S,
    csrf_validator: C,
}

impl<U, S, C> LoginUseCase<U, S, C>
where
    U: UserStore,
    S: SessionStore,
    C: CsrfValidator,
{
    pub fn new(user_store: U, session_store: S, csrf_validator: C) -> Self {
        Self {
            user_store,
            session_store,
            csrf_validator,
        }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
        current_session: Option<SessionId>,
    ) -> Result<EstablishedSession, LoginError> {
        // Credential verification is entirely the guard's business
        self.user_store.verify_credentials(&email, &password).await?;

        // Regenerate the session id so a pre-login id can never carry over.
        // The old id's CSRF token goes with it, or the validator would keep
        // accepting a token for a session that no longer exists.
        if let Some(old) = &current_session {
            self.csrf_validator.discard(old).await?;
        }
        let session = self
            .session_store
            .regenerate(current_session.as_ref(), email)
            .await?;

        let csrf_token = self.csrf_validator.rotate(&session).await?;

        Ok(EstablishedSession {
            session,
            csrf_token,
        })
    }
}
