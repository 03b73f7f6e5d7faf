use gatehouse_core::{
    PrincipalProfile, SessionId, SessionStore, SessionStoreError, UserStore, UserStoreError,
};

/// Error types for the current-user lookup
#[derive(Debug, thiserror::Error)]
pub enum CurrentUserError {
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Current-user use case - resolves a session to the principal's public
/// profile. No ambient "current user" exists anywhere; the lookup is the
/// explicit session-to-principal resolution done here per request.
pub struct CurrentUserUseCase<S, U>
where
    S: SessionStore,
    U: UserStore,
{
    session_store: S,
    user_store: U,
}

impl<S, U> CurrentUserUseCase<S, U>
where
    S: SessionStore,
    U: UserStore,
{
    pub fn new(session_store: S, user_store: U) -> Self {
        Self {
            session_store,
            user_store,
        }
    }

    #[tracing::instrument(name = "CurrentUserUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        session: Option<SessionId>,
    ) -> Result<PrincipalProfile, CurrentUserError> {
        let session = session.ok_or(CurrentUserError::Unauthenticated)?;

        let email = self
            .session_store
            .principal_for(&session)
            .await?
            .ok_or(CurrentUserError::Unauthenticated)?;

        match self.user_store.get_profile(&email).await {
            Ok(profile) => Ok(profile),
            // A session bound to a since-removed principal is just unauthenticated
            Err(UserStoreError::PrincipalNotFound) => Err(CurrentUserError::Unauthenticated),
            Err(error) => Err(CurrentUserError::UserStoreError(error)),
        }
    }
}
