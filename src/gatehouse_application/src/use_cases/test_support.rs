//! In-memory mock ports shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;

use secrecy::ExposeSecret;
use tokio::sync::RwLock;

use gatehouse_core::{
    CsrfError, CsrfToken, CsrfValidator, Email, Password, PrincipalProfile, SessionId,
    SessionStore, SessionStoreError, UserStore, UserStoreError,
};

#[derive(Clone)]
pub struct MockUserStore {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn add_principal(
        &self,
        _principal: gatehouse_core::Principal,
    ) -> Result<(), UserStoreError> {
        unimplemented!()
    }

    async fn verify_credentials(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<PrincipalProfile, UserStoreError> {
        if email.as_ref().expose_secret() != &self.email {
            return Err(UserStoreError::PrincipalNotFound);
        }
        if password.as_ref().expose_secret() != &self.password {
            return Err(UserStoreError::IncorrectPassword);
        }
        Ok(PrincipalProfile {
            email: self.email.clone(),
            name: self.name.clone(),
        })
    }

    async fn get_profile(&self, email: &Email) -> Result<PrincipalProfile, UserStoreError> {
        if email.as_ref().expose_secret() == &self.email {
            Ok(PrincipalProfile {
                email: self.email.clone(),
                name: self.name.clone(),
            })
        } else {
            Err(UserStoreError::PrincipalNotFound)
        }
    }

    async fn remove_principal(&self, _email: &Email) -> Result<(), UserStoreError> {
        unimplemented!()
    }
}

#[derive(Default, Clone)]
pub struct MockSessionStore {
    pub sessions: Arc<RwLock<HashMap<SessionId, Option<Email>>>>,
}

#[async_trait::async_trait]
impl SessionStore for MockSessionStore {
    async fn start_session(&self) -> Result<SessionId, SessionStoreError> {
        let id = SessionId::new();
        self.sessions.write().await.insert(id.clone(), None);
        Ok(id)
    }

    async fn regenerate(
        &self,
        old: Option<&SessionId>,
        principal: Email,
    ) -> Result<SessionId, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        if let Some(old) = old {
            sessions.remove(old);
        }
        let id = SessionId::new();
        sessions.insert(id.clone(), Some(principal));
        Ok(id)
    }

    async fn invalidate(&self, session: &SessionId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(session);
        Ok(())
    }

    async fn principal_for(
        &self,
        session: &SessionId,
    ) -> Result<Option<Email>, SessionStoreError> {
        Ok(self
            .sessions
            .read()
            .await
            .get(session)
            .cloned()
            .flatten())
    }

    async fn is_valid(&self, session: &SessionId) -> Result<bool, SessionStoreError> {
        Ok(self.sessions.read().await.contains_key(session))
    }
}

#[derive(Default, Clone)]
pub struct MockCsrfValidator {
    pub tokens: Arc<RwLock<HashMap<SessionId, CsrfToken>>>,
}

#[async_trait::async_trait]
impl CsrfValidator for MockCsrfValidator {
    async fn issue(&self, session: &SessionId) -> Result<CsrfToken, CsrfError> {
        let mut tokens = self.tokens.write().await;
        Ok(tokens
            .entry(session.clone())
            .or_insert_with(CsrfToken::new)
            .clone())
    }

    async fn validate(&self, session: &SessionId, token: &CsrfToken) -> Result<(), CsrfError> {
        let tokens = self.tokens.read().await;
        match tokens.get(session) {
            Some(current) if current == token => Ok(()),
            Some(_) => Err(CsrfError::TokenMismatch),
            None => Err(CsrfError::UnknownSession),
        }
    }

    async fn rotate(&self, session: &SessionId) -> Result<CsrfToken, CsrfError> {
        let token = CsrfToken::new();
        self.tokens
            .write()
            .await
            .insert(session.clone(), token.clone());
        Ok(token)
    }

    async fn discard(&self, session: &SessionId) -> Result<(), CsrfError> {
        self.tokens.write().await.remove(session);
        Ok(())
    }
}

pub fn email(raw: &str) -> Email {
    Email::try_from(secrecy::Secret::from(raw.to_string())).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(secrecy::Secret::from(raw.to_string())).unwrap()
}
