use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use gatehouse_core::{CsrfError, CsrfToken, CsrfValidator, SessionId};

/// In-memory CSRF token registry, one current token per session.
#[derive(Default, Clone)]
pub struct HashMapCsrfValidator {
    tokens: Arc<RwLock<HashMap<SessionId, CsrfToken>>>,
}

impl HashMapCsrfValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CsrfValidator for HashMapCsrfValidator {
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
