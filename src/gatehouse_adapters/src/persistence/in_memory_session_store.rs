use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use gatehouse_core::{Email, SessionId, SessionStore, SessionStoreError};

struct SessionRecord {
    principal: Option<Email>,
    issued_at: DateTime<Utc>,
}

/// In-memory session store. Records expire after the configured
/// time-to-live and are pruned on access.
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionRecord>>>,
    time_to_live: Duration,
}

impl InMemorySessionStore {
    pub fn new(time_to_live_seconds: i64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            time_to_live: Duration::seconds(time_to_live_seconds),
        }
    }

    fn is_live(&self, record: &SessionRecord) -> bool {
        Utc::now() - record.issued_at < self.time_to_live
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn start_session(&self) -> Result<SessionId, SessionStoreError> {
        let id = SessionId::new();
        self.sessions.write().await.insert(
            id.clone(),
            SessionRecord {
                principal: None,
                issued_at: Utc::now(),
            },
        );
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
        sessions.insert(
            id.clone(),
            SessionRecord {
                principal: Some(principal),
                issued_at: Utc::now(),
            },
        );
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
        let mut sessions = self.sessions.write().await;
        match sessions.get(session) {
            Some(record) if self.is_live(record) => Ok(record.principal.clone()),
            Some(_) => {
                sessions.remove(session);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn is_valid(&self, session: &SessionId) -> Result<bool, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(session) {
            Some(record) if self.is_live(record) => Ok(true),
            Some(_) => {
                sessions.remove(session);
                Ok(false)
            }
            None => Ok(false),
        }
    }
}
