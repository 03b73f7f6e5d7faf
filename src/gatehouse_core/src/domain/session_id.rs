use std::fmt;

use uuid::Uuid;

/// Opaque session identifier.
///
/// The gateway treats this as a token: it round-trips through the session
/// cookie and means nothing outside the session store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SessionIdError {
    #[error("Malformed session identifier")]
    Malformed,
}

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a session id from a cookie value.
    pub fn parse(value: &str) -> Result<Self, SessionIdError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| SessionIdError::Malformed)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
