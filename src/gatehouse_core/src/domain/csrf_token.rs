use rand::Rng;
use rand::distr::Alphanumeric;

const TOKEN_LENGTH: usize = 40;

/// Opaque anti-forgery token, scoped to a single session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CsrfTokenError {
    #[error("Empty CSRF token")]
    Empty,
}

impl CsrfToken {
    pub fn new() -> Self {
        let token = rand::rng()
            .sample_iter(Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();
        Self(token)
    }

    /// Parse a token as presented by a client. Whether it matches the one
    /// bound to the session is the validator's decision, not a parse concern.
    pub fn parse(value: &str) -> Result<Self, CsrfTokenError> {
        if value.is_empty() {
            Err(CsrfTokenError::Empty)
        } else {
            Ok(Self(value.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CsrfToken {
    fn default() -> Self {
        Self::new()
    }
}
