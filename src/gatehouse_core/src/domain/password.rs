use secrecy::{ExposeSecret, Secret};

/// A non-empty password as received in a login request.
///
/// Only the structural check lives here; whether the password matches a
/// stored hash is the user store's concern.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PasswordError {
    #[error("Password must not be empty")]
    Empty,
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            Err(PasswordError::Empty)
        } else {
            Ok(Self(value))
        }
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
