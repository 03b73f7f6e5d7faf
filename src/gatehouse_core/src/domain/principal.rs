use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use super::{email::Email, password::Password};

/// The stored user record a session can bind to.
#[derive(Debug, Clone)]
pub struct Principal {
    email: Email,
    password: Password,
    name: String,
}

impl Principal {
    pub fn new(email: Email, password: Password, name: String) -> Self {
        Self {
            email,
            password,
            name,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Public profile fields of a `Principal`. This is the only shape in which
/// user data ever crosses the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalProfile {
    pub email: String,
    pub name: String,
}

impl PrincipalProfile {
    /// The public projection of a stored record. Stores build their responses
    /// through this so the exposed fields stay in one place.
    pub fn new(email: &Email, name: impl Into<String>) -> Self {
        Self {
            email: email.as_ref().expose_secret().clone(),
            name: name.into(),
        }
    }
}
