use std::collections::HashMap;
use std::sync::Arc;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::ExposeSecret;
use tokio::sync::RwLock;

use gatehouse_core::{Email, Password, Principal, PrincipalProfile, UserStore, UserStoreError};

/// Stored form of a principal. Only the argon2 hash is kept; the plaintext
/// password never survives `add_principal`.
struct StoredPrincipal {
    name: String,
    password_hash: String,
}

#[derive(Default, Clone)]
pub struct HashMapUserStore {
    principals: Arc<RwLock<HashMap<Email, StoredPrincipal>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn hash_password(password: &Password) -> Result<String, UserStoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_principal(&self, principal: Principal) -> Result<(), UserStoreError> {
        let password_hash = hash_password(principal.password())?;

        let mut principals = self.principals.write().await;
        if principals.contains_key(principal.email()) {
            return Err(UserStoreError::PrincipalAlreadyExists);
        }
        principals.insert(
            principal.email().clone(),
            StoredPrincipal {
                name: principal.name().to_owned(),
                password_hash,
            },
        );
        Ok(())
    }

    async fn verify_credentials(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<PrincipalProfile, UserStoreError> {
        let principals = self.principals.read().await;
        let stored = principals
            .get(email)
            .ok_or(UserStoreError::PrincipalNotFound)?;

        let parsed_hash = PasswordHash::new(&stored.password_hash)
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Argon2::default()
            .verify_password(password.as_ref().expose_secret().as_bytes(), &parsed_hash)
            .map_err(|_| UserStoreError::IncorrectPassword)?;

        Ok(PrincipalProfile::new(email, stored.name.clone()))
    }

    async fn get_profile(&self, email: &Email) -> Result<PrincipalProfile, UserStoreError> {
        let principals = self.principals.read().await;
        let stored = principals
            .get(email)
            .ok_or(UserStoreError::PrincipalNotFound)?;

        Ok(PrincipalProfile::new(email, stored.name.clone()))
    }

    async fn remove_principal(&self, email: &Email) -> Result<(), UserStoreError> {
        let mut principals = self.principals.write().await;
        principals
            .remove(email)
            .ok_or(UserStoreError::PrincipalNotFound)?;
        Ok(())
    }
}
