pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    csrf_token::{CsrfToken, CsrfTokenError},
    email::{Email, EmailError},
    password::{Password, PasswordError},
    principal::{Principal, PrincipalProfile},
    session_id::{SessionId, SessionIdError},
};

pub use ports::{
    repositories::{SessionStore, SessionStoreError, UserStore, UserStoreError},
    services::{CsrfError, CsrfValidator},
};
