//! # Gatehouse - Session Auth Gateway Library
//!
//! This is a facade crate that re-exports all public APIs from the gateway
//! components. Use this crate to get access to the whole gateway in one
//! place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Principal`, `SessionId`,
//!   `CsrfToken`
//! - **Ports**: `UserStore`, `SessionStore`, `CsrfValidator`
//! - **Use cases**: `LoginUseCase`, `LogoutUseCase`, `CurrentUserUseCase`
//! - **Adapters**: `HashMapUserStore`, `InMemorySessionStore`,
//!   `HashMapCsrfValidator`, HTTP routes and CSRF middleware
//! - **Service**: `SessionGateway` - the assembled router

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use gatehouse_core::*;
}

// Re-export most commonly used core types at the root level
pub use gatehouse_core::{
    CsrfToken, CsrfTokenError, Email, EmailError, Password, PasswordError, Principal,
    PrincipalProfile, SessionId, SessionIdError,
};

// ============================================================================
// Ports (collaborator traits)
// ============================================================================

/// Collaborator trait definitions
pub mod ports {
    pub use gatehouse_core::{
        CsrfError, CsrfValidator, SessionStore, SessionStoreError, UserStore, UserStoreError,
    };
}

// Re-export ports at root level
pub use gatehouse_core::{
    CsrfError, CsrfValidator, SessionStore, SessionStoreError, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use gatehouse_application::*;
}

// Re-export use cases at root level
pub use gatehouse_application::{
    CurrentUserUseCase, EstablishedSession, LoginUseCase, LogoutUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers and CSRF middleware
    pub mod http {
        pub use gatehouse_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use gatehouse_adapters::persistence::*;
    }

    /// Session and CSRF cookie helpers
    pub mod session {
        pub use gatehouse_adapters::session::*;
    }

    /// Configuration
    pub mod config {
        pub use gatehouse_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use gatehouse_adapters::persistence::{
    HashMapCsrfValidator, HashMapUserStore, InMemorySessionStore,
};

// ============================================================================
// Session Gateway (Main Entry Point)
// ============================================================================

/// Main gateway service
pub use gatehouse_service::SessionGateway;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
