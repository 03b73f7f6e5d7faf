pub mod csrf;
pub mod routes;

pub use csrf::require_csrf_token;
pub use routes::{ApiError, LoginRequest, MessageResponse};
