pub mod cookies;

pub use cookies::{create_csrf_cookie, create_session_cookie, extract_session};
