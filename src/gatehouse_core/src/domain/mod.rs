pub mod csrf_token;
pub mod email;
pub mod password;
pub mod principal;
pub mod session_id;
