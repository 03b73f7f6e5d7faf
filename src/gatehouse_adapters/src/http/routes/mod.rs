pub mod csrf_cookie;
pub mod current_user;
pub mod error;
pub mod login;
pub mod logout;

pub use csrf_cookie::csrf_cookie;
pub use current_user::current_user;
pub use error::{ApiError, MessageResponse};
pub use login::{LoginRequest, login, probe_login};
pub use logout::logout;
