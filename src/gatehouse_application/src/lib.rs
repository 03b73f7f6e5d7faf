pub mod use_cases;

pub use use_cases::{
    current_user::{CurrentUserError, CurrentUserUseCase},
    login::{EstablishedSession, LoginError, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
};
