use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;

use gatehouse_application::LoginUseCase;
use gatehouse_core::{CsrfValidator, Email, Password, SessionStore, UserStore};

use crate::config::GatewaySetting;
use crate::session::{create_csrf_cookie, create_session_cookie, extract_session};

use super::error::{ApiError, MessageResponse};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

/// Unauthenticated probe: always reports that login is required.
#[tracing::instrument(name = "ProbeLogin", skip_all)]
pub async fn probe_login() -> impl IntoResponse {
    (
        StatusCode::UNAUTHORIZED,
        Json(MessageResponse::new("Please login")),
    )
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, S, C>(
    State((user_store, session_store, csrf_validator)): State<(U, S, C)>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
    C: CsrfValidator + Clone + 'static,
{
    // Shape validation before any collaborator is consulted
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let config = GatewaySetting::load();
    let current_session = extract_session(&jar, &config.session.cookie_name);

    let use_case = LoginUseCase::new(user_store, session_store, csrf_validator);
    let established = use_case.execute(email, password, current_session).await?;

    let jar = jar
        .add(create_session_cookie(&established.session, config))
        .add(create_csrf_cookie(&established.csrf_token, config));

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(MessageResponse::new("Login successful")),
        ),
    ))
}
