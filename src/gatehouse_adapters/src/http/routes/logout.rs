use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;

use gatehouse_application::LogoutUseCase;
use gatehouse_core::{CsrfValidator, SessionStore};

use crate::config::GatewaySetting;
use crate::session::{create_csrf_cookie, create_session_cookie, extract_session};

use super::error::{ApiError, MessageResponse};

/// Unconditional logout: succeeds whether or not a session was presented.
/// The response replaces the session cookie with a fresh guest session and
/// a rotated CSRF token.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<S, C>(
    State((session_store, csrf_validator)): State<(S, C)>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError>
where
    S: SessionStore + Clone + 'static,
    C: CsrfValidator + Clone + 'static,
{
    let config = GatewaySetting::load();
    let current_session = extract_session(&jar, &config.session.cookie_name);

    let use_case = LogoutUseCase::new(session_store, csrf_validator);
    let guest = use_case.execute(current_session).await?;

    let jar = jar
        .add(create_session_cookie(&guest.session, config))
        .add(create_csrf_cookie(&guest.csrf_token, config));

    Ok((
        jar,
        (StatusCode::OK, Json(MessageResponse::new("Logged out"))),
    ))
}
