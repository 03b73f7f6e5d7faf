use axum::{extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;

use gatehouse_core::{CsrfValidator, SessionStore};

use crate::config::GatewaySetting;
use crate::session::{create_csrf_cookie, create_session_cookie, extract_session};

use super::error::ApiError;

/// Prime a session with a CSRF token.
///
/// Clients call this once before their first state-changing request: it
/// reuses the presented session if it is still live, otherwise starts a
/// guest one, and sets both cookies.
#[tracing::instrument(name = "IssueCsrfCookie", skip_all)]
pub async fn csrf_cookie<S, C>(
    State((session_store, csrf_validator)): State<(S, C)>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError>
where
    S: SessionStore + Clone + 'static,
    C: CsrfValidator + Clone + 'static,
{
    let config = GatewaySetting::load();

    let mut session = extract_session(&jar, &config.session.cookie_name);
    if let Some(candidate) = &session {
        if !session_store.is_valid(candidate).await? {
            session = None;
        }
    }
    let session = match session {
        Some(session) => session,
        None => session_store.start_session().await?,
    };

    let token = csrf_validator.issue(&session).await?;

    let jar = jar
        .add(create_session_cookie(&session, config))
        .add(create_csrf_cookie(&token, config));

    Ok((jar, StatusCode::NO_CONTENT))
}
