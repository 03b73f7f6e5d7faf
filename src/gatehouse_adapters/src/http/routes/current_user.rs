use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;

use gatehouse_application::CurrentUserUseCase;
use gatehouse_core::{SessionStore, UserStore};

use crate::config::GatewaySetting;
use crate::session::extract_session;

use super::error::ApiError;

/// Protected endpoint: the authenticated principal's public profile.
#[tracing::instrument(name = "GetCurrentUser", skip_all)]
pub async fn current_user<S, U>(
    State((session_store, user_store)): State<(S, U)>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError>
where
    S: SessionStore + Clone + 'static,
    U: UserStore + Clone + 'static,
{
    let config = GatewaySetting::load();
    let session = extract_session(&jar, &config.session.cookie_name);

    let use_case = CurrentUserUseCase::new(session_store, user_store);
    let profile = use_case.execute(session).await?;

    Ok((StatusCode::OK, Json(profile)))
}
