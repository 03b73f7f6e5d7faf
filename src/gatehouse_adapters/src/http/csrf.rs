//! CSRF middleware: state-changing requests are rejected before any handler
//! runs unless they echo the token bound to their session.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use gatehouse_core::{CsrfToken, CsrfValidator};

use crate::config::GatewaySetting;
use crate::config::constants::CSRF_HEADER_NAME;
use crate::session::extract_session;

use super::routes::ApiError;

/// Layer this over the whole router: safe methods (GET/HEAD/OPTIONS) pass
/// through untouched, everything else must present a session whose current
/// CSRF token matches the `x-csrf-token` header. No per-route exemptions.
pub async fn require_csrf_token<C>(
    State(csrf_validator): State<C>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    C: CsrfValidator + Clone + Send + Sync + 'static,
{
    if request.method().is_safe() {
        return Ok(next.run(request).await);
    }

    let config = GatewaySetting::load();

    let session = match extract_session(&jar, &config.session.cookie_name) {
        Some(session) => session,
        None => return Err(ApiError::CsrfMismatch),
    };

    let token = presented_token(&request).ok_or(ApiError::CsrfMismatch)?;

    csrf_validator.validate(&session, &token).await?;

    Ok(next.run(request).await)
}

fn presented_token(request: &Request) -> Option<CsrfToken> {
    let raw = request.headers().get(CSRF_HEADER_NAME)?.to_str().ok()?;
    CsrfToken::parse(raw).ok()
}
