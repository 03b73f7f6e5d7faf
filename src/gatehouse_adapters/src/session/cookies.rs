//! Cookie plumbing for the session and CSRF tokens.

use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

use gatehouse_core::{CsrfToken, SessionId};

use crate::config::GatewaySetting;

/// Session cookie: HttpOnly so scripts can never read the id.
pub fn create_session_cookie(session: &SessionId, config: &GatewaySetting) -> Cookie<'static> {
    let mut cookie = Cookie::new(config.session.cookie_name.clone(), session.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(config.session.secure);
    if let Some(domain) = &config.session.cookie_domain {
        cookie.set_domain(domain.clone());
    }
    cookie
}

/// CSRF cookie: readable by the client, which must echo the value in the
/// `x-csrf-token` header on state-changing requests.
pub fn create_csrf_cookie(token: &CsrfToken, config: &GatewaySetting) -> Cookie<'static> {
    let mut cookie = Cookie::new(
        config.session.csrf_cookie_name.clone(),
        token.as_str().to_owned(),
    );
    cookie.set_path("/");
    cookie.set_http_only(false);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(config.session.secure);
    if let Some(domain) = &config.session.cookie_domain {
        cookie.set_domain(domain.clone());
    }
    cookie
}

/// Read the session id from the jar. Malformed values are treated the same
/// as an absent cookie.
pub fn extract_session(jar: &CookieJar, cookie_name: &str) -> Option<SessionId> {
    let raw = jar.get(cookie_name)?.value();
    match SessionId::parse(raw) {
        Ok(session) => Some(session),
        Err(_) => {
            tracing::debug!("discarding malformed session cookie");
            None
        }
    }
}
