pub mod env {
    pub const CONFIG_FILE_BASENAME: &str = "gateway";
    pub const ENV_PREFIX: &str = "GATEWAY";
    pub const SEED_EMAIL_ENV_VAR: &str = "GATEWAY_SEED_EMAIL";
    pub const SEED_PASSWORD_ENV_VAR: &str = "GATEWAY_SEED_PASSWORD";
    pub const SEED_NAME_ENV_VAR: &str = "GATEWAY_SEED_NAME";
}

/// Header a client must echo the session's CSRF token in on
/// state-changing requests.
pub const CSRF_HEADER_NAME: &str = "x-csrf-token";

/// Status returned when the CSRF check fails, before handler logic runs.
pub const CSRF_MISMATCH_STATUS: u16 = 419;

pub mod defaults {
    pub const SESSION_COOKIE_NAME: &str = "gatehouse_session";
    pub const CSRF_COOKIE_NAME: &str = "gatehouse_csrf";
    pub const SESSION_TIME_TO_LIVE_SECONDS: i64 = 2 * 60 * 60;
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
