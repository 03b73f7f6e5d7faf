use std::sync::LazyLock;

use http::HeaderValue;
use serde::Deserialize;

use super::constants::{defaults, env, prod};

/// Gateway configuration, layered from defaults, an optional `gateway.json`
/// file, and `GATEWAY__*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySetting {
    pub server: ServerSetting,
    pub session: SessionSetting,
    #[serde(default)]
    pub stateful_domains: StatefulDomains,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSetting {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSetting {
    pub cookie_name: String,
    pub csrf_cookie_name: String,
    /// Domain attribute for both cookies; host-only when unset.
    #[serde(default)]
    pub cookie_domain: Option<String>,
    pub secure: bool,
    pub time_to_live_seconds: i64,
}

/// Client origins permitted to use cookie-based (stateful) authentication.
/// Drives the CORS allow-origin predicate with credentials enabled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StatefulDomains(Vec<String>);

impl StatefulDomains {
    pub fn new(domains: Vec<String>) -> Self {
        Self(domains)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|domain| domain == origin))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

static SETTINGS: LazyLock<GatewaySetting> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    build_settings().expect("gateway configuration should be loadable")
});

fn build_settings() -> Result<GatewaySetting, config::ConfigError> {
    config::Config::builder()
        .set_default("server.address", prod::APP_ADDRESS)?
        .set_default("session.cookie_name", defaults::SESSION_COOKIE_NAME)?
        .set_default("session.csrf_cookie_name", defaults::CSRF_COOKIE_NAME)?
        .set_default("session.secure", false)?
        .set_default(
            "session.time_to_live_seconds",
            defaults::SESSION_TIME_TO_LIVE_SECONDS,
        )?
        .set_default("stateful_domains", Vec::<String>::new())?
        .add_source(config::File::with_name(env::CONFIG_FILE_BASENAME).required(false))
        .add_source(
            config::Environment::with_prefix(env::ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("stateful_domains"),
        )
        .build()?
        .try_deserialize()
}

impl GatewaySetting {
    /// Cached settings, loaded on first access.
    pub fn load() -> &'static GatewaySetting {
        &SETTINGS
    }
}
