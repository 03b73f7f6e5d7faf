use color_eyre::eyre::Result;
use gatehouse::{
    Email, HashMapCsrfValidator, HashMapUserStore, InMemorySessionStore, Password, Principal,
    Secret, SessionGateway, UserStore,
    adapters::config::{GatewaySetting, env},
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");
    dotenvy::dotenv().ok();

    let config = GatewaySetting::load();

    let user_store = HashMapUserStore::new();
    seed_principal(&user_store).await?;

    let session_store = InMemorySessionStore::new(config.session.time_to_live_seconds);
    let csrf_validator = HashMapCsrfValidator::new();

    let gateway = SessionGateway::new(user_store, session_store, csrf_validator);

    let listener = tokio::net::TcpListener::bind(&config.server.address).await?;
    tracing::info!("Starting session auth gateway...");

    gateway
        .run_standalone(listener, Some(config.stateful_domains.clone()))
        .await?;

    Ok(())
}

/// Seed a demo principal from the environment, if one is configured.
/// The in-memory store starts empty otherwise and the gateway has no
/// signup surface.
async fn seed_principal(user_store: &HashMapUserStore) -> Result<(), Box<dyn std::error::Error>> {
    let (Ok(email), Ok(password)) = (
        std::env::var(env::SEED_EMAIL_ENV_VAR),
        std::env::var(env::SEED_PASSWORD_ENV_VAR),
    ) else {
        return Ok(());
    };
    let name = std::env::var(env::SEED_NAME_ENV_VAR).unwrap_or_else(|_| "Demo User".to_string());

    user_store
        .add_principal(Principal::new(
            Email::try_from(Secret::from(email))?,
            Password::try_from(Secret::from(password))?,
            name,
        ))
        .await?;

    tracing::info!("Seeded demo principal from environment");
    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
