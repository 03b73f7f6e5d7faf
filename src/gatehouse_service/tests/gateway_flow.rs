//! End-to-end tests: a real gateway on a loopback port, driven by a
//! cookie-aware HTTP client.

use gatehouse_adapters::config::constants::{CSRF_HEADER_NAME, defaults};
use gatehouse_adapters::persistence::{
    HashMapCsrfValidator, HashMapUserStore, InMemorySessionStore,
};
use gatehouse_core::{Email, Password, Principal, UserStore};
use gatehouse_service::SessionGateway;
use secrecy::Secret;

const SEEDED_EMAIL: &str = "test@example.com";
const SEEDED_PASSWORD: &str = "password";
const SEEDED_NAME: &str = "Test User";

async fn spawn_gateway() -> String {
    let user_store = HashMapUserStore::new();
    user_store
        .add_principal(Principal::new(
            Email::try_from(Secret::from(SEEDED_EMAIL.to_string())).unwrap(),
            Password::try_from(Secret::from(SEEDED_PASSWORD.to_string())).unwrap(),
            SEEDED_NAME.to_string(),
        ))
        .await
        .unwrap();

    let session_store = InMemorySessionStore::new(3600);
    let csrf_validator = HashMapCsrfValidator::new();

    let gateway = SessionGateway::new(user_store, session_store, csrf_validator);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let address = listener.local_addr().unwrap();
    tokio::spawn(gateway.run_standalone(listener, None));

    format!("http://{address}")
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap()
}

/// Pull a cookie value out of a response's Set-Cookie headers.
fn cookie_value(response: &reqwest::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|raw| {
            let (pair, _) = raw.split_once(';').unwrap_or((raw, ""));
            let (cookie_name, cookie_value) = pair.split_once('=')?;
            (cookie_name == name).then(|| cookie_value.to_string())
        })
}

async fn message_of(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.unwrap();
    body["message"].as_str().unwrap_or_default().to_string()
}

/// GET /csrf-cookie and return the issued token. The client's jar keeps the
/// session cookie.
async fn prime_csrf(client: &reqwest::Client, url: &str) -> String {
    let response = client
        .get(format!("{url}/csrf-cookie"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);
    cookie_value(&response, defaults::CSRF_COOKIE_NAME).expect("csrf cookie should be set")
}

#[tokio::test]
async fn probe_login_always_reports_login_required() {
    let url = spawn_gateway().await;
    let client = client();

    let response = client.get(format!("{url}/login")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(message_of(response).await, "Please login");

    // Still 401 after a successful login: the probe ignores session state
    let token = prime_csrf(&client, &url).await;
    client
        .post(format!("{url}/login"))
        .header(CSRF_HEADER_NAME, &token)
        .json(&serde_json::json!({"email": SEEDED_EMAIL, "password": SEEDED_PASSWORD}))
        .send()
        .await
        .unwrap();

    let response = client.get(format!("{url}/login")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(message_of(response).await, "Please login");
}

#[tokio::test]
async fn malformed_credentials_are_rejected_without_a_session() {
    let url = spawn_gateway().await;
    let client = client();
    let token = prime_csrf(&client, &url).await;

    let malformed = [
        serde_json::json!({"email": "not-an-email", "password": "password"}),
        serde_json::json!({"email": "test@example.com", "password": ""}),
        serde_json::json!({"password": "password"}),
        serde_json::json!({"email": "test@example.com"}),
    ];

    for body in malformed {
        let response = client
            .post(format!("{url}/login"))
            .header(CSRF_HEADER_NAME, &token)
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 422, "body: {body}");
    }

    // No session was established by any of those attempts
    let response = client.get(format!("{url}/user")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn state_changing_requests_need_a_valid_csrf_token() {
    let url = spawn_gateway().await;
    let client = client();

    // No session, no token
    let response = client
        .post(format!("{url}/login"))
        .json(&serde_json::json!({"email": SEEDED_EMAIL, "password": SEEDED_PASSWORD}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 419);

    // Session primed but the header carries the wrong token
    prime_csrf(&client, &url).await;
    let response = client
        .post(format!("{url}/login"))
        .header(CSRF_HEADER_NAME, "0000000000000000000000000000000000000000")
        .json(&serde_json::json!({"email": SEEDED_EMAIL, "password": SEEDED_PASSWORD}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 419);

    // Header missing entirely
    let response = client
        .post(format!("{url}/logout"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 419);
}

#[tokio::test]
async fn bad_credentials_get_one_generic_message() {
    let url = spawn_gateway().await;
    let client = client();
    let token = prime_csrf(&client, &url).await;

    let wrong_password = client
        .post(format!("{url}/login"))
        .header(CSRF_HEADER_NAME, &token)
        .json(&serde_json::json!({"email": SEEDED_EMAIL, "password": "not-the-password"}))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(message_of(wrong_password).await, "Invalid credentials");

    let unknown_email = client
        .post(format!("{url}/login"))
        .header(CSRF_HEADER_NAME, &token)
        .json(&serde_json::json!({"email": "nobody@example.com", "password": "password"}))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown_email.status().as_u16(), 401);
    assert_eq!(message_of(unknown_email).await, "Invalid credentials");

    let response = client.get(format!("{url}/user")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn full_session_lifecycle() {
    let url = spawn_gateway().await;
    let client = client();

    let token = prime_csrf(&client, &url).await;

    // Login: 200, and the session id is regenerated away from the guest one
    let login = client
        .post(format!("{url}/login"))
        .header(CSRF_HEADER_NAME, &token)
        .json(&serde_json::json!({"email": SEEDED_EMAIL, "password": SEEDED_PASSWORD}))
        .send()
        .await
        .unwrap();
    assert_eq!(login.status().as_u16(), 200);
    let authed_session = cookie_value(&login, defaults::SESSION_COOKIE_NAME)
        .expect("login should set a session cookie");
    let rotated_token = cookie_value(&login, defaults::CSRF_COOKIE_NAME)
        .expect("login should rotate the csrf cookie");
    assert_ne!(rotated_token, token);
    assert_eq!(message_of(login).await, "Login successful");

    // Protected endpoint returns the seeded principal's profile
    let user = client.get(format!("{url}/user")).send().await.unwrap();
    assert_eq!(user.status().as_u16(), 200);
    let profile: serde_json::Value = user.json().await.unwrap();
    assert_eq!(profile["email"], SEEDED_EMAIL);
    assert_eq!(profile["name"], SEEDED_NAME);

    // Logout with the rotated token
    let logout = client
        .post(format!("{url}/logout"))
        .header(CSRF_HEADER_NAME, &rotated_token)
        .send()
        .await
        .unwrap();
    assert_eq!(logout.status().as_u16(), 200);
    assert_eq!(message_of(logout).await, "Logged out");

    // The client now holds a guest session: unauthenticated
    let user = client.get(format!("{url}/user")).send().await.unwrap();
    assert_eq!(user.status().as_u16(), 401);

    // The invalidated session id itself can never authenticate again
    let bare_client = reqwest::Client::new();
    let replay = bare_client
        .get(format!("{url}/user"))
        .header(
            reqwest::header::COOKIE,
            format!("{}={}", defaults::SESSION_COOKIE_NAME, authed_session),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(replay.status().as_u16(), 401);
}

#[tokio::test]
async fn logout_succeeds_without_prior_authentication() {
    let url = spawn_gateway().await;
    let client = client();
    let token = prime_csrf(&client, &url).await;

    let logout = client
        .post(format!("{url}/logout"))
        .header(CSRF_HEADER_NAME, &token)
        .send()
        .await
        .unwrap();
    assert_eq!(logout.status().as_u16(), 200);
    assert_eq!(message_of(logout).await, "Logged out");
}

#[tokio::test]
async fn csrf_cookie_is_stable_for_a_live_session() {
    let url = spawn_gateway().await;
    let client = client();

    let first = prime_csrf(&client, &url).await;
    let second = prime_csrf(&client, &url).await;
    // Same session, same token: issue is get-or-create
    assert_eq!(first, second);
}
