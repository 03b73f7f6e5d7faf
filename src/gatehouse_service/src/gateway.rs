use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header, request},
    middleware,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use gatehouse_adapters::{
    config::{StatefulDomains, constants::CSRF_HEADER_NAME},
    http::{
        csrf::require_csrf_token,
        routes::{csrf_cookie, current_user, login, logout, probe_login},
    },
};
use gatehouse_core::{CsrfValidator, SessionStore, UserStore};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The session auth gateway: four endpoints plus the CSRF-cookie primer,
/// everything else delegated to the store and validator collaborators.
pub struct SessionGateway {
    router: Router,
}

impl SessionGateway {
    /// Wire the routes to their collaborators.
    ///
    /// # Note on Architecture
    /// Stores implement Clone via internal Arc<RwLock> for thread-safe
    /// sharing. Each route is given only the state it needs, and the CSRF
    /// middleware wraps the whole router (safe methods pass through).
    pub fn new<U, S, C>(user_store: U, session_store: S, csrf_validator: C) -> Self
    where
        U: UserStore + Clone + 'static,
        S: SessionStore + Clone + 'static,
        C: CsrfValidator + Clone + 'static,
    {
        let router = Router::new()
            // Probe is stateless; login needs all three collaborators
            .route("/login", get(probe_login).post(login::<U, S, C>))
            .with_state((
                user_store.clone(),
                session_store.clone(),
                csrf_validator.clone(),
            ))
            // Logout needs the session store and the CSRF validator
            .route("/logout", post(logout::<S, C>))
            .with_state((session_store.clone(), csrf_validator.clone()))
            // Current user resolves session -> principal -> profile
            .route("/user", get(current_user::<S, U>))
            .with_state((session_store.clone(), user_store))
            // CSRF primer starts/reuses a session and hands out a token
            .route("/csrf-cookie", get(csrf_cookie::<S, C>))
            .with_state((session_store, csrf_validator.clone()))
            .layer(middleware::from_fn_with_state(
                csrf_validator,
                require_csrf_token::<C>,
            ));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the gateway into a router that can be mounted on another
    /// application.
    ///
    /// # Arguments
    /// * `stateful_domains` - Optional list of origins allowed to use
    ///   cookie-based authentication (enables CORS with credentials)
    pub fn as_nested_router(mut self, stateful_domains: Option<StatefulDomains>) -> Router {
        if let Some(stateful_domains) = stateful_domains {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([
                    header::CONTENT_TYPE,
                    HeaderName::from_static(CSRF_HEADER_NAME),
                ])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        stateful_domains.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the gateway as a standalone server.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        stateful_domains: Option<StatefulDomains>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(stateful_domains);

        tracing::info!("Session auth gateway listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
