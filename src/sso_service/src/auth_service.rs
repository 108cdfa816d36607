use std::time::Duration;

use axum::{Router, routing::post};
use sso_axum::routes::{is_admin, login, register};
use sso_core::Authenticator;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// HTTP front for an [`Authenticator`].
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService serving `auth`.
    ///
    /// # Arguments
    /// * `auth` - The engine behind the routes (must be Clone)
    /// * `request_timeout` - Deadline per request; on expiry the in-flight
    ///   engine future is dropped and the caller receives 408
    pub fn new<S>(auth: S, request_timeout: Duration) -> Self
    where
        S: Authenticator,
    {
        let router = Router::new()
            .route("/login", post(login::<S>))
            .route("/register", post(register::<S>))
            .route("/is-admin", post(is_admin::<S>))
            .with_state(auth)
            .layer(TimeoutLayer::new(request_timeout));

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

    /// Convert the AuthService into a router that can be nested into
    /// another application
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
