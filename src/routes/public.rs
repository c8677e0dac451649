use crate::handlers;
use axum::{Router, routing::get};

use crate::AppState;

/// Public Router Module
///
/// Endpoints that are **unauthenticated** and accessible to any client. Every
/// path registered here must appear on `policy::PUBLIC_PATHS`, otherwise the
/// gate middleware will redirect callers before the route is ever matched —
/// the startup `policy::validate()` check exists to catch exactly that drift.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /api/health
        // Unauthenticated liveness probe for monitoring and load balancer checks.
        .route("/api/health", get(|| async { "ok" }))
        // GET /login
        // Hosts the external identity provider's sign-in widget. Receives the
        // `error` and `callbackUrl` query parameters attached by the gate on
        // denial; issuing the credential itself happens off-service.
        .route("/login", get(handlers::login_page))
}
