use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Protected Router Module
///
/// The API surface behind the gate. All three endpoints live under protected
/// prefixes (`/api/me`, `/api/panel`, `/api/aksiyonlar`), so an unverified
/// request is redirected by the middleware before routing; the handlers then
/// use the `AuthUser` extractor for identity, and the repository/aggregator
/// for role- and company-scoped shaping of what they return.
pub fn protected_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /api/me
        // The client navigation guard's feed: verified identity plus the
        // role's navigable prefixes from the shared policy table.
        .route("/api/me", get(handlers::get_me))
        // GET /api/panel/stats
        // Role-scoped dashboard counters. A representative's response omits
        // the asset inventory card entirely and drops to a 5-column layout.
        .route("/api/panel/stats", get(handlers::get_panel_stats))
        // GET /api/aksiyonlar
        // Remediation actions, scoped to the verified company claim.
        .route("/api/aksiyonlar", get(handlers::get_actions))
}
