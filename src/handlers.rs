use crate::{
    AppState,
    auth::AuthUser,
    models::{AksiyonRecord, FilteredStatsView, MeResponse},
    policy,
    stats,
};
use axum::{Json, extract::State, response::Html};

// --- API Handlers ---

/// get_me
///
/// [Protected Route] Returns the caller's server-verified identity together
/// with the navigation prefixes their role may use. The client-side navigation
/// guard renders its menu from this response, so the UI gate and the request
/// gate always read the same policy table — there is no client-held copy to
/// drift out of sync.
#[utoipa::path(
    get,
    path = "/api/me",
    responses((status = 200, description = "Verified identity and navigable prefixes", body = MeResponse))
)]
pub async fn get_me(AuthUser(identity): AuthUser) -> Json<MeResponse> {
    let nav = policy::allowed_prefixes(identity.role)
        .iter()
        .map(|p| p.to_string())
        .collect();
    Json(MeResponse { identity, nav })
}

/// get_panel_stats
///
/// [Protected Route] The dashboard metric feed. Fetches the raw counter set
/// for the caller's company scope and projects it through the role-scoped
/// aggregator, so a representative's response simply does not contain the
/// asset inventory card.
///
/// *Defense in depth*: the navigation guard already keeps roles off pages they
/// may not use, but the data is shaped here regardless — the guard is advisory
/// and is never the sole filter in front of tenant data.
#[utoipa::path(
    get,
    path = "/api/panel/stats",
    responses((status = 200, description = "Role-scoped dashboard view", body = FilteredStatsView))
)]
pub async fn get_panel_stats(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
) -> Json<FilteredStatsView> {
    let raw = state.repo.get_raw_stats(&identity.companies).await;
    Json(stats::project(identity.role, &raw))
}

/// get_actions
///
/// [Protected Route] Lists the remediation actions for the caller's company
/// scope. Scoping is enforced in the repository query against the verified
/// company claim, never against anything the client sent.
#[utoipa::path(
    get,
    path = "/api/aksiyonlar",
    responses((status = 200, description = "Company-scoped remediation actions", body = [AksiyonRecord]))
)]
pub async fn get_actions(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
) -> Json<Vec<AksiyonRecord>> {
    let actions = state.repo.get_actions(&identity.companies).await;
    Json(actions)
}

// --- Page Handlers ---

/// page_shell
///
/// [Protected Route] Serves the SPA shell for every protected page path
/// (`/panel`, `/dokuman-arsiv`, ...). Rendering itself is out of scope for
/// this service; by the time this handler runs the request has already passed
/// the gate middleware, so the shell performs no checks of its own.
pub async fn page_shell() -> Html<&'static str> {
    Html(r#"<!doctype html><html lang="tr"><head><meta charset="utf-8"><title>Uyum Portal</title></head><body><div id="root"></div><script src="/assets/app.js"></script></body></html>"#)
}

/// login_page
///
/// [Public Route] The sign-in entry point. The credential-issuing flow itself
/// belongs to the external identity provider; this page only hosts its widget
/// and echoes the `error` / `callbackUrl` query parameters the gate attaches.
pub async fn login_page() -> Html<&'static str> {
    Html(r#"<!doctype html><html lang="tr"><head><meta charset="utf-8"><title>Giriş — Uyum Portal</title></head><body><div id="login-root"></div><script src="/assets/login.js"></script></body></html>"#)
}
