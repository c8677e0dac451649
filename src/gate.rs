use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    AppState,
    policy::{DEFAULT_LANDING, LOGIN_PATH, RouteClass, classify},
    verify::{TokenVerifier, VerifyError},
};

/// Name of the session cookie set by the identity provider at sign-in.
pub const SESSION_COOKIE: &str = "uyum_session";

/// The single reason code surfaced on denial. Missing, malformed, expired and
/// unverifiable credentials all map here so the redirect never acts as an
/// oracle for what exactly went wrong.
pub const LOGIN_ERROR_CODE: &str = "invalid_token";

/// AuthDecision
///
/// The pure outcome of gating one request. Deciding and redirecting are kept
/// separate: this value carries everything needed to act, and only the
/// middleware (or the client-side guard) turns it into a side effect. That
/// split is what makes the decision logic testable without an HTTP harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    /// Let the request through to routing.
    Continue,
    /// Send the caller to the sign-in page, remembering where they wanted
    /// to go so the identity provider can return them there afterwards.
    RedirectToLogin { callback_url: String },
    /// Catch-all for paths outside both allowlists: bounce to the landing
    /// page. Not a security decision, and deliberately independent of the
    /// credential so it leaks nothing about which protected paths exist.
    RedirectToDefault,
}

impl AuthDecision {
    /// Renders the redirect target, or `None` when the request may continue.
    ///
    /// Denials become `/login?error=invalid_token&callbackUrl=<original>`;
    /// the default-landing redirect carries no query parameters at all.
    pub fn redirect_location(&self) -> Option<String> {
        match self {
            AuthDecision::Continue => None,
            AuthDecision::RedirectToLogin { callback_url } => Some(format!(
                "{}?error={}&callbackUrl={}",
                LOGIN_PATH,
                LOGIN_ERROR_CODE,
                urlencoding::encode(callback_url)
            )),
            AuthDecision::RedirectToDefault => Some(DEFAULT_LANDING.to_string()),
        }
    }
}

/// decide
///
/// The Authorization Decision Engine. A pure function of the request URL, the
/// presented credential and the (injected) verifier — no ambient state, so
/// concurrent requests are fully independent.
///
/// 1. Classify the path (query string stripped for matching).
/// 2. Public: continue, regardless of credential validity.
/// 3. Protected: exactly one verifier call. Absent credential, failed
///    validation and verifier I/O failure are treated identically — fail
///    closed into a login redirect carrying the original URL as callback.
/// 4. Unmatched: redirect to the default landing page whatever the
///    credential state.
pub async fn decide(
    url: &str,
    credential: Option<&str>,
    verifier: &dyn TokenVerifier,
) -> AuthDecision {
    let path = url.split('?').next().unwrap_or(url);

    match classify(path) {
        RouteClass::Public => AuthDecision::Continue,
        RouteClass::Unmatched => AuthDecision::RedirectToDefault,
        RouteClass::Protected => {
            let Some(credential) = credential else {
                return AuthDecision::RedirectToLogin {
                    callback_url: url.to_string(),
                };
            };
            match verifier.verify(credential).await {
                Ok(_) => AuthDecision::Continue,
                Err(VerifyError::Missing | VerifyError::Invalid | VerifyError::Unavailable) => {
                    AuthDecision::RedirectToLogin {
                        callback_url: url.to_string(),
                    }
                }
            }
        }
    }
}

/// extract_credential
///
/// Pulls the opaque bearer credential off a request: the session cookie takes
/// precedence (the browser dashboard uses it), with an `Authorization: Bearer`
/// header accepted as a fallback for API clients.
pub fn extract_credential(headers: &HeaderMap) -> Option<String> {
    if let Some(cookie_header) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        for pair in cookie_header.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                if name == SESSION_COOKIE && !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.to_string())
}

/// gate_middleware
///
/// The authoritative, server-side evaluation of `decide` — applied to every
/// inbound request before routing, so no protected handler can be reached
/// without passing it. Handlers downstream trust having been gated here and
/// perform no authorization of their own (they do still scope data by role).
pub async fn gate_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let original_url = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let credential = extract_credential(request.headers());

    let decision = decide(&original_url, credential.as_deref(), state.verifier.as_ref()).await;

    match decision.redirect_location() {
        None => next.run(request).await,
        Some(location) => {
            tracing::info!(url = %original_url, target = %location, "request gated, redirecting");
            Redirect::temporary(&location).into_response()
        }
    }
}
