use async_trait::async_trait;
use axum::http::{HeaderMap, HeaderValue, header};
use uuid::Uuid;
use uyum_portal::{
    gate::{AuthDecision, decide, extract_credential},
    policy::{PROTECTED_PATHS, PUBLIC_PATHS, Role},
    verify::{Identity, TokenVerifier, VerifyError},
};

// --- Mock Verifiers ---

/// Verifier returning a fixed outcome, so the decision logic can be exercised
/// without any cryptography.
struct StaticVerifier(Result<Identity, VerifyError>);

#[async_trait]
impl TokenVerifier for StaticVerifier {
    async fn verify(&self, _credential: &str) -> Result<Identity, VerifyError> {
        self.0.clone()
    }
}

fn accepting() -> StaticVerifier {
    StaticVerifier(Ok(Identity {
        subject: Uuid::from_u128(7),
        role: Role::Manager,
        companies: vec![],
    }))
}

fn rejecting() -> StaticVerifier {
    StaticVerifier(Err(VerifyError::Invalid))
}

fn unreachable_provider() -> StaticVerifier {
    StaticVerifier(Err(VerifyError::Unavailable))
}

// --- Decision Engine ---

#[tokio::test]
async fn test_public_paths_continue_regardless_of_credential() {
    for path in PUBLIC_PATHS {
        // No credential at all.
        assert_eq!(decide(path, None, &rejecting()).await, AuthDecision::Continue);
        // A credential the verifier would reject.
        assert_eq!(
            decide(path, Some("garbage"), &rejecting()).await,
            AuthDecision::Continue
        );
    }
}

#[tokio::test]
async fn test_protected_paths_continue_with_valid_credential() {
    for path in PROTECTED_PATHS {
        assert_eq!(
            decide(path, Some("token"), &accepting()).await,
            AuthDecision::Continue
        );
    }
}

#[tokio::test]
async fn test_protected_path_without_credential_redirects_to_login() {
    let decision = decide("/dokuman-arsiv", None, &accepting()).await;
    assert_eq!(
        decision,
        AuthDecision::RedirectToLogin {
            callback_url: "/dokuman-arsiv".to_string()
        }
    );
}

#[tokio::test]
async fn test_callback_carries_original_url_including_query() {
    let decision = decide("/dokuman-arsiv?yil=2024", None, &accepting()).await;
    assert_eq!(
        decision,
        AuthDecision::RedirectToLogin {
            callback_url: "/dokuman-arsiv?yil=2024".to_string()
        }
    );
}

#[tokio::test]
async fn test_invalid_credential_redirects_to_login() {
    let decision = decide("/panel", Some("expired-token"), &rejecting()).await;
    assert!(matches!(decision, AuthDecision::RedirectToLogin { .. }));
}

#[tokio::test]
async fn test_verifier_outage_fails_closed() {
    // An unreachable verification service must produce the exact same
    // decision as an invalid credential, never access.
    let invalid = decide("/panel", Some("t"), &rejecting()).await;
    let outage = decide("/panel", Some("t"), &unreachable_provider()).await;
    assert_eq!(invalid, outage);
    assert!(matches!(outage, AuthDecision::RedirectToLogin { .. }));
}

#[tokio::test]
async fn test_unmatched_path_redirects_to_default_with_valid_credential() {
    let decision = decide("/unknown-page", Some("valid-manager-token"), &accepting()).await;
    assert_eq!(decision, AuthDecision::RedirectToDefault);
}

#[tokio::test]
async fn test_unmatched_path_redirects_to_default_without_credential() {
    // The catch-all must not behave differently for anonymous callers, or it
    // would leak which paths exist behind the gate.
    let decision = decide("/unknown-page", None, &rejecting()).await;
    assert_eq!(decision, AuthDecision::RedirectToDefault);
}

// --- Redirect Rendering ---

#[test]
fn test_login_redirect_location_format() {
    let decision = AuthDecision::RedirectToLogin {
        callback_url: "/dokuman-arsiv".to_string(),
    };
    assert_eq!(
        decision.redirect_location().unwrap(),
        "/login?error=invalid_token&callbackUrl=%2Fdokuman-arsiv"
    );
}

#[test]
fn test_default_redirect_carries_no_query_parameters() {
    assert_eq!(
        AuthDecision::RedirectToDefault.redirect_location().unwrap(),
        "/panel"
    );
}

#[test]
fn test_continue_renders_no_redirect() {
    assert_eq!(AuthDecision::Continue.redirect_location(), None);
}

// --- Credential Extraction ---

#[test]
fn test_credential_from_session_cookie() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("theme=dark; uyum_session=abc123; lang=tr"),
    );
    assert_eq!(extract_credential(&headers), Some("abc123".to_string()));
}

#[test]
fn test_credential_from_bearer_header() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer xyz"));
    assert_eq!(extract_credential(&headers), Some("xyz".to_string()));
}

#[test]
fn test_cookie_takes_precedence_over_header() {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("uyum_session=cookie-token"));
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Bearer header-token"),
    );
    assert_eq!(extract_credential(&headers), Some("cookie-token".to_string()));
}

#[test]
fn test_no_credential_sources_yields_none() {
    let headers = HeaderMap::new();
    assert_eq!(extract_credential(&headers), None);
}

#[test]
fn test_empty_cookie_value_is_ignored() {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("uyum_session="));
    assert_eq!(extract_credential(&headers), None);
}
