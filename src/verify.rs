use async_trait::async_trait;
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::policy::Role;

/// Claims
///
/// The payload structure expected inside the identity provider's JWT.
/// Signed by the shared secret and validated on every protected request.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (sub): the UUID of the session's user.
    pub sub: Uuid,
    /// The tenant role claim, e.g. "advisor". Unrecognized tags become `Role::Unknown`.
    pub role: Role,
    /// Company UUIDs the subject may see records for. Resolved by the identity
    /// provider at sign-in; this service only scopes queries by it.
    #[serde(default)]
    pub companies: Vec<Uuid>,
    /// Expiration Time (exp): timestamp after which the JWT must not be accepted.
    pub exp: usize,
    /// Issued At (iat): timestamp when the JWT was issued.
    pub iat: usize,
}

/// Identity
///
/// The resolved, trusted identity of an authenticated request. Produced only
/// by a `TokenVerifier`; rendering and handler code consume it read-only.
/// Any role the client believes it has is irrelevant — this value wins.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Identity {
    pub subject: Uuid,
    pub role: Role,
    pub companies: Vec<Uuid>,
}

/// VerifyError
///
/// Why verification did not produce an identity. All three variants collapse
/// to the same redirect decision: callers are never told whether a credential
/// was absent, malformed, or simply unverifiable, to avoid oracle leaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    /// No credential was presented with the request.
    Missing,
    /// The credential failed validation (bad signature, expired, malformed).
    Invalid,
    /// The verifier itself could not complete (I/O failure). Fails closed.
    Unavailable,
}

/// TokenVerifier Trait
///
/// The boundary to the external identity provider. The engine performs at most
/// one `verify` call per request and treats every error identically, so the
/// cryptographic (or network) mechanics behind this trait never shape the
/// decision logic. `Send + Sync + async_trait` make `Arc<dyn TokenVerifier>`
/// shareable across Axum's task boundaries.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> Result<Identity, VerifyError>;
}

/// The concrete type used to share the verifier across the application state.
pub type VerifierState = std::sync::Arc<dyn TokenVerifier>;

/// JwtVerifier
///
/// Production implementation: decodes and validates an HS256-signed JWT
/// against the shared secret, with expiry checking always active.
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtVerifier {
    async fn verify(&self, credential: &str) -> Result<Identity, VerifyError> {
        let token_data = decode::<Claims>(credential, &self.decoding_key, &self.validation)
            .map_err(|e| {
                // Expired, bad signature, malformed: the caller never learns which.
                tracing::debug!("token rejected: {:?}", e.kind());
                VerifyError::Invalid
            })?;

        Ok(Identity {
            subject: token_data.claims.sub,
            role: token_data.claims.role,
            companies: token_data.claims.companies,
        })
    }
}
