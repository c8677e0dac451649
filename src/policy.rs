use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// Access Policy Module
///
/// The single source of truth for route classification and role navigation.
/// Both the server-side request gate (see `gate`) and the client-facing
/// navigation feed (`GET /api/me`) read from the tables defined here, so the
/// two trust domains can never drift apart.
///
/// All tables are fixed at compile time. `validate()` is run once at startup
/// and rejects any table where the public and protected lists overlap, so a
/// disagreement between the lists can never materialize at request time.

/// Paths reachable without a verified session.
/// The root path matches exactly; every other entry matches by prefix.
pub const PUBLIC_PATHS: &[&str] = &[
    "/",
    "/login",
    "/hakkinda",
    "/iletisim",
    "/api/health",
    "/assets",
    "/swagger-ui",
    "/api-docs",
];

/// Prefixes covering every authenticated feature area (pages and their APIs).
pub const PROTECTED_PATHS: &[&str] = &[
    "/panel",
    "/dokuman-arsiv",
    "/veri-haritasi",
    "/aksiyonlar",
    "/envanter",
    "/egitimler",
    "/ayarlar",
    "/api/me",
    "/api/panel",
    "/api/aksiyonlar",
];

/// The primary authenticated landing page. Unmatched paths redirect here.
pub const DEFAULT_LANDING: &str = "/panel";

/// The identity provider's sign-in page. Denied requests redirect here.
pub const LOGIN_PATH: &str = "/login";

/// Role
///
/// Closed set of tenant roles carried in the JWT role claim. The role
/// determines both the navigable surface area (via `allowed_prefixes`) and the
/// visible dashboard shape (via `stats::project`).
///
/// An unrecognized claim value deserializes to `Unknown` rather than failing,
/// so fail-closed handling is an explicit, testable branch instead of a parse
/// error surfacing somewhere upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    /// Compliance advisor: full access, including tenant settings.
    Advisor,
    /// Company manager: full access except tenant settings.
    Manager,
    /// Company representative: day-to-day subset, no asset inventory.
    Representative,
    /// Any role tag this build does not recognize. Denied everywhere.
    #[serde(other)]
    #[default]
    Unknown,
}

impl Role {
    /// Parses a raw claim string. Never fails; unrecognized tags map to `Unknown`.
    pub fn parse(tag: &str) -> Role {
        match tag {
            "advisor" => Role::Advisor,
            "manager" => Role::Manager,
            "representative" => Role::Representative,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Advisor => "advisor",
            Role::Manager => "manager",
            Role::Representative => "representative",
            Role::Unknown => "unknown",
        }
    }
}

/// RouteClass
///
/// The classification of an inbound request path against the fixed allowlists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    Protected,
    Unmatched,
}

/// classify
///
/// Categorizes a normalized request path (no query string).
/// Protected membership is checked first: if a path ever appears on both lists
/// the protected list wins, and `validate()` guarantees at startup that such
/// an overlap never ships.
pub fn classify(path: &str) -> RouteClass {
    if PROTECTED_PATHS.iter().any(|p| path.starts_with(p)) {
        return RouteClass::Protected;
    }
    if PUBLIC_PATHS
        .iter()
        .any(|p| if *p == "/" { path == "/" } else { path.starts_with(p) })
    {
        return RouteClass::Public;
    }
    RouteClass::Unmatched
}

/// allowed_prefixes
///
/// The fixed set of protected prefixes a role may navigate to. Every path
/// reachable through the UI for a role appears in that role's set.
/// `Unknown` maps to the empty set: deny everything.
pub fn allowed_prefixes(role: Role) -> &'static [&'static str] {
    match role {
        Role::Advisor => &[
            "/panel",
            "/dokuman-arsiv",
            "/veri-haritasi",
            "/aksiyonlar",
            "/envanter",
            "/egitimler",
            "/ayarlar",
        ],
        Role::Manager => &[
            "/panel",
            "/dokuman-arsiv",
            "/veri-haritasi",
            "/aksiyonlar",
            "/envanter",
            "/egitimler",
        ],
        Role::Representative => &["/panel", "/dokuman-arsiv", "/aksiyonlar", "/egitimler"],
        Role::Unknown => &[],
    }
}

/// has_access
///
/// Navigation guard lookup: true iff `path` starts with any prefix in the
/// role's set. Consulted by the UI guard feed; it is advisory only — data is
/// additionally filtered role-side by the aggregator, so this check is never
/// the sole gate in front of tenant data.
pub fn has_access(role: Role, path: &str) -> bool {
    allowed_prefixes(role).iter().any(|p| path.starts_with(p))
}

/// validate
///
/// Startup-time consistency check over the compile-time tables. Rejects any
/// configuration where a public entry would be shadowed by a protected prefix:
/// that overlap would silently turn a public page into a login wall (or worse,
/// the other way around if precedence ever flipped).
pub fn validate() -> Result<(), String> {
    validate_tables(PUBLIC_PATHS, PROTECTED_PATHS)
}

pub(crate) fn validate_tables(public: &[&str], protected: &[&str]) -> Result<(), String> {
    for pub_path in public {
        if let Some(shadow) = protected.iter().find(|prot| pub_path.starts_with(**prot)) {
            return Err(format!(
                "public path '{}' is shadowed by protected prefix '{}'",
                pub_path, shadow
            ));
        }
    }
    // Every role prefix must be covered by the protected list, otherwise the
    // gate would never ask for a credential on a page the UI links to.
    for role in [Role::Advisor, Role::Manager, Role::Representative] {
        for prefix in allowed_prefixes(role) {
            if !protected.iter().any(|prot| prefix.starts_with(prot)) {
                return Err(format!(
                    "role '{}' navigates to '{}' which is not on the protected list",
                    role.as_str(),
                    prefix
                ));
            }
        }
    }
    Ok(())
}
