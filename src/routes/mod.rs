/// Router Module Index
///
/// Organizes the routing surface into the two trust domains the gate
/// middleware distinguishes. The split is structural, not enforcing: the
/// authoritative allow/redirect decision is taken by `gate::gate_middleware`
/// before any route matches, from the same policy table both modules map onto.

/// Routes on the public allowlist (anonymous, no credential required).
pub mod public;

/// Routes under protected prefixes. Reached only after the gate middleware
/// produced `AuthDecision::Continue`; their handlers resolve the caller's
/// identity via the `AuthUser` extractor to scope data by role and company.
pub mod protected;
