use uyum_portal::policy::{
    self, DEFAULT_LANDING, LOGIN_PATH, PROTECTED_PATHS, PUBLIC_PATHS, Role, RouteClass, classify,
    has_access,
};

// --- Route Classification ---

#[test]
fn test_every_public_path_classifies_public() {
    for path in PUBLIC_PATHS {
        assert_eq!(
            classify(path),
            RouteClass::Public,
            "expected '{}' to be public",
            path
        );
    }
}

#[test]
fn test_every_protected_prefix_classifies_protected() {
    for path in PROTECTED_PATHS {
        assert_eq!(
            classify(path),
            RouteClass::Protected,
            "expected '{}' to be protected",
            path
        );
    }
}

#[test]
fn test_root_matches_exactly_not_as_prefix() {
    assert_eq!(classify("/"), RouteClass::Public);
    // "/" must not turn every path public via prefix matching.
    assert_eq!(classify("/unknown-page"), RouteClass::Unmatched);
    assert_eq!(classify("/panel"), RouteClass::Protected);
}

#[test]
fn test_non_root_public_paths_match_by_prefix() {
    assert_eq!(classify("/login"), RouteClass::Public);
    assert_eq!(classify("/hakkinda/ekip"), RouteClass::Public);
}

#[test]
fn test_protected_subpaths_match_by_prefix() {
    assert_eq!(classify("/dokuman-arsiv/2024/rapor"), RouteClass::Protected);
    assert_eq!(classify("/api/panel/stats"), RouteClass::Protected);
}

#[test]
fn test_unlisted_paths_are_unmatched() {
    assert_eq!(classify("/unknown-page"), RouteClass::Unmatched);
    assert_eq!(classify("/favicon.ico"), RouteClass::Unmatched);
}

// --- Role Parsing ---

#[test]
fn test_role_parse_known_tags() {
    assert_eq!(Role::parse("advisor"), Role::Advisor);
    assert_eq!(Role::parse("manager"), Role::Manager);
    assert_eq!(Role::parse("representative"), Role::Representative);
}

#[test]
fn test_role_parse_unrecognized_tag_is_unknown_not_error() {
    assert_eq!(Role::parse("superadmin"), Role::Unknown);
    assert_eq!(Role::parse(""), Role::Unknown);
    assert_eq!(Role::parse("ADVISOR"), Role::Unknown);
}

#[test]
fn test_role_deserializes_unknown_tag_via_serde_other() {
    let role: Role = serde_json::from_str(r#""manager""#).unwrap();
    assert_eq!(role, Role::Manager);
    let role: Role = serde_json::from_str(r#""intern""#).unwrap();
    assert_eq!(role, Role::Unknown);
}

// --- Navigation Guard ---

#[test]
fn test_advisor_reaches_settings_manager_does_not() {
    assert!(has_access(Role::Advisor, "/ayarlar"));
    assert!(!has_access(Role::Manager, "/ayarlar"));
}

#[test]
fn test_representative_denied_inventory_and_data_map() {
    assert!(!has_access(Role::Representative, "/envanter"));
    assert!(!has_access(Role::Representative, "/veri-haritasi"));
    assert!(has_access(Role::Representative, "/panel"));
    assert!(has_access(Role::Representative, "/dokuman-arsiv/ek"));
}

#[test]
fn test_unknown_role_denied_everywhere() {
    for path in PROTECTED_PATHS {
        assert!(
            !has_access(Role::Unknown, path),
            "unknown role must not reach '{}'",
            path
        );
    }
}

#[test]
fn test_wider_roles_keep_every_narrower_grant() {
    // The table is monotonic: a role with a superset prefix list never loses
    // access the narrower role already had.
    for prefix in policy::allowed_prefixes(Role::Representative) {
        assert!(has_access(Role::Manager, prefix));
        assert!(has_access(Role::Advisor, prefix));
    }
    for prefix in policy::allowed_prefixes(Role::Manager) {
        assert!(has_access(Role::Advisor, prefix));
    }
}

#[test]
fn test_every_role_prefix_is_navigable_for_that_role() {
    for role in [Role::Advisor, Role::Manager, Role::Representative] {
        for prefix in policy::allowed_prefixes(role) {
            assert!(has_access(role, prefix));
        }
    }
}

// --- Startup Validation ---

#[test]
fn test_shipped_tables_validate() {
    assert!(policy::validate().is_ok());
}

#[test]
fn test_login_and_landing_are_consistent_with_tables() {
    assert_eq!(classify(LOGIN_PATH), RouteClass::Public);
    assert_eq!(classify(DEFAULT_LANDING), RouteClass::Protected);
}
