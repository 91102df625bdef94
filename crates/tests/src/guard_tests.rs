use std::sync::Arc;

use client::access::{evaluate, navbar_for, GuardDecision, NavbarVariant};
use client::store::{SessionStore, ROLE_KEY, TOKEN_KEY};
use client::{ApiClient, MemoryStore, Session};
use pretty_assertions::assert_eq;
use shared_types::Role;

use crate::common::{fresh_exp, mint_token};

/// A session as the app would restore it at start-up from `jwt_token` alone.
fn restored(role_claim: &str) -> Option<Session> {
    let token = mint_token(role_claim, "7", "someone", fresh_exp());
    let store = MemoryStore::with_entries([(TOKEN_KEY, token)]);
    ApiClient::new("http://unused", Arc::new(store)).current_session()
}

#[test]
fn role_claim_picks_the_navbar() {
    let cases = [
        ("admin", NavbarVariant::Admin),
        ("ADMIN", NavbarVariant::Admin),
        ("Institution", NavbarVariant::Institution),
        ("investigator", NavbarVariant::Public),
        ("", NavbarVariant::Public),
        ("superuser", NavbarVariant::Public),
    ];
    for (claim, expected) in cases {
        let session = restored(claim).unwrap();
        assert_eq!(navbar_for("/", session.role), Some(expected), "role claim {claim:?}");
    }
}

#[test]
fn undecodable_token_gets_the_public_navbar() {
    let store = MemoryStore::with_entries([(TOKEN_KEY, "not.a-real.token")]);
    let session = Session::restore(&store, 0).unwrap();
    assert_eq!(session.role, Role::Public);
    assert_eq!(navbar_for("/statistics", session.role), Some(NavbarVariant::Public));
    assert_eq!(store.get(ROLE_KEY).as_deref(), Some(""));
}

#[test]
fn login_page_never_has_a_navbar() {
    for claim in ["admin", "institution", "investigator", ""] {
        let session = restored(claim).unwrap();
        assert_eq!(navbar_for("/login", session.role), None);
    }
}

#[test]
fn no_token_redirects_admin_pages_to_login() {
    let store = MemoryStore::new();
    let session = Session::restore(&store, 0);
    assert_eq!(session, None);
    assert_eq!(evaluate("/admin/cases", session.as_ref()), GuardDecision::RedirectToLogin);
    assert_eq!(evaluate("/admin/cases/42/edit", None), GuardDecision::RedirectToLogin);
    assert_eq!(evaluate("/", None), GuardDecision::Allow);
    assert_eq!(evaluate("/submit-report", None), GuardDecision::Allow);
}

#[test]
fn roles_are_confined_to_their_own_pages() {
    let institution = restored("institution");
    let admin = restored("admin");

    for path in ["/admin-welcome", "/admin/cases", "/admin/cases/create", "/admin-reports", "/admin/case-types"] {
        assert_eq!(evaluate(path, institution.as_ref()), GuardDecision::RedirectToLogin, "{path}");
        assert_eq!(evaluate(path, admin.as_ref()), GuardDecision::Allow, "{path}");
    }
    for path in ["/institution-welcome", "/cases", "/institution-create-report/9", "/institution-profile"] {
        assert_eq!(evaluate(path, admin.as_ref()), GuardDecision::RedirectToLogin, "{path}");
        assert_eq!(evaluate(path, institution.as_ref()), GuardDecision::Allow, "{path}");
    }
    for path in ["/dashboard", "/reports", "/cases/9"] {
        assert_eq!(evaluate(path, admin.as_ref()), GuardDecision::Allow, "{path}");
        assert_eq!(evaluate(path, institution.as_ref()), GuardDecision::Allow, "{path}");
    }
}

#[test]
fn expired_token_is_dropped_at_restore() {
    let token = mint_token("admin", "1", "admin", chrono::Utc::now().timestamp() - 60);
    let store = MemoryStore::with_entries([(TOKEN_KEY, token)]);
    let api = ApiClient::new("http://unused", Arc::new(store.clone()));
    assert_eq!(api.current_session(), None);
    assert!(store.is_empty());
}
