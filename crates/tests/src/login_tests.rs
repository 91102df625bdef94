use client::access::{self, NavbarVariant};
use client::store::{SessionStore, ROLE_KEY, TOKEN_KEY, USERNAME_KEY, USER_ID_KEY};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role};

use crate::common::{spawn_stub, OPAQUE_USER};

#[tokio::test]
async fn admin_login_lands_on_admin_welcome() {
    let stub = spawn_stub().await;
    let (api, store) = stub.client();

    let session = api.sign_in("admin", "admin-pass").await.unwrap();
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.landing_path(), "/admin-welcome");
    assert_eq!(access::navbar_for("/admin-welcome", session.role), Some(NavbarVariant::Admin));

    assert!(store.get(TOKEN_KEY).is_some());
    assert_eq!(store.get(ROLE_KEY).as_deref(), Some("admin"));
    assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("id-admin"));
    assert_eq!(store.get(USERNAME_KEY).as_deref(), Some("admin"));
}

#[tokio::test]
async fn institution_login_lands_on_institution_welcome() {
    let stub = spawn_stub().await;
    let (api, store) = stub.client();

    // The stub spells the role "Institution"; the stored value is normalized.
    let session = api.sign_in("inst", "inst-pass").await.unwrap();
    assert_eq!(session.role, Role::Institution);
    assert_eq!(session.landing_path(), "/institution-welcome");
    assert_eq!(store.get(ROLE_KEY).as_deref(), Some("institution"));
}

#[tokio::test]
async fn investigator_lands_on_own_welcome_with_public_navbar() {
    let stub = spawn_stub().await;
    let (api, _store) = stub.client();

    let session = api.sign_in("field", "field-pass").await.unwrap();
    assert_eq!(session.role, Role::Investigator);
    assert_eq!(session.landing_path(), "/investigator-welcome");
    assert_eq!(
        access::evaluate(session.landing_path(), Some(&session)),
        access::GuardDecision::Allow
    );
    assert_eq!(access::navbar_for(session.landing_path(), session.role), Some(NavbarVariant::Public));
}

#[tokio::test]
async fn unreadable_login_token_is_not_stored() {
    let stub = spawn_stub().await;
    let (api, store) = stub.client();

    let (username, password) = OPAQUE_USER;
    let err = api.sign_in(username, password).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);
    assert!(store.is_empty());
    assert_eq!(api.current_session(), None);
    assert_eq!(access::evaluate("/dashboard", api.current_session().as_ref()), access::GuardDecision::RedirectToLogin);
}

#[tokio::test]
async fn login_sends_credentials_without_auth_header() {
    let stub = spawn_stub().await;
    let (api, _store) = stub.client();

    api.sign_in("  admin ", "admin-pass").await.unwrap();
    let sent = stub.last("POST", "/login").unwrap();
    assert_eq!(sent.body["username"], "admin");
    assert_eq!(sent.body["password"], "admin-pass");
    assert_eq!(sent.bearer, None);
}

#[tokio::test]
async fn bad_credentials_surface_server_detail() {
    let stub = spawn_stub().await;
    let (api, store) = stub.client();

    let err = api.sign_in("admin", "wrong").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Incorrect username or password");
    assert!(store.is_empty());
}

#[tokio::test]
async fn blank_fields_never_reach_the_server() {
    let stub = spawn_stub().await;
    let (api, _store) = stub.client();

    let err = api.sign_in("", "").await.unwrap_err();
    assert!(err.field_errors.contains_key("username"));
    assert!(err.field_errors.contains_key("password"));
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn sign_out_then_restore_finds_nothing() {
    let stub = spawn_stub().await;
    let (api, store) = stub.client();

    api.sign_in("inst", "inst-pass").await.unwrap();
    assert_eq!(api.current_session().map(|s| s.role), Some(Role::Institution));

    api.sign_out();
    assert!(store.is_empty());
    assert_eq!(api.current_session(), None);
}
