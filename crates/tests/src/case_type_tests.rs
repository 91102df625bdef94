use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, CaseTypeSuggestion, Language};

use crate::common::spawn_stub;

fn seed(stub: &crate::common::Stub) {
    stub.seed_case_types(vec![
        json!({ "_id": "ct-a", "name_en": "Torture", "name_ar": "تعذيب", "pending": false }),
        json!({ "_id": "ct-b", "name": "Internet shutdown", "pending": true }),
    ]);
}

#[tokio::test]
async fn approved_types_are_public() {
    let stub = spawn_stub().await;
    seed(&stub);
    let (api, _store) = stub.client();
    api.sign_in("inst", "inst-pass").await.unwrap();

    let types = api.list_case_types(false).await.unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].display_name(Language::Ar), "تعذيب");
    assert_eq!(types[0].key(), "Torture");

    // The public listing never carries the token, even when one is stored.
    let sent = stub.last("GET", "/case-types").unwrap();
    assert_eq!(sent.bearer, None);
    assert!(!sent.query.contains_key("pending_only"));
}

#[tokio::test]
async fn pending_queue_needs_a_token() {
    let stub = spawn_stub().await;
    seed(&stub);
    let (api, _store) = stub.client();

    let err = api.list_case_types(true).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);

    api.sign_in("admin", "admin-pass").await.unwrap();
    let pending = api.list_case_types(true).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].display_name(Language::En), "Internet shutdown");
    assert_eq!(stub.last("GET", "/case-types").unwrap().query["pending_only"], "true");
}

#[tokio::test]
async fn approval_decision_is_a_query_flag() {
    let stub = spawn_stub().await;
    seed(&stub);
    let (api, _store) = stub.client();
    api.sign_in("admin", "admin-pass").await.unwrap();

    api.set_case_type_approval("ct-b", false).await.unwrap();
    let sent = stub.last("PUT", "/case-types/ct-b/approval").unwrap();
    assert_eq!(sent.query["approved"], "false");
    assert!(api.list_case_types(true).await.unwrap().is_empty());

    api.set_case_type_approval("ct-b", true).await.unwrap();
    assert_eq!(stub.last("PUT", "/case-types/ct-b/approval").unwrap().query["approved"], "true");
}

#[tokio::test]
async fn short_suggestion_is_refused_locally() {
    let stub = spawn_stub().await;
    let (api, _store) = stub.client();

    let err = api.suggest_case_type(&CaseTypeSuggestion::new("  ab ")).await.unwrap_err();
    assert!(err.field_errors.contains_key("name"));
    assert!(stub.requests().is_empty());

    let created = api
        .suggest_case_type(&CaseTypeSuggestion::new("Land seizure"))
        .await
        .unwrap();
    assert_eq!(created.case_type_id.as_deref(), Some("ct-1"));
    assert_eq!(stub.last("POST", "/case-types").unwrap().query["name"], "Land seizure");
}
