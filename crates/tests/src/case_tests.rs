use client::access::{evaluate, GuardDecision};
use client::store::SessionStore;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AppErrorKind, CaseForm, CaseListFilter};

use crate::common::{sample_case, spawn_stub};

#[tokio::test]
async fn list_cases_sends_only_filled_filters() {
    let stub = spawn_stub().await;
    stub.seed_cases(vec![sample_case("1", "new"), sample_case("2", "resolved")]);
    let (api, _store) = stub.client();
    api.sign_in("admin", "admin-pass").await.unwrap();

    let filter = CaseListFilter {
        status: "resolved".into(),
        region: "  ".into(),
        violation_type: String::new(),
    };
    let cases = api.list_cases(&filter).await.unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].id, "2");
    assert_eq!(cases[0].display_id(), "HRM-2");

    let sent = stub.last("GET", "/cases/").unwrap();
    assert_eq!(sent.query.get("status").map(String::as_str), Some("resolved"));
    assert!(!sent.query.contains_key("region"));
    assert!(!sent.query.contains_key("violation_type"));
    assert!(sent.bearer.is_some());
}

#[tokio::test]
async fn unauthorized_case_list_clears_session_and_guards_redirect() {
    let stub = spawn_stub().await;
    stub.seed_cases(vec![sample_case("1", "new")]);
    let (api, store) = stub.client();
    api.sign_in("admin", "admin-pass").await.unwrap();
    assert_eq!(
        evaluate("/admin/cases", api.current_session().as_ref()),
        GuardDecision::Allow
    );

    stub.reject_tokens(true);
    let err = api.list_cases(&CaseListFilter::default()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(err.is_unauthorized());

    assert!(store.is_empty());
    assert_eq!(store.get("jwt_token"), None);
    let session = api.current_session();
    assert_eq!(session, None);
    assert_eq!(evaluate("/admin/cases", session.as_ref()), GuardDecision::RedirectToLogin);
}

#[tokio::test]
async fn missing_case_is_not_found() {
    let stub = spawn_stub().await;
    let (api, _store) = stub.client();
    api.sign_in("inst", "inst-pass").await.unwrap();

    let err = api.get_case("nope").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.friendly_message(), "Case not found");
}

#[tokio::test]
async fn unedited_update_round_trips_the_record() {
    let stub = spawn_stub().await;
    let original = sample_case("665f", "under_investigation");
    stub.seed_cases(vec![original.clone()]);
    let (api, _store) = stub.client();
    api.sign_in("admin", "admin-pass").await.unwrap();

    let fetched = api.get_case("665f").await.unwrap();
    let payload = CaseForm::from_case(&fetched).to_update(&fetched).unwrap();
    api.update_case(&fetched.id, &payload).await.unwrap();

    let sent = stub.last("PATCH", "/cases/665f").unwrap().body;
    let mut expected = original;
    if let Value::Object(map) = &mut expected {
        for key in ["_id", "case_id", "created_at", "updated_at"] {
            map.remove(key);
        }
    }
    assert_eq!(sent, expected);
}

#[tokio::test]
async fn edited_bilingual_fields_are_sent_exactly() {
    let stub = spawn_stub().await;
    stub.seed_cases(vec![sample_case("665f", "new")]);
    let (api, _store) = stub.client();
    api.sign_in("admin", "admin-pass").await.unwrap();

    let fetched = api.get_case("665f").await.unwrap();
    let mut form = CaseForm::from_case(&fetched);
    form.title_en = "Detention of three journalists".into();
    form.title_ar = "احتجاز ثلاثة صحفيين".into();
    form.region_ar = "ريف حلب".into();
    form.priority = "medium".into();
    let payload = form.to_update(&fetched).unwrap();
    api.update_case(&fetched.id, &payload).await.unwrap();

    let sent = stub.last("PATCH", "/cases/665f").unwrap().body;
    assert_eq!(
        sent["title"],
        json!({ "en": "Detention of three journalists", "ar": "احتجاز ثلاثة صحفيين" })
    );
    assert_eq!(sent["location"]["region"], json!({ "en": "Aleppo", "ar": "ريف حلب" }));
    assert_eq!(sent["priority"], "medium");
    assert_eq!(sent["description"]["en"], "Three journalists held without charge.");
    assert_eq!(sent["perpetrators"], json!([{ "name": "Unit 7", "type": "military" }]));
    assert!(sent.get("updated_at").is_none());
}

#[tokio::test]
async fn invalid_edit_is_blocked_before_sending() {
    let stub = spawn_stub().await;
    stub.seed_cases(vec![sample_case("665f", "new")]);
    let (api, _store) = stub.client();
    api.sign_in("admin", "admin-pass").await.unwrap();

    let fetched = api.get_case("665f").await.unwrap();
    let mut form = CaseForm::from_case(&fetched);
    form.latitude = "north".into();
    let err = form.to_update(&fetched).unwrap_err();
    assert!(err.field_errors.contains_key("latitude"));
    assert!(stub.last("PATCH", "/cases/665f").is_none());
}

#[tokio::test]
async fn create_case_stamps_report_date() {
    let stub = spawn_stub().await;
    let (api, _store) = stub.client();
    api.sign_in("admin", "admin-pass").await.unwrap();

    let mut form = CaseForm::new_case();
    form.title_en = "Forced displacement".into();
    form.latitude = "33.5".into();
    form.longitude = "36.3".into();
    form.violation_types = "Displacement | تهجير".into();
    let payload = form.to_create("2024-06-01T12:00:00Z").unwrap();
    let created = api.create_case(&payload).await.unwrap();
    assert_eq!(created.id.as_deref(), Some("c-1"));

    let sent = stub.last("POST", "/cases/").unwrap().body;
    assert_eq!(sent["status"], "new");
    assert_eq!(sent["date_reported"], "2024-06-01T12:00:00Z");
    assert_eq!(sent["date_occurred"], "2024-06-01T12:00:00Z");
    assert_eq!(sent["location"]["coordinates"], json!({ "type": "Point", "coordinates": [36.3, 33.5] }));
    assert_eq!(sent["violation_types"], json!([{ "name_en": "Displacement", "name_ar": "تهجير" }]));
}

#[tokio::test]
async fn archive_and_unarchive() {
    let stub = spawn_stub().await;
    stub.seed_cases(vec![sample_case("9", "new")]);
    let (api, _store) = stub.client();
    api.sign_in("admin", "admin-pass").await.unwrap();

    api.archive_case("9").await.unwrap();
    let archived = api.get_case("9").await.unwrap();
    assert!(archived.is_archived());
    assert_eq!(archived.toggled_archive_status(), "new");

    api.set_case_status("9", archived.toggled_archive_status()).await.unwrap();
    assert_eq!(stub.last("PATCH", "/cases/9").unwrap().body, json!({ "status": "new" }));
    assert!(!api.get_case("9").await.unwrap().is_archived());
}
