use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, InstitutionProfile, Language};

use crate::common::spawn_stub;

fn seeded_profile() -> serde_json::Value {
    json!({
        "institution_name": { "en": "Syrian Archive", "ar": "الأرشيف السوري" },
        "username": "inst",
        "active": true,
        "email": "contact@archive.example.org",
        "address": { "en": "Berlin", "ar": "برلين" },
        "created_at": "2023-01-01T00:00:00"
    })
}

#[tokio::test]
async fn profile_loads_with_bilingual_name() {
    let stub = spawn_stub().await;
    stub.seed_profile(seeded_profile());
    let (api, _store) = stub.client();
    api.sign_in("inst", "inst-pass").await.unwrap();

    let profile = api.get_institution_profile().await.unwrap();
    assert_eq!(profile.institution_name.get(Language::Ar), "الأرشيف السوري");
    assert_eq!(profile.email.as_deref(), Some("contact@archive.example.org"));
    assert!(profile.active);
    assert!(!profile.is_empty_profile());
}

#[tokio::test]
async fn profile_update_keeps_unknown_fields() {
    let stub = spawn_stub().await;
    stub.seed_profile(seeded_profile());
    let (api, _store) = stub.client();
    api.sign_in("inst", "inst-pass").await.unwrap();

    let mut profile = api.get_institution_profile().await.unwrap();
    profile.phone = Some("0991234567".into());
    profile.website = Some("https://archive.example.org".into());
    let saved = api.update_institution_profile(&profile).await.unwrap();
    assert_eq!(saved, profile);

    let sent = stub.last("PUT", "/institution/profile/update/").unwrap().body;
    assert_eq!(sent["phone"], "0991234567");
    assert_eq!(sent["created_at"], "2023-01-01T00:00:00");
    assert_eq!(sent["institution_name"]["en"], "Syrian Archive");
}

#[tokio::test]
async fn invalid_profile_is_not_sent() {
    let stub = spawn_stub().await;
    let (api, _store) = stub.client();
    api.sign_in("inst", "inst-pass").await.unwrap();

    let profile = InstitutionProfile {
        website: Some("archive.example.org".into()),
        ..InstitutionProfile::default()
    };
    let err = api.update_institution_profile(&profile).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("institution_name"));
    assert!(err.field_errors.contains_key("website"));
    assert!(stub.last("PUT", "/institution/profile/update/").is_none());
}
