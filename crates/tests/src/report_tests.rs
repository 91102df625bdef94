use client::ReportTarget;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{
    AppErrorKind, EvidenceFile, ReportListFilter, ReportQuery, ReportStatusUpdate, ReportSubmission,
};

use crate::common::spawn_stub;

fn filled_submission() -> ReportSubmission {
    let mut report = ReportSubmission::default();
    report.contact_info.email = "witness@example.org".into();
    report.contact_info.phone = "0991234567".into();
    report.reporter_type = "witness".into();
    report.incident_details.date = "2024-03-02".into();
    report.incident_details.description = "Checkpoint arrests near the market.".into();
    report.incident_details.location_str = "Aleppo".into();
    report.incident_details.violation_types = vec!["Arbitrary detention".into()];
    report
}

fn photo(name: &str) -> EvidenceFile {
    EvidenceFile {
        file_name: name.to_string(),
        content_type: Some("image/jpeg".to_string()),
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
    }
}

fn parsed(field: Option<&String>) -> Value {
    serde_json::from_str(field.expect("field present")).expect("field is json")
}

#[tokio::test]
async fn anonymous_public_report_hides_contact_details() {
    let stub = spawn_stub().await;
    let (api, _store) = stub.client();

    let mut report = filled_submission();
    report.anonymous = true;
    report.pseudonym = "Sparrow".into();
    report.evidence = vec![photo("a.jpg"), photo("b.jpg")];

    let created = api.submit_report(&report, ReportTarget::Report).await.unwrap();
    assert_eq!(created.report_id.as_deref(), Some("r-new"));

    let sent = stub.last("POST", "/reports/").unwrap();
    assert_eq!(sent.bearer, None);
    assert_eq!(sent.fields["anonymous"], "true");
    assert_eq!(sent.fields["pseudonym"], "Sparrow");
    assert_eq!(sent.fields["created_by"], "anonymous");
    assert_eq!(sent.fields["reporter_type"], "witness");
    assert_eq!(sent.fields["location_str"], "Aleppo");
    assert!(!sent.fields.contains_key("contact_info"));
    assert!(!sent.fields.contains_key("case_id"));
    assert_eq!(
        parsed(sent.fields.get("incident_details"))["violation_types"],
        json!(["Arbitrary detention"])
    );
    let files: Vec<(&str, &str, usize)> = sent
        .files
        .iter()
        .map(|(field, name, size)| (field.as_str(), name.as_str(), *size))
        .collect();
    assert_eq!(files, vec![("evidence", "a.jpg", 4), ("evidence", "b.jpg", 4)]);
}

#[tokio::test]
async fn institution_report_carries_case_and_contact() {
    let stub = spawn_stub().await;
    let (api, _store) = stub.client();
    api.sign_in("inst", "inst-pass").await.unwrap();

    let mut report = filled_submission();
    report.case_id = Some("665f".into());
    api.submit_report(&report, ReportTarget::Report).await.unwrap();

    let sent = stub.last("POST", "/reports/").unwrap();
    assert!(sent.bearer.is_some());
    assert_eq!(sent.fields["case_id"], "665f");
    assert_eq!(sent.fields["created_by"], "inst");
    assert_eq!(
        parsed(sent.fields.get("contact_info")),
        json!({ "email": "witness@example.org", "phone": "0991234567", "preferred_contact": "email" })
    );
    assert!(!sent.fields.contains_key("pseudonym"));
}

#[tokio::test]
async fn new_case_report_goes_to_its_own_endpoint_without_case_id() {
    let stub = spawn_stub().await;
    let (api, _store) = stub.client();
    api.sign_in("inst", "inst-pass").await.unwrap();

    let mut report = filled_submission();
    report.case_id = Some("ignored".into());
    let created = api.submit_report(&report, ReportTarget::NewCase).await.unwrap();
    assert_eq!(created.case_id.as_deref(), Some("c-new"));

    let sent = stub.last("POST", "/reports/cases/new-with-report/").unwrap();
    assert!(!sent.fields.contains_key("case_id"));
    assert!(stub.last("POST", "/reports/").is_none());
}

#[tokio::test]
async fn other_violation_type_is_suggested_first() {
    let stub = spawn_stub().await;
    let (api, _store) = stub.client();

    let mut report = filled_submission();
    report.incident_details.violation_types = vec!["other".into()];
    report.incident_details.suggested_case_name = "Internet shutdown".into();
    api.submit_report(&report, ReportTarget::Report).await.unwrap();

    let requests = stub.requests();
    let paths: Vec<&str> = requests.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["/case-types", "/reports/"]);
    assert_eq!(requests[0].query["name"], "Internet shutdown");

    let details = parsed(requests[1].fields.get("incident_details"));
    assert_eq!(details["violation_types"], json!([]));
    assert_eq!(details["suggested_case_name"], "Internet shutdown");
}

#[tokio::test]
async fn invalid_report_is_rejected_locally() {
    let stub = spawn_stub().await;
    let (api, _store) = stub.client();

    let mut report = filled_submission();
    report.contact_info.email = "not-an-email".into();
    report.contact_info.phone = "12345".into();
    report.incident_details.description = "  ".into();
    report.evidence = (0..6).map(|i| photo(&format!("{i}.jpg"))).collect();

    let err = api.submit_report(&report, ReportTarget::Report).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    for field in ["email", "phone", "description", "evidence"] {
        assert!(err.field_errors.contains_key(field), "missing error for {field}");
    }
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn pending_reports_and_date_filters_reach_the_query() {
    let stub = spawn_stub().await;
    stub.seed_reports(vec![
        json!({ "_id": "r1", "status": "new", "pending_approval": true, "created_at": "2024-03-01T09:00:00",
                "incident_details": { "description": "Raid", "violation_types": ["raids"], "location_str": "Homs" } }),
        json!({ "_id": "r2", "status": "approved", "pending_approval": false, "created_at": "2024-03-05T09:00:00",
                "incident_details": { "description": "Shelling", "violation_types": ["shelling"], "location_str": "Idlib" } }),
    ]);
    let (api, _store) = stub.client();
    api.sign_in("admin", "admin-pass").await.unwrap();

    let pending = api.list_reports(&ReportListFilter::pending()).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "r1");
    assert_eq!(stub.last("GET", "/reports/").unwrap().query["pending_only"], "true");

    let filter = ReportListFilter {
        start_date: "2024-03-01".into(),
        end_date: "2024-03-31".into(),
        location: "Idlib".into(),
        ..Default::default()
    };
    let all = api.list_reports(&filter).await.unwrap();
    let query = stub.last("GET", "/reports/").unwrap().query;
    assert_eq!(query["start_date"], "2024-03-01T00:00:00");
    assert_eq!(query["end_date"], "2024-03-31T23:59:59");
    assert_eq!(query["location"], "Idlib");

    let newest: Vec<String> = ReportQuery::default().apply(&all).into_iter().map(|r| r.id).collect();
    assert_eq!(newest, vec!["r2", "r1"]);
}

#[tokio::test]
async fn rejecting_a_report_sends_the_comment() {
    let stub = spawn_stub().await;
    stub.seed_reports(vec![json!({ "_id": "r1", "status": "new", "pending_approval": true })]);
    let (api, _store) = stub.client();
    api.sign_in("admin", "admin-pass").await.unwrap();

    api.update_report_status("r1", &ReportStatusUpdate::reject(" duplicate ")).await.unwrap();
    let sent = stub.last("PUT", "/reports/cases/r1/status").unwrap();
    assert_eq!(sent.body, json!({ "status": "rejected", "comment": "duplicate" }));

    api.update_report_status("r1", &ReportStatusUpdate::approve()).await.unwrap();
    let sent = stub.last("PUT", "/reports/cases/r1/status").unwrap();
    assert_eq!(sent.body, json!({ "status": "approved" }));
}

#[tokio::test]
async fn institution_sees_its_reports() {
    let stub = spawn_stub().await;
    stub.seed_reports(vec![json!({ "_id": "r7", "status": "new", "anonymous": true, "pseudonym": "Owl" })]);
    let (api, _store) = stub.client();
    api.sign_in("inst", "inst-pass").await.unwrap();

    let reports = api.list_report_cases().await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].reporter_label(), "Owl");
}
