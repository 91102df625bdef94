use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use validator::ValidateEmail;

use crate::{AppError, GeoPoint};

pub const REPORTER_TYPES: &[&str] = &["victim", "witness"];
pub const CONTACT_METHODS: &[&str] = &["email", "phone"];
pub const REPORT_STATUSES: &[&str] = &["new", "approved", "rejected"];

/// Upper bound on evidence files per report.
pub const MAX_EVIDENCE_FILES: usize = 5;

/// Sentinel option in the violation-type picker meaning "suggest a new one".
pub const OTHER_VIOLATION_TYPE: &str = "other";

/// Parse the timestamp formats the backend emits: RFC 3339, naive ISO
/// datetimes (with or without fractional seconds) and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Date part of a backend timestamp, for list rows.
pub fn display_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Syntactic email check that also insists on a dotted domain.
pub fn looks_like_email(email: &str) -> bool {
    let dotted_domain = email
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.split_once('.'))
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());
    dotted_domain && email.validate_email()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_contact_method")]
    pub preferred_contact: String,
}

fn default_contact_method() -> String {
    "email".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct IncidentDetails {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub violation_types: Vec<String>,
    #[serde(default)]
    pub location_str: String,
    #[serde(default)]
    pub suggested_case_name: String,
}

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// The report form's state, validated and then sent as multipart.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSubmission {
    pub anonymous: bool,
    pub reporter_type: String,
    pub pseudonym: String,
    pub contact_info: ContactInfo,
    pub incident_details: IncidentDetails,
    pub created_by: String,
    /// Existing case the report is filed against.
    pub case_id: Option<String>,
    pub evidence: Vec<EvidenceFile>,
}

impl Default for ReportSubmission {
    fn default() -> Self {
        Self {
            anonymous: false,
            reporter_type: "victim".to_string(),
            pseudonym: String::new(),
            contact_info: ContactInfo {
                preferred_contact: default_contact_method(),
                ..ContactInfo::default()
            },
            incident_details: IncidentDetails::default(),
            created_by: String::new(),
            case_id: None,
            evidence: Vec::new(),
        }
    }
}

impl ReportSubmission {
    pub fn wants_other_type(&self) -> bool {
        self.incident_details
            .violation_types
            .iter()
            .any(|v| v == OTHER_VIOLATION_TYPE)
    }

    /// The case-type name to suggest before submitting, when "other" is picked.
    pub fn suggestion(&self) -> Option<&str> {
        let name = self.incident_details.suggested_case_name.trim();
        (self.wants_other_type() && !name.is_empty()).then_some(name)
    }

    /// Client-side checks; every failing field gets one message.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = HashMap::new();
        let details = &self.incident_details;
        let email = self.contact_info.email.trim();
        let phone = self.contact_info.phone.trim();

        if details.description.trim().is_empty() {
            errors.insert("description".to_string(), "Description is required".to_string());
        }
        if details.location_str.trim().is_empty() {
            errors.insert("location".to_string(), "Location is required".to_string());
        }
        if details.date.trim().is_empty() {
            errors.insert("date".to_string(), "Date is required".to_string());
        }
        if !REPORTER_TYPES.contains(&self.reporter_type.as_str()) {
            errors.insert("reporter_type".to_string(), "Choose victim or witness".to_string());
        }
        if !self.anonymous {
            if email.is_empty() {
                errors.insert("email".to_string(), "Email is required".to_string());
            } else if !looks_like_email(email) {
                errors.insert("email".to_string(), "Please provide a valid email address.".to_string());
            }
            if !phone.is_empty() && !(phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())) {
                errors.insert("phone".to_string(), "Please provide a valid phone number.".to_string());
            }
        }
        let named_types = details
            .violation_types
            .iter()
            .filter(|v| v.as_str() != OTHER_VIOLATION_TYPE)
            .count();
        if named_types == 0 && details.suggested_case_name.trim().is_empty() {
            errors.insert(
                "violation_types".to_string(),
                "At least one case type or suggestion is required".to_string(),
            );
        } else if self.wants_other_type() && details.suggested_case_name.trim().is_empty() {
            errors.insert("violation_types".to_string(), "Please suggest a valid case type.".to_string());
        }
        if self.evidence.len() > MAX_EVIDENCE_FILES {
            errors.insert(
                "evidence".to_string(),
                format!("Maximum {MAX_EVIDENCE_FILES} files allowed"),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Please fix the highlighted fields.", errors))
        }
    }

    /// `incident_details` form field. The "other" sentinel is not a real type
    /// and is dropped; the suggestion travels in `suggested_case_name`.
    pub fn incident_details_json(&self) -> Result<String, AppError> {
        let mut details = self.incident_details.clone();
        details.violation_types.retain(|v| v != OTHER_VIOLATION_TYPE);
        if !self.wants_other_type() && !details.violation_types.is_empty() {
            details.suggested_case_name.clear();
        }
        serde_json::to_string(&details).map_err(|e| AppError::decode(e.to_string()))
    }

    /// `contact_info` form field; absent for anonymous reports.
    pub fn contact_info_json(&self) -> Result<Option<String>, AppError> {
        if self.anonymous {
            return Ok(None);
        }
        serde_json::to_string(&self.contact_info)
            .map(Some)
            .map_err(|e| AppError::decode(e.to_string()))
    }
}

/// Geocoded location attached by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ReportLocation {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ReportIncident {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub violation_types: Vec<String>,
    #[serde(default)]
    pub location_str: String,
    #[serde(default)]
    pub suggested_case_name: String,
    #[serde(default)]
    pub location: Option<ReportLocation>,
}

/// A report as listed by `GET /reports/` and `GET /reports/cases`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ReportResponse {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub reporter_type: String,
    #[serde(default)]
    pub anonymous: bool,
    #[serde(default)]
    pub pseudonym: Option<String>,
    #[serde(default)]
    pub contact_info: Option<ContactInfo>,
    #[serde(default)]
    pub incident_details: ReportIncident,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub pending_approval: bool,
    #[serde(default)]
    pub rejection_comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub case_id: Option<String>,
    #[serde(default)]
    pub evidence_ids: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReportResponse {
    pub fn created(&self) -> Option<NaiveDateTime> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    pub fn location_label(&self) -> &str {
        match &self.incident_details.location {
            Some(loc) if !loc.country.is_empty() => loc.country.as_str(),
            _ => self.incident_details.location_str.as_str(),
        }
    }

    /// Name shown for the reporter; never leaks contact details of
    /// anonymous reports.
    pub fn reporter_label(&self) -> &str {
        if self.anonymous {
            self.pseudonym
                .as_deref()
                .filter(|p| !p.is_empty())
                .unwrap_or("Anonymous")
        } else {
            self.created_by.as_str()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportListResponse {
    #[serde(default)]
    pub reports: Vec<ReportResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportCaseListResponse {
    #[serde(default)]
    pub cases: Vec<ReportResponse>,
}

/// Body for `PUT /reports/cases/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportStatusUpdate {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ReportStatusUpdate {
    pub fn approve() -> Self {
        Self {
            status: "approved".to_string(),
            comment: None,
        }
    }

    pub fn reject(comment: &str) -> Self {
        let comment = comment.trim();
        Self {
            status: "rejected".to_string(),
            comment: (!comment.is_empty()).then(|| comment.to_string()),
        }
    }
}

/// Server-side filters for `GET /reports/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportListFilter {
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub pending_only: bool,
}

impl ReportListFilter {
    pub fn pending() -> Self {
        Self {
            pending_only: true,
            ..Self::default()
        }
    }

    /// Query pairs with blank filters omitted. Bare dates are widened to
    /// the ISO datetimes the backend expects.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.status.trim().is_empty() {
            pairs.push(("status", self.status.trim().to_string()));
        }
        if !self.start_date.trim().is_empty() {
            pairs.push(("start_date", widen_date(&self.start_date, "00:00:00")));
        }
        if !self.end_date.trim().is_empty() {
            pairs.push(("end_date", widen_date(&self.end_date, "23:59:59")));
        }
        if !self.location.trim().is_empty() {
            pairs.push(("location", self.location.trim().to_string()));
        }
        if self.pending_only {
            pairs.push(("pending_only", "true".to_string()));
        }
        pairs
    }
}

fn widen_date(raw: &str, time: &str) -> String {
    let raw = raw.trim();
    if NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() {
        format!("{raw}T{time}")
    } else {
        raw.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportSort {
    #[default]
    Newest,
    CaseId,
}

impl ReportSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSort::Newest => "created_at",
            ReportSort::CaseId => "case_id",
        }
    }

    pub fn from_key(s: &str) -> Self {
        match s {
            "case_id" => ReportSort::CaseId,
            _ => ReportSort::Newest,
        }
    }
}

/// Client-side search, filter and sort over an already-fetched list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportQuery {
    pub search: String,
    pub status: String,
    pub violation_type: String,
    pub sort: ReportSort,
}

impl ReportQuery {
    pub fn matches(&self, report: &ReportResponse) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty()
            && !report.id.to_lowercase().contains(&needle)
            && !report
                .incident_details
                .description
                .to_lowercase()
                .contains(&needle)
        {
            return false;
        }
        if !self.status.is_empty() && report.status != self.status {
            return false;
        }
        if !self.violation_type.is_empty()
            && !report
                .incident_details
                .violation_types
                .iter()
                .any(|v| *v == self.violation_type)
        {
            return false;
        }
        true
    }

    pub fn apply(&self, reports: &[ReportResponse]) -> Vec<ReportResponse> {
        let mut out: Vec<ReportResponse> = reports
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        match self.sort {
            // Undated reports sink to the bottom.
            ReportSort::Newest => out.sort_by(|a, b| b.created().cmp(&a.created())),
            ReportSort::CaseId => out.sort_by(|a, b| a.id.cmp(&b.id)),
        }
        out
    }
}

/// Aggregates for the statistics page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportStats {
    pub total: usize,
    pub pending: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_violation_type: BTreeMap<String, usize>,
}

impl ReportStats {
    pub fn tally(reports: &[ReportResponse]) -> Self {
        let mut stats = Self {
            total: reports.len(),
            ..Self::default()
        };
        for report in reports {
            if report.pending_approval {
                stats.pending += 1;
            }
            let status = if report.status.is_empty() { "new" } else { report.status.as_str() };
            *stats.by_status.entry(status.to_string()).or_default() += 1;
            for vt in &report.incident_details.violation_types {
                *stats.by_violation_type.entry(vt.clone()).or_default() += 1;
            }
        }
        stats
    }

    pub fn count(&self, status: &str) -> usize {
        self.by_status.get(status).copied().unwrap_or(0)
    }
}
