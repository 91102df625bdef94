use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

use crate::{AppError, Language, LocalizedText};

/// Valid case statuses in workflow order.
pub const CASE_STATUSES: &[&str] = &["new", "under_investigation", "resolved", "archived"];

/// Valid case priorities.
pub const CASE_PRIORITIES: &[&str] = &["low", "medium", "high"];

/// Statuses an institution may still report against.
pub const OPEN_CASE_STATUSES: &[&str] = &["new", "under_investigation", "resolved"];

pub const ARCHIVED_STATUS: &str = "archived";

/// Older records use `in_progress`; it reads as `under_investigation`.
const LEGACY_STATUS_ALIASES: &[(&str, &str)] = &[("in_progress", "under_investigation")];

/// Keys the server assigns and refuses on write.
const SERVER_ASSIGNED_KEYS: &[&str] = &["_id", "id", "case_id", "created_at", "updated_at"];

/// Canonical form of a status for display and filtering.
/// The stored value is left untouched.
pub fn normalize_status(status: &str) -> &str {
    LEGACY_STATUS_ALIASES
        .iter()
        .find(|(legacy, _)| *legacy == status)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(status)
}

pub fn is_valid_case_status(status: &str) -> bool {
    CASE_STATUSES.contains(&normalize_status(status))
}

pub fn is_valid_priority(priority: &str) -> bool {
    CASE_PRIORITIES.contains(&priority)
}

/// GeoJSON point. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    #[serde(rename = "type", default = "point_kind")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: [f64; 2],
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn point_kind() -> String {
    "Point".to_string()
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: point_kind(),
            coordinates: [longitude, latitude],
            extra: Map::new(),
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CaseLocation {
    #[serde(default)]
    pub country: LocalizedText,
    #[serde(default)]
    pub region: LocalizedText,
    #[serde(default)]
    pub coordinates: GeoPoint,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A violation type attached to a case. Newer records carry bilingual
/// names, older ones a bare string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ViolationTypeName {
    Named {
        #[serde(default)]
        name_en: String,
        #[serde(default)]
        name_ar: String,
    },
    Plain(String),
}

impl ViolationTypeName {
    pub fn display(&self, lang: Language) -> &str {
        match self {
            ViolationTypeName::Plain(name) => name.as_str(),
            ViolationTypeName::Named { name_en, name_ar } => match lang {
                Language::Ar if !name_ar.is_empty() => name_ar.as_str(),
                _ if !name_en.is_empty() => name_en.as_str(),
                _ => name_ar.as_str(),
            },
        }
    }
}

/// A link to uploaded evidence.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EvidenceLink {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_captured: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A case as returned by `GET /cases/` and `GET /cases/{id}`.
///
/// Fields the UI does not model are kept in `extra` so that an edit sends
/// them back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CaseResponse {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violation_types: Option<Vec<ViolationTypeName>>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub location: CaseLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_occurred: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_reported: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<EvidenceLink>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CaseResponse {
    /// Human-facing identifier: the `case_id` when assigned, else the record id.
    pub fn display_id(&self) -> &str {
        self.case_id
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.id)
    }

    pub fn is_archived(&self) -> bool {
        self.status == ARCHIVED_STATUS
    }

    pub fn normalized_status(&self) -> &str {
        normalize_status(&self.status)
    }

    /// Status to send when the archive toggle is pressed.
    pub fn toggled_archive_status(&self) -> &'static str {
        if self.is_archived() {
            "new"
        } else {
            ARCHIVED_STATUS
        }
    }
}

/// Body accepted by `GET /cases/`: a bare list or `{ "cases": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CaseListBody {
    List(Vec<CaseResponse>),
    Wrapped {
        #[serde(default)]
        cases: Vec<CaseResponse>,
    },
}

impl CaseListBody {
    pub fn into_cases(self) -> Vec<CaseResponse> {
        match self {
            CaseListBody::List(cases) | CaseListBody::Wrapped { cases } => cases,
        }
    }
}

/// Write body for `POST /cases/` and `PATCH /cases/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CasePayload {
    pub title: LocalizedText,
    pub description: LocalizedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation_types: Option<Vec<ViolationTypeName>>,
    pub status: String,
    pub priority: String,
    pub location: CaseLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_occurred: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_reported: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<EvidenceLink>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<&CaseResponse> for CasePayload {
    fn from(case: &CaseResponse) -> Self {
        let mut extra = case.extra.clone();
        for key in SERVER_ASSIGNED_KEYS {
            extra.remove(*key);
        }
        Self {
            title: case.title.clone(),
            description: case.description.clone(),
            violation_types: case.violation_types.clone(),
            status: case.status.clone(),
            priority: case.priority.clone(),
            location: case.location.clone(),
            date_occurred: case.date_occurred.clone(),
            date_reported: case.date_reported.clone(),
            evidence: case.evidence.clone(),
            extra,
        }
    }
}

/// Flat, string-typed editing state for the case create/update screens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseForm {
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub status: String,
    pub priority: String,
    pub country_en: String,
    pub country_ar: String,
    pub region_en: String,
    pub region_ar: String,
    pub latitude: String,
    pub longitude: String,
    pub date_occurred: String,
    /// One violation type per line, `english | arabic`.
    pub violation_types: String,
}

impl CaseForm {
    /// Blank form for creating a case.
    pub fn new_case() -> Self {
        Self {
            status: "new".to_string(),
            priority: "medium".to_string(),
            latitude: "0".to_string(),
            longitude: "0".to_string(),
            ..Self::default()
        }
    }

    /// Populate the form from a fetched case.
    pub fn from_case(case: &CaseResponse) -> Self {
        Self {
            title_en: case.title.en.clone(),
            title_ar: case.title.ar.clone(),
            description_en: case.description.en.clone(),
            description_ar: case.description.ar.clone(),
            status: case.status.clone(),
            priority: case.priority.clone(),
            country_en: case.location.country.en.clone(),
            country_ar: case.location.country.ar.clone(),
            region_en: case.location.region.en.clone(),
            region_ar: case.location.region.ar.clone(),
            latitude: case.location.coordinates.latitude().to_string(),
            longitude: case.location.coordinates.longitude().to_string(),
            date_occurred: case.date_occurred.clone().unwrap_or_default(),
            violation_types: case
                .violation_types
                .as_ref()
                .map(|types| format_violation_lines(types))
                .unwrap_or_default(),
        }
    }

    /// Status option to show as selected. A legacy status maps to its
    /// current name; `status` itself is sent back untouched until changed.
    pub fn selected_status(&self) -> &str {
        normalize_status(&self.status)
    }

    /// Check every field, collecting one message per invalid field.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = HashMap::new();
        if self.title_en.trim().is_empty() && self.title_ar.trim().is_empty() {
            errors.insert("title".to_string(), "A title is required in at least one language".to_string());
        }
        if !self.status.is_empty() && !is_valid_case_status(&self.status) {
            errors.insert("status".to_string(), format!("Unknown status '{}'", self.status));
        }
        if !self.priority.is_empty() && !is_valid_priority(&self.priority) {
            errors.insert("priority".to_string(), format!("Unknown priority '{}'", self.priority));
        }
        match parse_coordinate(&self.latitude) {
            Some(lat) if (-90.0..=90.0).contains(&lat) => {}
            _ => {
                errors.insert("latitude".to_string(), "Latitude must be a number between -90 and 90".to_string());
            }
        }
        match parse_coordinate(&self.longitude) {
            Some(lng) if (-180.0..=180.0).contains(&lng) => {}
            _ => {
                errors.insert("longitude".to_string(), "Longitude must be a number between -180 and 180".to_string());
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Please fix the highlighted fields.", errors))
        }
    }

    fn location(&self, base: &CaseLocation) -> CaseLocation {
        let longitude = parse_coordinate(&self.longitude).unwrap_or(base.coordinates.longitude());
        let latitude = parse_coordinate(&self.latitude).unwrap_or(base.coordinates.latitude());
        let mut coordinates = base.coordinates.clone();
        coordinates.coordinates = [longitude, latitude];
        CaseLocation {
            country: base.country.with_text(&self.country_en, &self.country_ar),
            region: base.region.with_text(&self.region_en, &self.region_ar),
            coordinates,
            extra: base.extra.clone(),
        }
    }

    fn violation_types(&self, base: Option<&Vec<ViolationTypeName>>) -> Option<Vec<ViolationTypeName>> {
        if let Some(existing) = base {
            if format_violation_lines(existing) == self.violation_types {
                return Some(existing.clone());
            }
        }
        let parsed = parse_violation_lines(&self.violation_types);
        if parsed.is_empty() && base.is_none() {
            None
        } else {
            Some(parsed)
        }
    }

    /// Merge the edited fields over `original`, dropping server-assigned keys.
    pub fn to_update(&self, original: &CaseResponse) -> Result<CasePayload, AppError> {
        self.validate()?;
        let mut payload = CasePayload::from(original);
        payload.title = original.title.with_text(&self.title_en, &self.title_ar);
        payload.description = original
            .description
            .with_text(&self.description_en, &self.description_ar);
        payload.status = self.status.clone();
        payload.priority = self.priority.clone();
        payload.location = self.location(&original.location);
        payload.violation_types = self.violation_types(original.violation_types.as_ref());
        if !self.date_occurred.is_empty() || original.date_occurred.is_some() {
            payload.date_occurred = Some(self.date_occurred.clone());
        }
        Ok(payload)
    }

    /// Build a create body. `reported_at` becomes `date_reported`, and also
    /// `date_occurred` when the form leaves it blank.
    pub fn to_create(&self, reported_at: &str) -> Result<CasePayload, AppError> {
        self.validate()?;
        let date_occurred = if self.date_occurred.trim().is_empty() {
            reported_at.to_string()
        } else {
            self.date_occurred.clone()
        };
        Ok(CasePayload {
            title: LocalizedText::new(&self.title_en, &self.title_ar),
            description: LocalizedText::new(&self.description_en, &self.description_ar),
            violation_types: Some(parse_violation_lines(&self.violation_types)),
            status: if self.status.is_empty() { "new".to_string() } else { self.status.clone() },
            priority: if self.priority.is_empty() { "medium".to_string() } else { self.priority.clone() },
            location: self.location(&CaseLocation::default()),
            date_occurred: Some(date_occurred),
            date_reported: Some(reported_at.to_string()),
            evidence: Some(Vec::new()),
            extra: Map::new(),
        })
    }
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn format_violation_lines(types: &[ViolationTypeName]) -> String {
    types
        .iter()
        .map(|v| match v {
            ViolationTypeName::Plain(name) => name.clone(),
            ViolationTypeName::Named { name_en, name_ar } if name_ar.is_empty() => name_en.clone(),
            ViolationTypeName::Named { name_en, name_ar } => format!("{name_en} | {name_ar}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_violation_lines(raw: &str) -> Vec<ViolationTypeName> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('|') {
            Some((en, ar)) => ViolationTypeName::Named {
                name_en: en.trim().to_string(),
                name_ar: ar.trim().to_string(),
            },
            None => ViolationTypeName::Named {
                name_en: line.to_string(),
                name_ar: String::new(),
            },
        })
        .collect()
}

/// Server-side filters for `GET /cases/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseListFilter {
    pub status: String,
    pub region: String,
    pub violation_type: String,
}

impl CaseListFilter {
    /// Query pairs with empty filters omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("status", &self.status),
            ("region", &self.region),
            ("violation_type", &self.violation_type),
        ]
        .into_iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(k, v)| (k, v.trim().to_string()))
        .collect()
    }
}

/// Counts shown on the dashboards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseStats {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_priority: BTreeMap<String, usize>,
}

impl CaseStats {
    pub fn tally(cases: &[CaseResponse]) -> Self {
        let mut stats = Self {
            total: cases.len(),
            ..Self::default()
        };
        for case in cases {
            *stats
                .by_status
                .entry(case.normalized_status().to_string())
                .or_default() += 1;
            if !case.priority.is_empty() {
                *stats.by_priority.entry(case.priority.clone()).or_default() += 1;
            }
        }
        stats
    }

    pub fn count(&self, status: &str) -> usize {
        self.by_status.get(status).copied().unwrap_or(0)
    }
}
