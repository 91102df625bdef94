//! The one HTTP client the app talks to the backend through.
//!
//! It owns the base URL, attaches the bearer token, and turns every non-2xx
//! response into an [`AppError`] by status code. A 401 from any endpoint
//! clears the stored session before the error is returned.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AppError, CaseListBody, CaseListFilter, CasePayload, CaseResponse, CaseType,
    CaseTypeSuggestion, InstitutionProfile, LoginRequest, LoginResponse, MutationResponse,
    ReportCaseListResponse, ReportListFilter, ReportListResponse, ReportResponse,
    ReportStatusUpdate, ReportSubmission, GENERIC_FAILURE,
};
use tracing::{debug, info, warn};
use validator::Validate;

use crate::session::{now_timestamp, Session};
use crate::store::{SessionStore, TOKEN_KEY, USERNAME_KEY};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Where a new report is filed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTarget {
    /// `POST /reports/`, optionally linked to the submission's `case_id`.
    Report,
    /// `POST /reports/cases/new-with-report/`, opening a new case for review.
    NewCase,
}

fn encode_id(id: &str) -> String {
    urlencoding::encode(id.trim()).into_owned()
}

impl ApiClient {
    pub fn new(base_url: &str, store: Arc<dyn SessionStore>) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            store,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    fn request(&self, method: Method, path: &str, auth: bool) -> RequestBuilder {
        debug!(%method, path, auth, "api request");
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match self.store.get(TOKEN_KEY).filter(|t| !t.is_empty()) {
            Some(token) if auth => builder.bearer_auth(token),
            _ => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "request did not complete");
            AppError::network(format!("Could not reach the server: {e}"))
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "api request failed");
        if status == StatusCode::UNAUTHORIZED {
            Session::clear(self.store.as_ref());
        }
        Err(AppError::from_status(status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("Could not read the response: {e}")))?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::decode(format!("Unexpected response from server: {e}")))
    }

    /// Like `decode`, but an empty body yields `T::default()`.
    async fn decode_or_default<T: DeserializeOwned + Default>(response: Response) -> Result<T, AppError> {
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("Could not read the response: {e}")))?;
        if body.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&body)
            .map_err(|e| AppError::decode(format!("Unexpected response from server: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, AppError> {
        let response = self.send(self.request(Method::GET, path, true).query(query)).await?;
        Self::decode(response).await
    }

    async fn write_json<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> Result<Response, AppError> {
        self.send(self.request(method, path, true).json(body)).await
    }

    // ── Session ────────────────────────────────────────────────────

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let response = self
            .send(self.request(Method::POST, "/login", false).json(request))
            .await?;
        Self::decode(response).await
    }

    /// Validate, log in, derive the role once, and persist all four keys.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<Session, AppError> {
        let request = LoginRequest::new(username, password);
        request.validate()?;
        let login = self.login(&request).await.map_err(|mut err| {
            if err.message == GENERIC_FAILURE {
                err.message = "Login failed".to_string();
            }
            err
        })?;
        let session = Session::establish(&login.access_token, Some(&request.username), now_timestamp())?;
        session.persist(self.store.as_ref());
        info!(username = %request.username, "signed in");
        Ok(session)
    }

    pub fn sign_out(&self) {
        Session::clear(self.store.as_ref());
    }

    pub fn current_session(&self) -> Option<Session> {
        Session::restore(self.store.as_ref(), now_timestamp())
    }

    // ── Cases ──────────────────────────────────────────────────────

    pub async fn list_cases(&self, filter: &CaseListFilter) -> Result<Vec<CaseResponse>, AppError> {
        let body: CaseListBody = self.get_json("/cases/", &filter.query_pairs()).await?;
        Ok(body.into_cases())
    }

    pub async fn get_case(&self, id: &str) -> Result<CaseResponse, AppError> {
        self.get_json(&format!("/cases/{}", encode_id(id)), &[]).await
    }

    pub async fn create_case(&self, payload: &CasePayload) -> Result<MutationResponse, AppError> {
        let response = self.write_json(Method::POST, "/cases/", payload).await?;
        Self::decode_or_default(response).await
    }

    pub async fn update_case(&self, id: &str, payload: &CasePayload) -> Result<(), AppError> {
        self.write_json(Method::PATCH, &format!("/cases/{}", encode_id(id)), payload)
            .await?;
        Ok(())
    }

    pub async fn set_case_status(&self, id: &str, status: &str) -> Result<(), AppError> {
        let body = serde_json::json!({ "status": status });
        self.write_json(Method::PATCH, &format!("/cases/{}", encode_id(id)), &body)
            .await?;
        Ok(())
    }

    /// Soft-delete. The backend archives rather than removes.
    pub async fn archive_case(&self, id: &str) -> Result<(), AppError> {
        self.send(self.request(Method::DELETE, &format!("/cases/{}", encode_id(id)), true))
            .await?;
        Ok(())
    }

    // ── Reports ────────────────────────────────────────────────────

    pub async fn list_reports(&self, filter: &ReportListFilter) -> Result<Vec<ReportResponse>, AppError> {
        let body: ReportListResponse = self.get_json("/reports/", &filter.query_pairs()).await?;
        Ok(body.reports)
    }

    /// Reports visible to institutions as selectable cases.
    pub async fn list_report_cases(&self) -> Result<Vec<ReportResponse>, AppError> {
        let body: ReportCaseListResponse = self.get_json("/reports/cases", &[]).await?;
        Ok(body.cases)
    }

    fn report_form(&self, submission: &ReportSubmission, target: ReportTarget) -> Result<Form, AppError> {
        let created_by = Some(submission.created_by.trim().to_string())
            .filter(|c| !c.is_empty())
            .or_else(|| self.store.get(USERNAME_KEY).filter(|u| !u.is_empty()))
            .unwrap_or_else(|| "anonymous".to_string());

        let mut form = Form::new()
            .text("anonymous", submission.anonymous.to_string())
            .text("reporter_type", submission.reporter_type.clone())
            .text("incident_details", submission.incident_details_json()?)
            .text("created_by", created_by)
            .text("location_str", submission.incident_details.location_str.trim().to_string());

        if submission.anonymous {
            form = form.text("pseudonym", submission.pseudonym.trim().to_string());
        } else if let Some(contact) = submission.contact_info_json()? {
            form = form.text("contact_info", contact);
        }
        if target == ReportTarget::Report {
            if let Some(case_id) = submission.case_id.as_deref().filter(|c| !c.is_empty()) {
                form = form.text("case_id", case_id.to_string());
            }
        }
        for file in &submission.evidence {
            let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
            let part = match file.content_type.as_deref() {
                Some(mime) => part
                    .mime_str(mime)
                    .map_err(|e| AppError::bad_request(format!("{}: {e}", file.file_name)))?,
                None => part,
            };
            form = form.part("evidence", part);
        }
        Ok(form)
    }

    /// Validate and file a report. A suggested violation type ("other") is
    /// sent to `/case-types` first, as its own request.
    pub async fn submit_report(
        &self,
        submission: &ReportSubmission,
        target: ReportTarget,
    ) -> Result<MutationResponse, AppError> {
        submission.validate()?;
        if let Some(name) = submission.suggestion() {
            self.suggest_case_type(&CaseTypeSuggestion::new(name)).await?;
        }
        let path = match target {
            ReportTarget::Report => "/reports/",
            ReportTarget::NewCase => "/reports/cases/new-with-report/",
        };
        let form = self.report_form(submission, target)?;
        let response = self
            .send(self.request(Method::POST, path, true).multipart(form))
            .await?;
        let created: MutationResponse = Self::decode_or_default(response).await?;
        info!(report_id = ?created.report_id, case_id = ?created.case_id, "report submitted");
        Ok(created)
    }

    /// Approve or reject a pending report.
    pub async fn update_report_status(&self, id: &str, update: &ReportStatusUpdate) -> Result<(), AppError> {
        self.write_json(
            Method::PUT,
            &format!("/reports/cases/{}/status", encode_id(id)),
            update,
        )
        .await?;
        Ok(())
    }

    // ── Case types ─────────────────────────────────────────────────

    /// Approved types are public; the pending queue needs an admin token.
    pub async fn list_case_types(&self, pending_only: bool) -> Result<Vec<CaseType>, AppError> {
        let mut builder = self.request(Method::GET, "/case-types", pending_only);
        if pending_only {
            builder = builder.query(&[("pending_only", "true")]);
        }
        let response = self.send(builder).await?;
        Self::decode_or_default(response).await
    }

    pub async fn suggest_case_type(&self, suggestion: &CaseTypeSuggestion) -> Result<MutationResponse, AppError> {
        suggestion.validate()?;
        let response = self
            .send(
                self.request(Method::POST, "/case-types", true)
                    .query(&[("name", suggestion.name.as_str())]),
            )
            .await?;
        Self::decode_or_default(response).await
    }

    pub async fn set_case_type_approval(&self, id: &str, approved: bool) -> Result<(), AppError> {
        let path = format!("/case-types/{}/approval", encode_id(id));
        self.send(
            self.request(Method::PUT, &path, true)
                .query(&[("approved", approved.to_string())]),
        )
        .await?;
        Ok(())
    }

    // ── Institution profile ────────────────────────────────────────

    pub async fn get_institution_profile(&self) -> Result<InstitutionProfile, AppError> {
        self.get_json("/institution/profile/", &[]).await
    }

    /// Save the profile. When the server echoes the record back that copy
    /// is returned, otherwise the one that was sent.
    pub async fn update_institution_profile(
        &self,
        profile: &InstitutionProfile,
    ) -> Result<InstitutionProfile, AppError> {
        profile.validate()?;
        let response = self
            .write_json(Method::PUT, "/institution/profile/update/", profile)
            .await?;
        let echoed: serde_json::Value = Self::decode_or_default(response).await?;
        if echoed.get("institution_name").is_some() {
            serde_json::from_value(echoed)
                .map_err(|e| AppError::decode(format!("Unexpected response from server: {e}")))
        } else {
            Ok(profile.clone())
        }
    }
}
