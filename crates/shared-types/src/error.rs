use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Fallback shown when the server did not send a usable `detail`.
pub const GENERIC_FAILURE: &str = "Request failed. Please try again.";

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Unauthorized,
    Forbidden,
    /// The request never produced an HTTP response.
    Network,
    /// A response (or the stored token) could not be decoded.
    Decode,
    ServerError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::ServerError => write!(f, "ServerError"),
        }
    }
}

/// Structured error shared by the API client, the forms and the pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Forbidden, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Decode, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::ServerError, message)
    }

    /// Translate a non-2xx HTTP response into an `AppError`.
    ///
    /// The kind comes from the status code alone. The message is the
    /// server's `detail` when one can be extracted from `body`, otherwise
    /// [`GENERIC_FAILURE`]. FastAPI-style validation arrays are also
    /// unpacked into `field_errors`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            422 => AppErrorKind::ValidationError,
            _ => AppErrorKind::ServerError,
        };
        let message = Self::extract_detail(body).unwrap_or_else(|| GENERIC_FAILURE.to_string());
        Self {
            kind,
            message,
            field_errors: Self::extract_field_errors(body),
        }
    }

    /// Pull a human-readable message out of an error body.
    ///
    /// Accepts `{"detail": "..."}`, `{"detail": [{"msg": "..."}]}` and the
    /// `{"message": "..."}` shape some report endpoints use.
    pub fn extract_detail(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        match value.get("detail") {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(serde_json::Value::Array(items)) => items
                .first()
                .and_then(|item| item.get("msg"))
                .and_then(|msg| msg.as_str())
                .map(str::to_string),
            _ => value
                .get("message")
                .and_then(|m| m.as_str())
                .filter(|m| !m.is_empty())
                .map(str::to_string),
        }
    }

    fn extract_field_errors(body: &str) -> HashMap<String, String> {
        let mut fields = HashMap::new();
        let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
            return fields;
        };
        let Some(items) = value.get("detail").and_then(|d| d.as_array()) else {
            return fields;
        };
        for item in items {
            let field = item
                .get("loc")
                .and_then(|loc| loc.as_array())
                .and_then(|loc| loc.last())
                .and_then(|f| f.as_str());
            let msg = item.get("msg").and_then(|m| m.as_str());
            if let (Some(field), Some(msg)) = (field, msg) {
                fields.entry(field.to_string()).or_insert_with(|| msg.to_string());
            }
        }
        fields
    }

    /// Message suitable for an inline banner.
    pub fn friendly_message(&self) -> String {
        if self.message.is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            self.message.clone()
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Please fix the highlighted fields.", field_errors)
    }
}
