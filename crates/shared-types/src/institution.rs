use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::{looks_like_email, AppError, LocalizedText};

fn default_active() -> bool {
    true
}

/// The signed-in institution's own record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstitutionProfile {
    #[serde(default)]
    pub institution_name: LocalizedText,
    #[serde(default)]
    pub username: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub address: LocalizedText,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for InstitutionProfile {
    fn default() -> Self {
        Self {
            institution_name: LocalizedText::default(),
            username: String::new(),
            active: true,
            email: None,
            phone: None,
            website: None,
            address: LocalizedText::default(),
            extra: Map::new(),
        }
    }
}

impl InstitutionProfile {
    /// A freshly provisioned account has no name in either language.
    pub fn is_empty_profile(&self) -> bool {
        self.institution_name.is_blank()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = HashMap::new();
        if self.institution_name.is_blank() {
            errors.insert(
                "institution_name".to_string(),
                "Institution name is required in at least one language".to_string(),
            );
        }
        if let Some(email) = self.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
            if !looks_like_email(email) {
                errors.insert("email".to_string(), "Please provide a valid email address.".to_string());
            }
        }
        if let Some(site) = self.website.as_deref().map(str::trim).filter(|w| !w.is_empty()) {
            if !(site.starts_with("http://") || site.starts_with("https://")) {
                errors.insert("website".to_string(), "Website must start with http:// or https://".to_string());
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Please fix the highlighted fields.", errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_account_is_empty_and_active() {
        let profile: InstitutionProfile = serde_json::from_value(json!({
            "institution_name": {"en": "", "ar": ""},
            "username": "inst"
        }))
        .unwrap();
        assert!(profile.is_empty_profile());
        assert!(profile.active);
        assert!(profile.validate().is_err());
    }

    #[test]
    fn validate_checks_contact_fields() {
        let mut profile = InstitutionProfile {
            institution_name: LocalizedText::new("Al-Haq", "الحق"),
            email: Some("info@alhaq".into()),
            website: Some("alhaq.org".into()),
            ..Default::default()
        };
        let err = profile.validate().unwrap_err();
        assert!(err.field_errors.contains_key("email"));
        assert!(err.field_errors.contains_key("website"));

        profile.email = Some("info@alhaq.org".into());
        profile.website = Some("https://alhaq.org".into());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn unknown_fields_survive_update() {
        let profile: InstitutionProfile = serde_json::from_value(json!({
            "institution_name": {"en": "Al-Haq", "ar": "الحق"},
            "username": "inst",
            "active": false,
            "registered_at": "2024-01-01"
        }))
        .unwrap();
        let body = serde_json::to_value(&profile).unwrap();
        assert_eq!(body["registered_at"], "2024-01-01");
        assert_eq!(body["active"], false);
    }
}
