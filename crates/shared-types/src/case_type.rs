use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Language;

/// A violation category. Seeded types carry bilingual names; suggestions
/// from reporters carry a single `name` and stay `pending` until reviewed.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CaseType {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub rejected: bool,
}

impl CaseType {
    pub fn display_name(&self, lang: Language) -> &str {
        let localized = match lang {
            Language::En => &self.name_en,
            Language::Ar => &self.name_ar,
        };
        [localized, &self.name, &self.name_en, &self.name_ar]
            .into_iter()
            .find(|n| !n.trim().is_empty())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Value stored in a report's `violation_types`.
    pub fn key(&self) -> &str {
        if self.name_en.is_empty() {
            &self.name
        } else {
            &self.name_en
        }
    }
}

/// Body of `POST /case-types`, sent as the `name` query parameter.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct CaseTypeSuggestion {
    #[validate(length(min = 3, message = "Case type name must be at least 3 characters"))]
    pub name: String,
}

impl CaseTypeSuggestion {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_name_prefers_language_then_falls_back() {
        let seeded: CaseType = serde_json::from_value(json!({
            "_id": "1", "name_en": "Raids", "name_ar": "اقتحامات"
        }))
        .unwrap();
        assert_eq!(seeded.display_name(Language::Ar), "اقتحامات");
        assert_eq!(seeded.key(), "Raids");

        let suggested: CaseType = serde_json::from_value(json!({
            "_id": "2", "name": "Water cuts", "pending": true
        }))
        .unwrap();
        assert_eq!(suggested.display_name(Language::Ar), "Water cuts");
        assert_eq!(suggested.key(), "Water cuts");
        assert!(suggested.pending);
    }

    #[test]
    fn suggestion_needs_three_non_blank_chars() {
        assert!(CaseTypeSuggestion::new("  ab  ").validate().is_err());
        assert!(CaseTypeSuggestion::new("abc").validate().is_ok());
    }
}
