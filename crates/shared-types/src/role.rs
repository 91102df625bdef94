use serde::{Deserialize, Serialize};

/// Role carried in the session credential.
///
/// - `Public`: no token, an unknown role, or a token that failed to decode.
/// - `Institution`: reporting organisations; file reports against cases.
/// - `Investigator`: historical role; authenticated but gets the public navbar.
/// - `Admin`: manages cases, reviews reports and case-type suggestions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Public,
    Institution,
    Investigator,
    Admin,
}

impl Role {
    /// Parse a claim value, case-insensitively. Anything unrecognised is `Public`.
    pub fn from_claim(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "institution" => Role::Institution,
            "investigator" => Role::Investigator,
            _ => Role::Public,
        }
    }

    /// Lowercase string as persisted under the `role` storage key.
    /// The anonymous role is the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Public => "",
            Role::Institution => "institution",
            Role::Investigator => "investigator",
            Role::Admin => "admin",
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Role::Public)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Public => write!(f, "public"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
