//! Reads the claim set out of a bearer token.
//!
//! The token is never verified here; the server does that on every request.
//! The claims only drive which navbar and landing page the user sees.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;
use shared_types::{AppError, Role};
use tracing::warn;

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TokenClaims {
    #[serde(default)]
    pub role: Option<String>,
    /// Subject; some issuers send a number, others a string.
    #[serde(default)]
    pub sub: Option<Value>,
    #[serde(default)]
    pub username: Option<String>,
    /// Expiry in seconds since the epoch.
    #[serde(default)]
    pub exp: Option<f64>,
}

impl TokenClaims {
    pub fn role(&self) -> Role {
        self.role.as_deref().map(Role::from_claim).unwrap_or_default()
    }

    pub fn subject(&self) -> Option<String> {
        match self.sub.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now as f64)
    }
}

/// Decode the middle segment of a three-part token.
pub fn decode_claims(token: &str) -> Result<TokenClaims, AppError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(AppError::decode(format!(
            "expected 3 token segments, found {}",
            segments.len()
        )));
    };
    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .or_else(|_| STANDARD_LENIENT.decode(payload))
        .or_else(|_| STANDARD.decode(payload))
        .map_err(|e| AppError::decode(format!("token payload is not base64: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::decode(format!("token payload is not a claim set: {e}")))
}

/// Role carried by `token`; a token that cannot be read counts as anonymous.
pub fn role_from_token(token: &str) -> Role {
    match decode_claims(token) {
        Ok(claims) => claims.role(),
        Err(err) => {
            warn!(error = %err, "could not decode session token; treating as anonymous");
            Role::Public
        }
    }
}
