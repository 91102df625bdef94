use shared_types::{AppError, Role};
use tracing::{info, warn};

use crate::access;
use crate::store::{SessionStore, ROLE_KEY, TOKEN_KEY, USERNAME_KEY, USER_ID_KEY};
use crate::token::{decode_claims, role_from_token};

/// The signed-in user as far as the browser knows.
///
/// The role is derived from the token exactly once, in [`Session::establish`]
/// or on the first [`Session::restore`] of a store that predates the `role`
/// key. Everything else reads the persisted value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: String,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub role: Role,
}

/// Seconds since the epoch.
pub fn now_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

impl Session {
    /// Build a session from a freshly issued token.
    ///
    /// A token whose claims cannot be read, or that is already expired, is
    /// refused and nothing is stored. Only [`Session::restore`] falls back
    /// to the anonymous role.
    pub fn establish(token: &str, fallback_username: Option<&str>, now: i64) -> Result<Self, AppError> {
        let claims = decode_claims(token).map_err(|err| {
            warn!(error = %err, "login returned an unreadable token");
            AppError::decode("The server returned an unreadable session token")
        })?;
        if claims.is_expired(now) {
            return Err(AppError::unauthorized("Session token has already expired"));
        }
        Ok(Self {
            token: token.to_string(),
            user_id: claims.subject(),
            username: claims
                .username
                .clone()
                .or_else(|| fallback_username.map(str::to_string)),
            role: claims.role(),
        })
    }

    /// Write all four session keys.
    pub fn persist(&self, store: &dyn SessionStore) {
        store.set(TOKEN_KEY, &self.token);
        store.set(USER_ID_KEY, self.user_id.as_deref().unwrap_or_default());
        store.set(USERNAME_KEY, self.username.as_deref().unwrap_or_default());
        store.set(ROLE_KEY, self.role.as_str());
        info!(role = %self.role, "session established");
    }

    /// Load the persisted session, if any.
    ///
    /// An expired token is cleared from the store. A store written before
    /// the `role` key existed gets its role derived once and saved.
    pub fn restore(store: &dyn SessionStore, now: i64) -> Option<Self> {
        let token = store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())?;
        let claims = decode_claims(&token).ok();
        if claims.as_ref().is_some_and(|c| c.is_expired(now)) {
            info!("stored session expired; clearing");
            Self::clear(store);
            return None;
        }
        let role = match store.get(ROLE_KEY) {
            Some(role) => Role::from_claim(&role),
            None => {
                let role = role_from_token(&token);
                store.set(ROLE_KEY, role.as_str());
                role
            }
        };
        Some(Self {
            token,
            user_id: store.get(USER_ID_KEY).filter(|v| !v.is_empty()),
            username: store.get(USERNAME_KEY).filter(|v| !v.is_empty()),
            role,
        })
    }

    /// Remove every session key.
    pub fn clear(store: &dyn SessionStore) {
        store.clear();
        info!("session cleared");
    }

    /// Where to send the user right after login.
    pub fn landing_path(&self) -> &'static str {
        access::landing_path(self.role)
    }
}

/// Role of an optional session; no session is anonymous.
pub fn role_of(session: Option<&Session>) -> Role {
    session.map(|s| s.role).unwrap_or_default()
}
