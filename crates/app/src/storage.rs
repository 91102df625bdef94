//! `localStorage`-backed [`SessionStore`].
//!
//! Reads are served from an in-memory copy filled once at startup by
//! [`BrowserStore::hydrate`]; writes update the copy and are mirrored to the
//! browser through `document::eval`.

use std::collections::HashMap;

use client::store::SESSION_KEYS;
use client::{MemoryStore, SessionStore};
use dioxus::prelude::*;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct BrowserStore {
    cache: MemoryStore,
}

/// Quote `value` as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn read_script() -> String {
    let keys = SESSION_KEYS
        .iter()
        .map(|key| js_string(key))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"
        var out = {{}};
        [{keys}].forEach(function(k) {{
            var v = window.localStorage.getItem(k);
            if (v !== null) {{ out[k] = v; }}
        }});
        return out;
        "#
    )
}

impl BrowserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the session keys out of `localStorage`. Failures leave the
    /// store empty, which reads as "signed out".
    pub async fn hydrate(&self) {
        match document::eval(&read_script())
            .join::<HashMap<String, String>>()
            .await
        {
            Ok(entries) => {
                debug!(keys = entries.len(), "session storage hydrated");
                for (key, value) in entries {
                    self.cache.set(&key, &value);
                }
            }
            Err(e) => warn!(error = ?e, "could not read localStorage; starting signed out"),
        }
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.cache.set(key, value);
        document::eval(&format!(
            "window.localStorage.setItem({}, {});",
            js_string(key),
            js_string(value)
        ));
    }

    fn remove(&self, key: &str) {
        self.cache.remove(key);
        document::eval(&format!("window.localStorage.removeItem({});", js_string(key)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes() {
        assert_eq!(js_string(r#"a"b"#), r#""a\"b""#);
        assert_eq!(js_string("jwt_token"), "\"jwt_token\"");
    }

    #[test]
    fn read_script_lists_every_session_key() {
        let script = read_script();
        for key in SESSION_KEYS {
            assert!(script.contains(&format!("\"{key}\"")), "{key} missing");
        }
    }
}
