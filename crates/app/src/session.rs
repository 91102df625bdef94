use std::future::Future;

use client::{ApiClient, Session};
use dioxus::prelude::*;
use shared_types::{AppError, Language, Role};
use tracing::info;

use crate::routes::Route;

/// Signed-in user shared across every route.
///
/// The role inside is the persisted one; nothing here decodes the token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current: Signal<Option<Session>>,
}

impl SessionState {
    pub fn new(initial: Option<Session>) -> Self {
        Self {
            current: Signal::new(initial),
        }
    }

    pub fn role(&self) -> Role {
        client::session::role_of(self.current.read().as_ref())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn username(&self) -> Option<String> {
        self.current.read().as_ref().and_then(|s| s.username.clone())
    }

    pub fn set(&mut self, session: Session) {
        self.current.set(Some(session));
    }

    /// Forget the in-memory session. Storage is cleared by the API client.
    pub fn clear(&mut self) {
        self.current.set(None);
    }
}

/// Interface language, switchable from any navbar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LanguageState {
    pub current: Signal<Language>,
}

impl LanguageState {
    pub fn get(&self) -> Language {
        *self.current.read()
    }

    pub fn toggle(&mut self) {
        let next = self.get().toggle();
        self.current.set(next);
        shared_ui::theme::set_document_direction(next);
    }
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_language() -> Language {
    use_context::<LanguageState>().get()
}

/// Sign out locally and go to the login page.
pub fn logout(api: &ApiClient, mut session: SessionState) {
    api.sign_out();
    session.clear();
    navigator().push(Route::Login {});
}

fn expire(mut session: SessionState) {
    info!("request rejected with 401; redirecting to login");
    session.clear();
    navigator().push(Route::Login {});
}

/// Turn a failed request into the text to show. An expired or rejected
/// session is dropped and the user sent back to `/login`.
pub fn handle_error(err: &AppError, session: SessionState) -> String {
    if err.is_unauthorized() {
        expire(session);
    }
    err.friendly_message()
}

/// Await a request made from a resource, applying the same 401 handling
/// as [`handle_error`].
pub async fn guarded<T>(
    session: SessionState,
    request: impl Future<Output = Result<T, AppError>>,
) -> Result<T, AppError> {
    let result = request.await;
    if let Err(err) = &result {
        if err.is_unauthorized() {
            expire(session);
        }
    }
    result
}
