use std::sync::Arc;

use client::ApiClient;
use dioxus::prelude::*;

mod components;
pub mod format_helpers;
mod routes;
mod session;
mod storage;

use routes::Route;
use session::{LanguageState, SessionState};
use storage::BrowserStore;

const CONFIG_TOML: &str = include_str!("../config.toml");
const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = client::config::load_config(CONFIG_TOML, option_env!("MONITOR360_API_URL"));

    let store = use_hook(|| Arc::new(BrowserStore::new()));
    let api = use_context_provider(|| ApiClient::new(&config.api.base_url, store.clone()));
    use_context_provider(|| config.features.clone());

    let mut session = use_context_provider(|| SessionState::new(None));
    use_context_provider(|| LanguageState {
        current: Signal::new(config.ui.default_language),
    });

    // Copy localStorage into the store once, then restore the session from
    // it. The router waits so guards never see a half-loaded session.
    let ready = use_resource(move || {
        let store = store.clone();
        let api = api.clone();
        async move {
            store.hydrate().await;
            if let Some(restored) = api.current_session() {
                tracing::info!(role = %restored.role, "session restored");
                session.set(restored);
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::theme::ThemeSeed { language: config.ui.default_language }
        shared_ui::ToastProvider {
            if ready.read().is_some() {
                Router::<Route> {}
            } else {
                div { class: "app-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}
