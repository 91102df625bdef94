use client::access::LOGIN_PATH;
use client::Session;
use dioxus::prelude::*;
use shared_types::t;
use shared_ui::{
    Alert, AlertVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Form, Input,
};
use std::collections::HashMap;

use crate::routes::Route;
use crate::session::{use_api, use_language, use_session};

/// Route for the page a freshly signed-in user should see.
fn landing_route(session: &Session) -> Route {
    session.landing_path().parse().unwrap_or(Route::Login {})
}

/// Username/password sign-in. On success the session is persisted and the
/// user lands on the welcome page for their role.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut session = use_session();
    let lang = use_language();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Already signed in with a role that has a home: go there.
    if let Some(current) = session.current.read().as_ref() {
        if current.landing_path() != LOGIN_PATH {
            navigator().replace(landing_route(current));
        }
    }

    let handle_login = move |_evt: FormEvent| {
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            match api.sign_in(&username(), &password()).await {
                Ok(signed_in) => {
                    let target = landing_route(&signed_in);
                    session.set(signed_in);
                    navigator().push(target);
                }
                Err(e) => {
                    if e.field_errors.is_empty() {
                        error_msg.set(Some(e.friendly_message()));
                    } else {
                        field_errors.set(e.field_errors.clone());
                    }
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { {t(lang, "login.title")} }
                    CardDescription { {t(lang, "app.name")} }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        Alert { variant: AlertVariant::Error, title: t(lang, "login.failed").to_string(), "{err}" }
                    }

                    Form { onsubmit: handle_login,
                        Input {
                            label: t(lang, "login.username").to_string(),
                            value: username(),
                            required: true,
                            error: field_errors.read().get("username").cloned(),
                            on_input: move |evt: FormEvent| username.set(evt.value()),
                        }
                        Input {
                            label: t(lang, "login.password").to_string(),
                            input_type: "password",
                            value: password(),
                            required: true,
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading: loading(),
                            class: "auth-submit",
                            {t(lang, "login.submit")}
                        }
                    }
                }
            }
        }
    }
}
