use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{t, CaseForm};
use shared_ui::{
    Alert, AlertVariant, Button, ButtonVariant, Form, PageActions, PageHeader, PageTitle,
    ToastOptions, use_toast,
};
use tracing::info;

use super::form::CaseFormFields;
use crate::routes::Route;
use crate::session::{handle_error, use_api, use_language, use_session};

/// Admin page for opening a new case.
#[component]
pub fn CreateCase() -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();
    let toast = use_toast();

    let form = use_signal(CaseForm::new_case);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut failure = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let on_submit = move |_| {
        let api = api.clone();
        let reported_at = chrono::Utc::now().to_rfc3339();
        let payload = match form.read().to_create(&reported_at) {
            Ok(payload) => payload,
            Err(e) => {
                errors.set(e.field_errors.clone());
                failure.set(Some(e.friendly_message()));
                return;
            }
        };
        errors.set(HashMap::new());
        failure.set(None);
        saving.set(true);
        spawn(async move {
            match api.create_case(&payload).await {
                Ok(created) => {
                    info!(case_id = ?created.id, "case created");
                    toast.success(t(lang, "case.created").to_string(), ToastOptions::new());
                    navigator().push(Route::ManageCases {});
                }
                Err(e) => {
                    errors.set(e.field_errors.clone());
                    failure.set(Some(handle_error(&e, session)));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "nav.create_case")} }
            }

            if let Some(msg) = failure() {
                Alert { variant: AlertVariant::Error, "{msg}" }
            }

            Form { onsubmit: on_submit,
                CaseFormFields { form, errors, lang }
                PageActions {
                    Link { to: Route::ManageCases {},
                        Button { variant: ButtonVariant::Outline, {t(lang, "common.cancel")} }
                    }
                    Button { button_type: "submit", loading: saving(), {t(lang, "common.save")} }
                }
            }
        }
    }
}
