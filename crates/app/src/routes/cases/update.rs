use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{t, CaseForm, CaseResponse};
use shared_ui::{
    Alert, AlertVariant, Button, ButtonVariant, Form, PageActions, PageHeader, PageSubtitle,
    PageTitle, SkeletonRows, ToastOptions, use_toast,
};
use tracing::info;

use super::form::CaseFormFields;
use crate::routes::Route;
use crate::session::{guarded, handle_error, use_api, use_language, use_session};

/// Admin edit page. Loads the case once, then hands it to [`EditCaseForm`].
#[component]
pub fn UpdateCase(case_id: String) -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();

    let id = case_id.clone();
    let data = use_resource(move || {
        let api = api.clone();
        let id = id.clone();
        async move { guarded(session, api.get_case(&id)).await }
    });

    rsx! {
        div { class: "container",
            match &*data.read() {
                Some(Ok(case)) => rsx! {
                    EditCaseForm { case: case.clone() }
                },
                Some(Err(e)) => rsx! {
                    PageHeader {
                        PageTitle { {t(lang, "case.edit")} }
                    }
                    Alert { variant: AlertVariant::Error, "{e.friendly_message()}" }
                    Link { to: Route::ManageCases {}, {t(lang, "common.back")} }
                },
                None => rsx! {
                    SkeletonRows { rows: 8 }
                },
            }
        }
    }
}

/// The edit form proper. Only fields the user changed differ from the
/// original in the PATCH body; unknown fields ride along untouched.
#[component]
fn EditCaseForm(case: CaseResponse) -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();
    let toast = use_toast();

    let original = use_signal(|| case.clone());
    let form = use_signal(|| CaseForm::from_case(&case));
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut failure = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let on_submit = move |_| {
        let api = api.clone();
        let original = original.read().clone();
        let payload = match form.read().to_update(&original) {
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
            match api.update_case(&original.id, &payload).await {
                Ok(()) => {
                    info!(case_id = %original.id, "case updated");
                    toast.success(t(lang, "case.updated").to_string(), ToastOptions::new());
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
        PageHeader {
            PageTitle { {t(lang, "case.edit")} }
            PageSubtitle { "{case.display_id()}" }
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
