use std::collections::HashMap;

use client::ReportTarget;
use dioxus::prelude::*;
use shared_types::{
    t, CaseType, EvidenceFile, FeatureFlags, Language, ReportSubmission, CONTACT_METHODS,
    MAX_EVIDENCE_FILES, OTHER_VIOLATION_TYPE, REPORTER_TYPES,
};
use shared_ui::{
    Alert, AlertVariant, Button, Checkbox, Form, FormRow, FormSection, FormSelect, Input,
    PageHeader, PageSubtitle, PageTitle, Textarea, ToastOptions, use_toast,
};
use tracing::{info, warn};

use crate::format_helpers::reporter_type_label;
use crate::routes::Route;
use crate::session::{handle_error, use_api, use_language, use_session};

/// Public report form. Anyone may file; signing in is not required.
#[component]
pub fn SubmitReport() -> Element {
    let lang = use_language();
    let flags: FeatureFlags = use_context();

    if !flags.public_reports {
        return rsx! {
            div { class: "container",
                Alert { variant: AlertVariant::Info, {t(lang, "not_found.title")} }
            }
        };
    }

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "nav.submit_report")} }
                PageSubtitle { {t(lang, "home.tagline")} }
            }
            ReportForm { target: ReportTarget::Report, done: Route::Home {} }
        }
    }
}

/// An institution's report filed against an existing case.
#[component]
pub fn InstitutionCreateReport(case_id: String) -> Element {
    let lang = use_language();
    let label = t(lang, "common.case_id");

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "report.title")} }
                PageSubtitle { "{label}: {case_id}" }
            }
            ReportForm {
                target: ReportTarget::Report,
                case_id: Some(case_id.clone()),
                done: Route::InstitutionReports {},
            }
        }
    }
}

/// An institution's report that opens a new case for admin review.
#[component]
pub fn InstitutionCreateCase() -> Element {
    let lang = use_language();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "nav.create_case")} }
            }
            ReportForm { target: ReportTarget::NewCase, done: Route::InstitutionReports {} }
        }
    }
}

fn set_violation_type(types: &mut Vec<String>, key: &str, on: bool) {
    let present = types.iter().any(|v| v == key);
    if on && !present {
        types.push(key.to_string());
    } else if !on {
        types.retain(|v| v != key);
    }
}

fn contact_label(lang: Language, method: &str) -> &'static str {
    match method {
        "phone" => t(lang, "report.phone"),
        _ => t(lang, "report.email"),
    }
}

/// The report form shared by the public and institution pages.
///
/// Picking "other" reveals a suggestion box; the suggestion is sent to
/// `/case-types` by the client before the report itself.
#[component]
fn ReportForm(target: ReportTarget, #[props(default)] case_id: Option<String>, done: Route) -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();
    let toast = use_toast();

    let mut report = use_signal(move || ReportSubmission {
        case_id: case_id.clone(),
        ..ReportSubmission::default()
    });
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut failure = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let types_api = api.clone();
    let case_types = use_resource(move || {
        let api = types_api.clone();
        async move { api.list_case_types(false).await }
    });

    let on_files = move |evt: FormEvent| async move {
        let mut picked = Vec::new();
        for file in evt.files() {
            let file_name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => picked.push(EvidenceFile {
                    file_name,
                    content_type: file.content_type(),
                    bytes: bytes.to_vec(),
                }),
                Err(e) => warn!(file = %file_name, error = %e, "could not read evidence file"),
            }
        }
        report.write().evidence = picked;
    };

    let on_submit = move |_| {
        let api = api.clone();
        let submission = report.read().clone();
        if let Err(e) = submission.validate() {
            errors.set(e.field_errors.clone());
            failure.set(Some(e.friendly_message()));
            return;
        }
        errors.set(HashMap::new());
        failure.set(None);
        saving.set(true);
        let done = done.clone();
        spawn(async move {
            match api.submit_report(&submission, target).await {
                Ok(created) => {
                    info!(report_id = ?created.report_id, case_id = ?created.case_id, "report filed");
                    let msg = if created.message.is_empty() {
                        t(lang, "report.success").to_string()
                    } else {
                        created.message.clone()
                    };
                    toast.success(msg, ToastOptions::new());
                    navigator().push(done);
                }
                Err(e) => {
                    errors.set(e.field_errors.clone());
                    failure.set(Some(handle_error(&e, session)));
                }
            }
            saving.set(false);
        });
    };

    let current = report.read().clone();
    let err = move |field: &str| errors.read().get(field).cloned();
    let wants_other = current.wants_other_type();
    let selected = current.incident_details.violation_types.clone();

    rsx! {
        if let Some(msg) = failure() {
            Alert { variant: AlertVariant::Error, "{msg}" }
        }

        Form { onsubmit: on_submit,
            FormSection { title: t(lang, "report.reporter_type").to_string(),
                FormRow {
                    FormSelect {
                        label: t(lang, "report.reporter_type").to_string(),
                        value: current.reporter_type.clone(),
                        error: err("reporter_type"),
                        onchange: move |evt: Event<FormData>| report.write().reporter_type = evt.value(),
                        for kind in REPORTER_TYPES.iter().copied() {
                            option { key: "{kind}", value: kind, {reporter_type_label(lang, kind)} }
                        }
                    }
                    Checkbox {
                        checked: current.anonymous,
                        label: t(lang, "report.anonymous").to_string(),
                        onchange: move |on: bool| report.write().anonymous = on,
                    }
                }
                if current.anonymous {
                    Input {
                        label: t(lang, "report.pseudonym").to_string(),
                        value: current.pseudonym.clone(),
                        on_input: move |evt: FormEvent| report.write().pseudonym = evt.value(),
                    }
                } else {
                    FormRow {
                        Input {
                            label: t(lang, "report.email").to_string(),
                            value: current.contact_info.email.clone(),
                            input_type: "email",
                            required: true,
                            error: err("email"),
                            on_input: move |evt: FormEvent| report.write().contact_info.email = evt.value(),
                        }
                        Input {
                            label: t(lang, "report.phone").to_string(),
                            value: current.contact_info.phone.clone(),
                            input_type: "tel",
                            placeholder: "0123456789",
                            error: err("phone"),
                            on_input: move |evt: FormEvent| report.write().contact_info.phone = evt.value(),
                        }
                        FormSelect {
                            label: t(lang, "report.preferred_contact").to_string(),
                            value: current.contact_info.preferred_contact.clone(),
                            onchange: move |evt: Event<FormData>| report.write().contact_info.preferred_contact = evt.value(),
                            for method in CONTACT_METHODS.iter().copied() {
                                option { key: "{method}", value: method, {contact_label(lang, method)} }
                            }
                        }
                    }
                }
            }

            FormSection { title: t(lang, "report.description").to_string(),
                FormRow {
                    Input {
                        label: t(lang, "report.date").to_string(),
                        value: current.incident_details.date.clone(),
                        input_type: "date",
                        required: true,
                        error: err("date"),
                        on_input: move |evt: FormEvent| report.write().incident_details.date = evt.value(),
                    }
                    Input {
                        label: t(lang, "report.location").to_string(),
                        value: current.incident_details.location_str.clone(),
                        required: true,
                        error: err("location"),
                        on_input: move |evt: FormEvent| report.write().incident_details.location_str = evt.value(),
                    }
                }
                Textarea {
                    label: t(lang, "report.description").to_string(),
                    value: current.incident_details.description.clone(),
                    required: true,
                    rtl: lang == Language::Ar,
                    error: err("description"),
                    on_input: move |evt: FormEvent| report.write().incident_details.description = evt.value(),
                }
            }

            FormSection { title: t(lang, "report.violation_types").to_string(),
                match &*case_types.read() {
                    Some(Ok(types)) => rsx! {
                        ViolationTypePicker {
                            types: types.clone(),
                            selected: selected.clone(),
                            lang,
                            onchange: move |(key, on): (String, bool)| {
                                set_violation_type(&mut report.write().incident_details.violation_types, &key, on);
                            },
                        }
                    },
                    Some(Err(e)) => rsx! {
                        p { class: "error-message", "{e.friendly_message()}" }
                    },
                    None => rsx! {
                        p { class: "muted", {t(lang, "common.loading")} }
                    },
                }
                Checkbox {
                    checked: wants_other,
                    label: t(lang, "report.other").to_string(),
                    onchange: move |on: bool| {
                        set_violation_type(&mut report.write().incident_details.violation_types, OTHER_VIOLATION_TYPE, on);
                    },
                }
                if wants_other || selected.is_empty() {
                    Input {
                        label: t(lang, "report.suggested_case_name").to_string(),
                        value: current.incident_details.suggested_case_name.clone(),
                        on_input: move |evt: FormEvent| report.write().incident_details.suggested_case_name = evt.value(),
                    }
                }
                if let Some(msg) = err("violation_types") {
                    p { class: "field-error", "{msg}" }
                }
            }

            FormSection { title: t(lang, "report.evidence").to_string(),
                input {
                    r#type: "file",
                    multiple: true,
                    accept: "image/*,video/*,audio/*,application/pdf",
                    onchange: on_files,
                }
                p { class: "muted",
                    "{current.evidence.len()} / {MAX_EVIDENCE_FILES}"
                }
                if let Some(msg) = err("evidence") {
                    p { class: "field-error", "{msg}" }
                }
            }

            Button { button_type: "submit", loading: saving(), {t(lang, "report.submit")} }
        }
    }
}

#[component]
fn ViolationTypePicker(
    types: Vec<CaseType>,
    selected: Vec<String>,
    lang: Language,
    onchange: EventHandler<(String, bool)>,
) -> Element {
    rsx! {
        div { class: "violation-type-grid",
            for kind in types.into_iter().filter(|k| !k.pending && !k.rejected) {
                Checkbox {
                    key: "{kind.id}",
                    checked: selected.iter().any(|s| s == kind.key()),
                    label: kind.display_name(lang).to_string(),
                    onchange: {
                        let key = kind.key().to_string();
                        move |on: bool| onchange.call((key.clone(), on))
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggling_types_keeps_order_without_duplicates() {
        let mut types = vec!["Raids".to_string()];
        set_violation_type(&mut types, "Torture", true);
        set_violation_type(&mut types, "Torture", true);
        assert_eq!(types, vec!["Raids", "Torture"]);
        set_violation_type(&mut types, "Raids", false);
        assert_eq!(types, vec!["Torture"]);
        set_violation_type(&mut types, "missing", false);
        assert_eq!(types, vec!["Torture"]);
    }
}
