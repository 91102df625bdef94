use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{t, CaseForm, Language, CASE_PRIORITIES, CASE_STATUSES};
use shared_ui::{FormRow, FormSection, FormSelect, Input, Textarea};

use crate::format_helpers::{priority_label, status_label};

/// Bilingual case fields shared by the create and update pages.
///
/// English and Arabic inputs sit side by side; the Arabic half is always
/// entered right-to-left.
#[component]
pub fn CaseFormFields(
    form: Signal<CaseForm>,
    errors: Signal<HashMap<String, String>>,
    lang: Language,
) -> Element {
    let mut form = form;
    let current = form.read().clone();
    let err = move |field: &str| errors.read().get(field).cloned();

    rsx! {
        FormSection { title: t(lang, "case.title").to_string(),
            FormRow {
                Input {
                    label: t(lang, "case.title_en").to_string(),
                    value: current.title_en.clone(),
                    error: err("title"),
                    on_input: move |evt: FormEvent| form.write().title_en = evt.value(),
                }
                Input {
                    label: t(lang, "case.title_ar").to_string(),
                    value: current.title_ar.clone(),
                    rtl: true,
                    on_input: move |evt: FormEvent| form.write().title_ar = evt.value(),
                }
            }
            FormRow {
                Textarea {
                    label: t(lang, "case.description_en").to_string(),
                    value: current.description_en.clone(),
                    on_input: move |evt: FormEvent| form.write().description_en = evt.value(),
                }
                Textarea {
                    label: t(lang, "case.description_ar").to_string(),
                    value: current.description_ar.clone(),
                    rtl: true,
                    on_input: move |evt: FormEvent| form.write().description_ar = evt.value(),
                }
            }
            FormRow {
                FormSelect {
                    label: t(lang, "case.status").to_string(),
                    value: current.selected_status().to_string(),
                    error: err("status"),
                    onchange: move |evt: Event<FormData>| form.write().status = evt.value(),
                    for status in CASE_STATUSES.iter().copied() {
                        option {
                            key: "{status}",
                            value: status,
                            selected: status == current.selected_status(),
                            {status_label(lang, status)}
                        }
                    }
                }
                FormSelect {
                    label: t(lang, "case.priority").to_string(),
                    value: current.priority.clone(),
                    error: err("priority"),
                    onchange: move |evt: Event<FormData>| form.write().priority = evt.value(),
                    for priority in CASE_PRIORITIES.iter().copied() {
                        option { key: "{priority}", value: priority, {priority_label(lang, priority)} }
                    }
                }
                Input {
                    label: t(lang, "case.date_occurred").to_string(),
                    value: current.date_occurred.clone(),
                    placeholder: "YYYY-MM-DD",
                    on_input: move |evt: FormEvent| form.write().date_occurred = evt.value(),
                }
            }
        }

        FormSection { title: t(lang, "case.location").to_string(),
            FormRow {
                Input {
                    label: t(lang, "case.country_en").to_string(),
                    value: current.country_en.clone(),
                    on_input: move |evt: FormEvent| form.write().country_en = evt.value(),
                }
                Input {
                    label: t(lang, "case.country_ar").to_string(),
                    value: current.country_ar.clone(),
                    rtl: true,
                    on_input: move |evt: FormEvent| form.write().country_ar = evt.value(),
                }
            }
            FormRow {
                Input {
                    label: t(lang, "case.region_en").to_string(),
                    value: current.region_en.clone(),
                    on_input: move |evt: FormEvent| form.write().region_en = evt.value(),
                }
                Input {
                    label: t(lang, "case.region_ar").to_string(),
                    value: current.region_ar.clone(),
                    rtl: true,
                    on_input: move |evt: FormEvent| form.write().region_ar = evt.value(),
                }
            }
            FormRow {
                Input {
                    label: t(lang, "case.latitude").to_string(),
                    value: current.latitude.clone(),
                    input_type: "number",
                    error: err("latitude"),
                    on_input: move |evt: FormEvent| form.write().latitude = evt.value(),
                }
                Input {
                    label: t(lang, "case.longitude").to_string(),
                    value: current.longitude.clone(),
                    input_type: "number",
                    error: err("longitude"),
                    on_input: move |evt: FormEvent| form.write().longitude = evt.value(),
                }
            }
        }

        FormSection { title: t(lang, "case.violation_types").to_string(),
            Textarea {
                value: current.violation_types.clone(),
                placeholder: "Arbitrary detention | اعتقال تعسفي",
                rows: 3,
                on_input: move |evt: FormEvent| form.write().violation_types = evt.value(),
            }
        }
    }
}
