use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSettings;
use dioxus_free_icons::Icon;
use shared_types::{t, InstitutionProfile, Language};
use shared_ui::{
    Alert, AlertVariant, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent,
    CardHeader, CardTitle, DetailItem, DetailList, Form, FormRow, Input, PageActions, PageHeader,
    PageTitle, SkeletonRows, ToastOptions, use_toast,
};
use tracing::info;

use crate::session::{guarded, handle_error, use_api, use_language, use_session};

/// Blank optional text is stored as absent.
fn optional(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

/// The institution's own record, read-only until "edit" is pressed.
#[component]
pub fn InstitutionProfilePage() -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();

    let data = use_resource(move || {
        let api = api.clone();
        async move { guarded(session, api.get_institution_profile()).await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle {
                    Icon::<LdSettings> { icon: LdSettings, width: 20, height: 20 }
                    {t(lang, "profile.title")}
                }
            }
            match &*data.read() {
                Some(Ok(profile)) => rsx! {
                    ProfileEditor { initial: profile.clone() }
                },
                Some(Err(e)) => rsx! {
                    Alert { variant: AlertVariant::Error, "{e.friendly_message()}" }
                },
                None => rsx! {
                    SkeletonRows { rows: 6 }
                },
            }
        }
    }
}

#[component]
fn ProfileEditor(initial: InstitutionProfile) -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();
    let toast = use_toast();

    let mut saved = use_signal(|| initial.clone());
    let mut draft = use_signal(|| initial.clone());
    let mut editing = use_signal(|| initial.is_empty_profile());
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let on_submit = move |_| {
        let api = api.clone();
        let profile = draft.read().clone();
        if let Err(e) = profile.validate() {
            errors.set(e.field_errors.clone());
            return;
        }
        errors.set(HashMap::new());
        saving.set(true);
        spawn(async move {
            match api.update_institution_profile(&profile).await {
                Ok(updated) => {
                    info!(username = %updated.username, "institution profile saved");
                    saved.set(updated.clone());
                    draft.set(updated);
                    editing.set(false);
                    toast.success(t(lang, "profile.saved").to_string(), ToastOptions::new());
                }
                Err(e) => {
                    errors.set(e.field_errors.clone());
                    toast.error(handle_error(&e, session), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    if !editing() {
        return rsx! {
            ProfileView { profile: saved(), lang }
            PageActions {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| editing.set(true),
                    {t(lang, "case.edit")}
                }
            }
        };
    }

    let current = draft.read().clone();
    let err = move |field: &str| errors.read().get(field).cloned();

    rsx! {
        Form { onsubmit: on_submit,
            FormRow {
                Input {
                    label: t(lang, "profile.name_en").to_string(),
                    value: current.institution_name.en.clone(),
                    error: err("institution_name"),
                    on_input: move |evt: FormEvent| draft.write().institution_name.en = evt.value(),
                }
                Input {
                    label: t(lang, "profile.name_ar").to_string(),
                    value: current.institution_name.ar.clone(),
                    rtl: true,
                    on_input: move |evt: FormEvent| draft.write().institution_name.ar = evt.value(),
                }
            }
            FormRow {
                Input {
                    label: t(lang, "profile.email").to_string(),
                    value: current.email.clone().unwrap_or_default(),
                    input_type: "email",
                    error: err("email"),
                    on_input: move |evt: FormEvent| draft.write().email = optional(evt.value()),
                }
                Input {
                    label: t(lang, "profile.phone").to_string(),
                    value: current.phone.clone().unwrap_or_default(),
                    input_type: "tel",
                    on_input: move |evt: FormEvent| draft.write().phone = optional(evt.value()),
                }
                Input {
                    label: t(lang, "profile.website").to_string(),
                    value: current.website.clone().unwrap_or_default(),
                    input_type: "url",
                    placeholder: "https://",
                    error: err("website"),
                    on_input: move |evt: FormEvent| draft.write().website = optional(evt.value()),
                }
            }
            FormRow {
                Input {
                    label: t(lang, "profile.address_en").to_string(),
                    value: current.address.en.clone(),
                    on_input: move |evt: FormEvent| draft.write().address.en = evt.value(),
                }
                Input {
                    label: t(lang, "profile.address_ar").to_string(),
                    value: current.address.ar.clone(),
                    rtl: true,
                    on_input: move |evt: FormEvent| draft.write().address.ar = evt.value(),
                }
            }
            PageActions {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        draft.set(saved());
                        errors.set(HashMap::new());
                        editing.set(false);
                    },
                    {t(lang, "common.cancel")}
                }
                Button { button_type: "submit", loading: saving(), {t(lang, "common.save")} }
            }
        }
    }
}

#[component]
fn ProfileView(profile: InstitutionProfile, lang: Language) -> Element {
    let (active_label, active_variant) = if profile.active {
        (t(lang, "profile.active"), BadgeVariant::Success)
    } else {
        (t(lang, "profile.inactive"), BadgeVariant::Destructive)
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { {profile.institution_name.get(lang)} }
            }
            CardContent {
                DetailList {
                    DetailItem { label: t(lang, "profile.username").to_string(), value: profile.username.clone() }
                    DetailItem { label: t(lang, "profile.name_en").to_string(), value: profile.institution_name.en.clone() }
                    DetailItem { label: t(lang, "profile.name_ar").to_string(), value: profile.institution_name.ar.clone() }
                    DetailItem { label: t(lang, "case.status").to_string(),
                        Badge { variant: active_variant, {active_label} }
                    }
                    DetailItem { label: t(lang, "profile.email").to_string(), value: profile.email.clone().unwrap_or_default() }
                    DetailItem { label: t(lang, "profile.phone").to_string(), value: profile.phone.clone().unwrap_or_default() }
                    DetailItem { label: t(lang, "profile.website").to_string(),
                        if let Some(site) = profile.website.as_deref().filter(|s| !s.is_empty()) {
                            a { href: "{site}", target: "_blank", rel: "noopener noreferrer", "{site}" }
                        } else {
                            span { "-" }
                        }
                    }
                    DetailItem { label: t(lang, "profile.address_en").to_string(), value: profile.address.en.clone() }
                    DetailItem { label: t(lang, "profile.address_ar").to_string(), value: profile.address.ar.clone() }
                }
            }
        }
    }
}
