use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdScale};
use dioxus_free_icons::Icon;
use shared_types::{t, CaseResponse, Language, Role};
use shared_ui::{
    Alert, AlertVariant, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent,
    CardHeader, CardTitle, DetailGrid, DetailItem, DetailList, PageActions, PageHeader,
    PageSubtitle, PageTitle, PriorityBadge, SkeletonRows, StatusBadge,
};

use crate::format_helpers::{format_date_human, priority_label, status_label};
use crate::routes::Route;
use crate::session::{guarded, use_api, use_language, use_session};

/// Read-only view of one case, in both languages.
#[component]
pub fn CaseDetails(case_id: String) -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();

    let id = case_id.clone();
    let data = use_resource(move || {
        let api = api.clone();
        let id = id.clone();
        async move { guarded(session, api.get_case(&id)).await }
    });

    let back = match session.role() {
        Role::Admin => Route::ManageCases {},
        Role::Institution => Route::AvailableCases {},
        _ => Route::Dashboard {},
    };

    rsx! {
        div { class: "container",
            match &*data.read() {
                Some(Ok(case)) => rsx! {
                    CaseSummary { case: case.clone(), role: session.role(), lang }
                },
                Some(Err(e)) => rsx! {
                    Alert { variant: AlertVariant::Error, "{e.friendly_message()}" }
                },
                None => rsx! {
                    SkeletonRows { rows: 6 }
                },
            }
            Link { to: back, {t(lang, "common.back")} }
        }
    }
}

#[component]
fn CaseSummary(case: CaseResponse, role: Role, lang: Language) -> Element {
    let status = case.normalized_status().to_string();
    let coordinates = format!(
        "{:.5}, {:.5}",
        case.location.coordinates.latitude(),
        case.location.coordinates.longitude()
    );
    let types = case.violation_types.clone().unwrap_or_default();
    let evidence = case.evidence.clone().unwrap_or_default();

    rsx! {
        PageHeader {
            PageTitle { {case.title.get(lang)} }
            PageSubtitle { "{case.display_id()}" }
            PageActions {
                if role == Role::Admin {
                    Link { to: Route::UpdateCase { case_id: case.id.clone() },
                        Button { variant: ButtonVariant::Outline, {t(lang, "case.edit")} }
                    }
                }
                if role == Role::Institution && !case.is_archived() {
                    Link { to: Route::InstitutionCreateReport { case_id: case.id.clone() },
                        Button { {t(lang, "report.submit")} }
                    }
                }
            }
        }

        DetailGrid {
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdScale> { icon: LdScale, width: 16, height: 16 }
                        {t(lang, "case.title")}
                    }
                }
                CardContent {
                    DetailList {
                        DetailItem { label: t(lang, "case.title_en").to_string(), value: case.title.en.clone() }
                        DetailItem { label: t(lang, "case.title_ar").to_string(),
                            span { dir: "rtl", "{case.title.ar}" }
                        }
                        DetailItem { label: t(lang, "case.status").to_string(),
                            StatusBadge { status: status.clone(), label: status_label(lang, &status) }
                        }
                        DetailItem { label: t(lang, "case.priority").to_string(),
                            PriorityBadge { priority: case.priority.clone(), label: priority_label(lang, &case.priority) }
                        }
                        DetailItem {
                            label: t(lang, "case.date_occurred").to_string(),
                            value: format_date_human(case.date_occurred.as_deref().unwrap_or_default()),
                        }
                        DetailItem {
                            label: t(lang, "case.date_reported").to_string(),
                            value: format_date_human(case.date_reported.as_deref().unwrap_or_default()),
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { {t(lang, "case.location")} }
                }
                CardContent {
                    DetailList {
                        DetailItem { label: t(lang, "case.country_en").to_string(), value: case.location.country.en.clone() }
                        DetailItem { label: t(lang, "case.country_ar").to_string(), value: case.location.country.ar.clone() }
                        DetailItem { label: t(lang, "case.region_en").to_string(), value: case.location.region.en.clone() }
                        DetailItem { label: t(lang, "case.region_ar").to_string(), value: case.location.region.ar.clone() }
                        DetailItem { label: t(lang, "case.latitude").to_string(), value: coordinates }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { {t(lang, "case.description")} }
            }
            CardContent {
                p { class: "case-description", dir: "ltr", "{case.description.en}" }
                if !case.description.ar.is_empty() {
                    p { class: "case-description", dir: "rtl", "{case.description.ar}" }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { {t(lang, "case.violation_types")} }
            }
            CardContent {
                if types.is_empty() {
                    p { class: "muted", "-" }
                }
                div { class: "row-actions",
                    for (i, kind) in types.iter().enumerate() {
                        Badge { key: "{i}", variant: BadgeVariant::Secondary, {kind.display(lang).to_string()} }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { {t(lang, "case.evidence")} }
            }
            CardContent {
                if evidence.is_empty() {
                    p { class: "muted", "-" }
                }
                ul { class: "evidence-list",
                    for (i, item) in evidence.iter().enumerate() {
                        li { key: "{i}",
                            Icon::<LdFileText> { icon: LdFileText, width: 14, height: 14 }
                            a { href: "{item.url}", target: "_blank", rel: "noopener noreferrer",
                                {item.description.clone().unwrap_or_else(|| item.url.clone())}
                            }
                            if let Some(kind) = item.kind.as_deref() {
                                span { class: "muted", " ({kind})" }
                            }
                        }
                    }
                }
            }
        }
    }
}
