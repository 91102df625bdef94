use dioxus::prelude::*;
use shared_types::{t, CaseListFilter, CaseStats};
use shared_ui::{Alert, AlertVariant, PageHeader, PageSubtitle, PageTitle, Skeleton, StatCard};

use crate::components::{QuickAction, QuickActions};
use crate::format_helpers::status_label;
use crate::routes::Route;
use crate::session::{guarded, use_api, use_language, use_session};

/// Landing page after an admin signs in: shortcuts plus a case summary.
#[component]
pub fn AdminWelcome() -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();
    let name = session.username().unwrap_or_default();

    let summary = use_resource(move || {
        let api = api.clone();
        async move {
            guarded(session, api.list_cases(&CaseListFilter::default()))
                .await
                .map(|cases| CaseStats::tally(&cases))
        }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "welcome.admin")} }
                if !name.is_empty() {
                    PageSubtitle { "{name}" }
                }
            }

            QuickActions {
                QuickAction {
                    title: t(lang, "nav.manage_cases").to_string(),
                    description: t(lang, "nav.cases").to_string(),
                    to: Route::ManageCases {},
                }
                QuickAction {
                    title: t(lang, "nav.create_case").to_string(),
                    description: t(lang, "case.title").to_string(),
                    to: Route::CreateCase {},
                }
                QuickAction {
                    title: t(lang, "nav.review_reports").to_string(),
                    description: t(lang, "report.pending").to_string(),
                    to: Route::ReviewReports {},
                }
                QuickAction {
                    title: t(lang, "nav.case_types").to_string(),
                    description: t(lang, "case_type.title").to_string(),
                    to: Route::ReviewCaseTypes {},
                }
            }

            match &*summary.read() {
                Some(Ok(stats)) => rsx! {
                    div { class: "stat-grid",
                        StatCard { label: t(lang, "stats.total_cases").to_string(), value: stats.total.to_string() }
                        for status in ["new", "under_investigation", "resolved", "archived"] {
                            StatCard {
                                key: "{status}",
                                label: status_label(lang, status),
                                value: stats.count(status).to_string(),
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    Alert { variant: AlertVariant::Error, "{e.friendly_message()}" }
                },
                None => rsx! {
                    div { class: "stat-grid",
                        Skeleton { class: "stat-skeleton" }
                        Skeleton { class: "stat-skeleton" }
                        Skeleton { class: "stat-skeleton" }
                    }
                },
            }
        }
    }
}

/// Landing page after an institution signs in.
#[component]
pub fn InstitutionWelcome() -> Element {
    let session = use_session();
    let lang = use_language();
    let name = session.username().unwrap_or_default();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "welcome.institution")} }
                if !name.is_empty() {
                    PageSubtitle { "{name}" }
                }
            }

            QuickActions {
                QuickAction {
                    title: t(lang, "nav.dashboard").to_string(),
                    description: t(lang, "stats.by_status").to_string(),
                    to: Route::InstitutionDashboard {},
                }
                QuickAction {
                    title: t(lang, "nav.cases").to_string(),
                    description: t(lang, "common.search").to_string(),
                    to: Route::AvailableCases {},
                }
                QuickAction {
                    title: t(lang, "nav.create_case").to_string(),
                    description: t(lang, "report.suggested_case_name").to_string(),
                    to: Route::InstitutionCreateCase {},
                }
                QuickAction {
                    title: t(lang, "nav.reports").to_string(),
                    description: t(lang, "report.list").to_string(),
                    to: Route::InstitutionReports {},
                }
                QuickAction {
                    title: t(lang, "nav.profile").to_string(),
                    description: t(lang, "profile.title").to_string(),
                    to: Route::InstitutionProfilePage {},
                }
            }
        }
    }
}

/// Landing page after an investigator signs in. Investigators keep the
/// public navbar, so the shortcuts here are their way in.
#[component]
pub fn InvestigatorWelcome() -> Element {
    let lang = use_language();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "welcome.investigator")} }
                PageSubtitle { {t(lang, "welcome.investigator_subtitle")} }
            }

            QuickActions {
                QuickAction {
                    title: t(lang, "nav.dashboard").to_string(),
                    description: t(lang, "stats.by_status").to_string(),
                    to: Route::Dashboard {},
                }
                QuickAction {
                    title: t(lang, "nav.reports").to_string(),
                    description: t(lang, "report.list").to_string(),
                    to: Route::Reports {},
                }
            }
        }
    }
}
