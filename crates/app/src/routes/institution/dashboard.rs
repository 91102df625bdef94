use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdFileText};
use dioxus_free_icons::Icon;
use shared_types::{display_date, t, ReportQuery, ReportStats, REPORT_STATUSES};
use shared_ui::{
    Alert, AlertVariant, Card, CardContent, CardHeader, CardTitle, PageHeader, PageTitle,
    SkeletonRows, StatCard, StatusBadge,
};

use crate::components::{QuickAction, QuickActions};
use crate::format_helpers::status_label;
use crate::routes::Route;
use crate::session::{guarded, use_api, use_language, use_session};

const RECENT_REPORTS: usize = 5;

/// Institution overview: report counts and the latest filings.
#[component]
pub fn InstitutionDashboard() -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();

    let data = use_resource(move || {
        let api = api.clone();
        async move { guarded(session, api.list_report_cases()).await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "nav.dashboard")} }
            }

            QuickActions {
                QuickAction {
                    title: t(lang, "nav.cases").to_string(),
                    description: t(lang, "report.submit").to_string(),
                    to: Route::AvailableCases {},
                }
                QuickAction {
                    title: t(lang, "nav.create_case").to_string(),
                    description: t(lang, "report.suggested_case_name").to_string(),
                    to: Route::InstitutionCreateCase {},
                }
            }

            match &*data.read() {
                Some(Ok(reports)) => {
                    let stats = ReportStats::tally(reports);
                    let recent: Vec<_> = ReportQuery::default()
                        .apply(reports)
                        .into_iter()
                        .take(RECENT_REPORTS)
                        .collect();
                    rsx! {
                        div { class: "stat-grid",
                            StatCard { label: t(lang, "stats.total_reports").to_string(), value: stats.total.to_string() }
                            for status in REPORT_STATUSES.iter().copied() {
                                StatCard {
                                    key: "{status}",
                                    label: status_label(lang, status),
                                    value: stats.count(status).to_string(),
                                }
                            }
                        }
                        Card {
                            CardHeader {
                                CardTitle {
                                    Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                                    {t(lang, "report.list")}
                                }
                            }
                            CardContent {
                                if recent.is_empty() {
                                    p { class: "muted", {t(lang, "common.no_results")} }
                                }
                                ul { class: "recent-reports",
                                    for report in recent {
                                        li { key: "{report.id}",
                                            span { {display_date(report.created_at.as_deref().unwrap_or_default())} }
                                            " "
                                            span { "{report.incident_details.location_str}" }
                                            " "
                                            StatusBadge { status: report.status.clone(), label: status_label(lang, &report.status) }
                                        }
                                    }
                                }
                                Link { to: Route::InstitutionReports {},
                                    Icon::<LdBriefcase> { icon: LdBriefcase, width: 14, height: 14 }
                                    {t(lang, "nav.reports")}
                                }
                            }
                        }
                    }
                }
                Some(Err(e)) => rsx! {
                    Alert { variant: AlertVariant::Error, "{e.friendly_message()}" }
                },
                None => rsx! {
                    SkeletonRows { rows: 4 }
                },
            }
        }
    }
}
