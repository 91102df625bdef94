use dioxus::prelude::*;
use shared_types::{t, FeatureFlags, ReportListFilter, ReportStats, REPORT_STATUSES};
use shared_ui::{
    Alert, AlertVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
    PageHeader, PageTitle, SkeletonRows, StatCard,
};

use crate::format_helpers::{format_snake_case_title, status_label};
use crate::session::{guarded, use_api, use_language, use_session};

/// Report counts by review status and violation type.
///
/// Public page: an anonymous visitor whose request is refused sees the
/// error inline rather than being sent to the login page.
#[component]
pub fn Statistics() -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();
    let flags: FeatureFlags = use_context();

    let mut data = use_resource(move || {
        let api = api.clone();
        async move {
            let filter = ReportListFilter::default();
            let request = api.list_reports(&filter);
            let result = if session.is_authenticated() {
                guarded(session, request).await
            } else {
                request.await
            };
            result.map(|reports| ReportStats::tally(&reports))
        }
    });

    if !flags.statistics {
        return rsx! {
            div { class: "container",
                Alert { variant: AlertVariant::Info, {t(lang, "not_found.title")} }
            }
        };
    }

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "nav.statistics")} }
            }

            match &*data.read() {
                Some(Ok(stats)) => rsx! {
                    div { class: "stat-grid",
                        StatCard { label: t(lang, "stats.total_reports").to_string(), value: stats.total.to_string() }
                        StatCard { label: t(lang, "report.pending").to_string(), value: stats.pending.to_string() }
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
                            CardTitle { {t(lang, "stats.by_violation")} }
                        }
                        CardContent {
                            DataTable {
                                DataTableHeader {
                                    DataTableColumn { {t(lang, "report.violation_types")} }
                                    DataTableColumn { "#" }
                                }
                                DataTableBody {
                                    if stats.by_violation_type.is_empty() {
                                        DataTableEmpty { colspan: 2, {t(lang, "common.no_results")} }
                                    }
                                    for (name, count) in stats.by_violation_type.iter() {
                                        DataTableRow { key: "{name}",
                                            DataTableCell { {format_snake_case_title(name)} }
                                            DataTableCell { "{count}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    Alert { variant: AlertVariant::Error, "{e.friendly_message()}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| data.restart(),
                        {t(lang, "common.retry")}
                    }
                },
                None => rsx! {
                    SkeletonRows { rows: 4 }
                },
            }
        }
    }
}
