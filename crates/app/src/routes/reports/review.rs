use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{display_date, t, ReportListFilter, ReportResponse, ReportStatusUpdate};
use shared_ui::{
    Alert, AlertVariant, Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader,
    CardTitle, DetailItem, DetailList, Input, PageHeader, PageSubtitle, PageTitle, SkeletonRows,
    ToastOptions, use_toast,
};
use tracing::info;

use crate::format_helpers::{reporter_type_label, status_label};
use crate::session::{guarded, handle_error, use_api, use_language, use_session};

/// Admin queue of reports awaiting approval.
#[component]
pub fn ReviewReports() -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();

    let mut data = use_resource(move || {
        let api = api.clone();
        async move { guarded(session, api.list_reports(&ReportListFilter::pending())).await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "nav.review_reports")} }
                PageSubtitle { {t(lang, "report.pending")} }
            }

            match &*data.read() {
                Some(Ok(reports)) if reports.is_empty() => rsx! {
                    Alert { variant: AlertVariant::Info, {t(lang, "common.no_results")} }
                },
                Some(Ok(reports)) => rsx! {
                    div { class: "stack",
                        for report in reports.iter().cloned() {
                            PendingReportCard {
                                key: "{report.id}",
                                report,
                                on_reviewed: move |_| data.restart(),
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
                    SkeletonRows {}
                },
            }
        }
    }
}

#[component]
fn PendingReportCard(report: ReportResponse, on_reviewed: EventHandler<()>) -> Element {
    let session = use_session();
    let lang = use_language();
    let toast = use_toast();

    let mut comment = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let report_id = use_signal(|| report.id.clone());

    let mut review = move |update: ReportStatusUpdate| {
        let api = consume_context::<ApiClient>();
        let id = report_id();
        busy.set(true);
        spawn(async move {
            match api.update_report_status(&id, &update).await {
                Ok(()) => {
                    info!(report_id = %id, status = %update.status, "report reviewed");
                    toast.success(status_label(lang, &update.status), ToastOptions::new());
                    on_reviewed.call(());
                }
                Err(e) => {
                    toast.error(handle_error(&e, session), ToastOptions::new());
                }
            }
            busy.set(false);
        });
    };

    let details = &report.incident_details;

    rsx! {
        Card {
            CardHeader {
                CardTitle { {display_date(report.created_at.as_deref().unwrap_or_default())} }
            }
            CardContent {
                DetailList {
                    DetailItem { label: t(lang, "report.reporter_type").to_string(), value: reporter_type_label(lang, &report.reporter_type) }
                    DetailItem { label: t(lang, "report.pseudonym").to_string(), value: report.reporter_label().to_string() }
                    DetailItem { label: t(lang, "report.date").to_string(), value: display_date(details.date.as_deref().unwrap_or_default()) }
                    DetailItem { label: t(lang, "report.location").to_string(), value: report.location_label().to_string() }
                    DetailItem { label: t(lang, "report.violation_types").to_string(), value: details.violation_types.join(", ") }
                    DetailItem { label: t(lang, "report.suggested_case_name").to_string(), value: details.suggested_case_name.clone() }
                    DetailItem { label: t(lang, "report.description").to_string(), value: details.description.clone() }
                    DetailItem { label: t(lang, "report.evidence").to_string(), value: report.evidence_ids.len().to_string() }
                }
                Input {
                    label: t(lang, "report.comment").to_string(),
                    value: comment(),
                    on_input: move |evt: FormEvent| comment.set(evt.value()),
                }
            }
            CardFooter {
                Button {
                    variant: ButtonVariant::Success,
                    loading: busy(),
                    onclick: move |_| review(ReportStatusUpdate::approve()),
                    {t(lang, "report.approve")}
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: busy(),
                    onclick: move |_| review(ReportStatusUpdate::reject(&comment.read())),
                    {t(lang, "report.reject")}
                }
            }
        }
    }
}
