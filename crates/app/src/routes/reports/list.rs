use dioxus::prelude::*;
use shared_types::{
    display_date, t, ReportListFilter, ReportQuery, ReportResponse, ReportSort, REPORT_STATUSES,
};
use shared_ui::{
    Alert, AlertVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, FormSelect, Input,
    PageHeader, PageTitle, SearchBar, SkeletonRows, StatusBadge,
};

use crate::format_helpers::{format_snake_case_title, reporter_type_label, status_label};
use crate::session::{guarded, use_api, use_language, use_session};

/// Reports visible to the signed-in user, narrowed on the server by date
/// range and location and then locally by [`ReportQuery`].
#[component]
pub fn Reports() -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();

    let mut draft = use_signal(ReportListFilter::default);
    let mut applied = use_signal(ReportListFilter::default);

    let mut data = use_resource(move || {
        let api = api.clone();
        let filter = applied();
        async move { guarded(session, api.list_reports(&filter)).await }
    });

    let current = draft.read().clone();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "report.list")} }
            }

            SearchBar { onsubmit: move |_| applied.set(draft()),
                Input {
                    label: t(lang, "report.start_date").to_string(),
                    value: current.start_date.clone(),
                    input_type: "date",
                    on_input: move |evt: FormEvent| draft.write().start_date = evt.value(),
                }
                Input {
                    label: t(lang, "report.end_date").to_string(),
                    value: current.end_date.clone(),
                    input_type: "date",
                    on_input: move |evt: FormEvent| draft.write().end_date = evt.value(),
                }
                Input {
                    label: t(lang, "report.location").to_string(),
                    value: current.location.clone(),
                    on_input: move |evt: FormEvent| draft.write().location = evt.value(),
                }
                Button { button_type: "submit", variant: ButtonVariant::Secondary, {t(lang, "common.search")} }
            }

            match &*data.read() {
                Some(Ok(reports)) => rsx! {
                    ReportBrowser { reports: reports.clone() }
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

/// Reports filed by the signed-in institution.
#[component]
pub fn InstitutionReports() -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();

    let mut data = use_resource(move || {
        let api = api.clone();
        async move { guarded(session, api.list_report_cases()).await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "nav.reports")} }
            }

            match &*data.read() {
                Some(Ok(reports)) => rsx! {
                    ReportBrowser { reports: reports.clone() }
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

/// Every violation type that occurs in `reports`, sorted and deduplicated.
fn violation_type_options(reports: &[ReportResponse]) -> Vec<String> {
    let mut types: Vec<String> = reports
        .iter()
        .flat_map(|r| r.incident_details.violation_types.iter().cloned())
        .filter(|v| !v.is_empty())
        .collect();
    types.sort();
    types.dedup();
    types
}

/// Search, filter and sort controls over an already-fetched list.
#[component]
fn ReportBrowser(reports: Vec<ReportResponse>) -> Element {
    let lang = use_language();
    let mut query = use_signal(ReportQuery::default);

    let current = query.read().clone();
    let shown = current.apply(&reports);
    let type_options = violation_type_options(&reports);

    rsx! {
        SearchBar {
            Input {
                label: t(lang, "common.search").to_string(),
                value: current.search.clone(),
                input_type: "search",
                on_input: move |evt: FormEvent| query.write().search = evt.value(),
            }
            FormSelect {
                label: t(lang, "case.status").to_string(),
                value: current.status.clone(),
                onchange: move |evt: Event<FormData>| query.write().status = evt.value(),
                option { value: "", {t(lang, "common.all")} }
                for status in REPORT_STATUSES.iter().copied() {
                    option { key: "{status}", value: status, {status_label(lang, status)} }
                }
            }
            FormSelect {
                label: t(lang, "report.violation_types").to_string(),
                value: current.violation_type.clone(),
                onchange: move |evt: Event<FormData>| query.write().violation_type = evt.value(),
                option { value: "", {t(lang, "common.all")} }
                for kind in type_options {
                    option { key: "{kind}", value: "{kind}", {format_snake_case_title(&kind)} }
                }
            }
            FormSelect {
                label: t(lang, "common.sort").to_string(),
                value: current.sort.as_str().to_string(),
                onchange: move |evt: Event<FormData>| query.write().sort = ReportSort::from_key(&evt.value()),
                option { value: ReportSort::Newest.as_str(), {t(lang, "common.newest")} }
                option { value: ReportSort::CaseId.as_str(), {t(lang, "common.case_id")} }
            }
        }

        DataTable {
            DataTableHeader {
                DataTableColumn { {t(lang, "report.date")} }
                DataTableColumn { {t(lang, "report.reporter_type")} }
                DataTableColumn { {t(lang, "report.description")} }
                DataTableColumn { {t(lang, "report.location")} }
                DataTableColumn { {t(lang, "report.violation_types")} }
                DataTableColumn { {t(lang, "case.status")} }
            }
            DataTableBody {
                if shown.is_empty() {
                    DataTableEmpty { colspan: 6, {t(lang, "common.no_results")} }
                }
                for report in shown {
                    DataTableRow { key: "{report.id}",
                        DataTableCell { {display_date(report.created_at.as_deref().unwrap_or_default())} }
                        DataTableCell {
                            {reporter_type_label(lang, &report.reporter_type)}
                            br {}
                            span { class: "muted", {report.reporter_label().to_string()} }
                        }
                        DataTableCell { "{report.incident_details.description}" }
                        DataTableCell { {report.location_label().to_string()} }
                        DataTableCell { {report.incident_details.violation_types.join(", ")} }
                        DataTableCell {
                            StatusBadge { status: report.status.clone(), label: status_label(lang, &report.status) }
                            if let Some(comment) = report.rejection_comment.as_deref().filter(|c| !c.is_empty()) {
                                p { class: "muted", "{comment}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
