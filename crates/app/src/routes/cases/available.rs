use dioxus::prelude::*;
use shared_types::{
    parse_timestamp, t, CaseListFilter, CaseResponse, Language, OPEN_CASE_STATUSES,
};
use shared_ui::{
    Alert, AlertVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, FormSelect, Input,
    PageHeader, PageTitle, SearchBar, SkeletonRows, StatusBadge,
};

use crate::format_helpers::{format_date_human, status_label};
use crate::routes::Route;
use crate::session::{guarded, use_api, use_language, use_session};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CaseSort {
    #[default]
    Newest,
    Oldest,
    Title,
}

impl CaseSort {
    fn from_key(key: &str) -> Self {
        match key {
            "oldest" => CaseSort::Oldest,
            "title" => CaseSort::Title,
            _ => CaseSort::Newest,
        }
    }
}

/// Client-side narrowing of the case list an institution picks from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseQuery {
    pub search: String,
    pub status: String,
    pub sort: CaseSort,
}

impl CaseQuery {
    fn matches(&self, case: &CaseResponse) -> bool {
        if !self.status.is_empty() && case.normalized_status() != self.status {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            case.display_id(),
            case.title.en.as_str(),
            case.title.ar.as_str(),
            case.location.region.en.as_str(),
            case.location.region.ar.as_str(),
            case.location.country.en.as_str(),
            case.location.country.ar.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Archived cases never appear; institutions cannot report against them.
    pub fn apply(&self, cases: &[CaseResponse], lang: Language) -> Vec<CaseResponse> {
        let mut out: Vec<CaseResponse> = cases
            .iter()
            .filter(|c| !c.is_archived() && self.matches(c))
            .cloned()
            .collect();
        match self.sort {
            CaseSort::Newest | CaseSort::Oldest => {
                out.sort_by_key(|c| c.date_reported.as_deref().and_then(parse_timestamp));
                if self.sort == CaseSort::Newest {
                    out.reverse();
                }
            }
            CaseSort::Title => {
                out.sort_by(|a, b| a.title.get(lang).to_lowercase().cmp(&b.title.get(lang).to_lowercase()))
            }
        }
        out
    }
}

/// Institution view of open cases, each with a shortcut to report on it.
#[component]
pub fn AvailableCases() -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();
    let mut query = use_signal(CaseQuery::default);

    let mut data = use_resource(move || {
        let api = api.clone();
        async move { guarded(session, api.list_cases(&CaseListFilter::default())).await }
    });

    let current = query.read().clone();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "nav.cases")} }
            }

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
                    for status in OPEN_CASE_STATUSES.iter().copied() {
                        option { key: "{status}", value: status, {status_label(lang, status)} }
                    }
                }
                FormSelect {
                    label: t(lang, "common.sort").to_string(),
                    onchange: move |evt: Event<FormData>| query.write().sort = CaseSort::from_key(&evt.value()),
                    option { value: "newest", {t(lang, "common.newest")} }
                    option { value: "oldest", {t(lang, "common.oldest")} }
                    option { value: "title", {t(lang, "case.title")} }
                }
            }

            match &*data.read() {
                Some(Ok(cases)) => {
                    let shown = current.apply(cases, lang);
                    rsx! {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { {t(lang, "common.case_id")} }
                                DataTableColumn { {t(lang, "case.title")} }
                                DataTableColumn { {t(lang, "case.status")} }
                                DataTableColumn { {t(lang, "case.location")} }
                                DataTableColumn { {t(lang, "case.date_reported")} }
                                DataTableColumn { "" }
                            }
                            DataTableBody {
                                if shown.is_empty() {
                                    DataTableEmpty { colspan: 6, {t(lang, "common.no_results")} }
                                }
                                for case in shown {
                                    DataTableRow { key: "{case.id}",
                                        DataTableCell { "{case.display_id()}" }
                                        DataTableCell { {case.title.get(lang)} }
                                        DataTableCell {
                                            StatusBadge {
                                                status: case.normalized_status().to_string(),
                                                label: status_label(lang, case.normalized_status()),
                                            }
                                        }
                                        DataTableCell { {case.location.region.get(lang)} }
                                        DataTableCell { {format_date_human(case.date_reported.as_deref().unwrap_or_default())} }
                                        DataTableCell {
                                            div { class: "row-actions",
                                                Link { to: Route::CaseDetails { case_id: case.id.clone() },
                                                    Button { variant: ButtonVariant::Ghost, {t(lang, "case.view")} }
                                                }
                                                Link { to: Route::InstitutionCreateReport { case_id: case.id.clone() },
                                                    Button { variant: ButtonVariant::Outline, {t(lang, "report.submit")} }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
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
