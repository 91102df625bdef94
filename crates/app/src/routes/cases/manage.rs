use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLock, LdLockOpen};
use dioxus_free_icons::Icon;
use shared_types::{t, CaseListFilter, CaseResponse, CASE_STATUSES};
use shared_ui::{
    Alert, AlertVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, FormSelect, Input,
    PageActions, PageHeader, PageTitle, PriorityBadge, SearchBar, SkeletonRows, StatusBadge,
    ToastOptions, use_toast,
};
use tracing::info;

use crate::format_helpers::{format_date_human, priority_label, status_label};
use crate::routes::Route;
use crate::session::{guarded, handle_error, use_api, use_language, use_session};

/// Admin case list with server-side filters and the archive toggle.
#[component]
pub fn ManageCases() -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();

    let mut draft = use_signal(CaseListFilter::default);
    let mut applied = use_signal(CaseListFilter::default);

    let mut data = use_resource(move || {
        let api = api.clone();
        let filter = applied();
        async move { guarded(session, api.list_cases(&filter)).await }
    });

    let current = draft.read().clone();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "nav.manage_cases")} }
                PageActions {
                    Link { to: Route::CreateCase {},
                        Button { {t(lang, "nav.create_case")} }
                    }
                }
            }

            SearchBar { onsubmit: move |_| applied.set(draft()),
                FormSelect {
                    label: t(lang, "case.status").to_string(),
                    value: current.status.clone(),
                    onchange: move |evt: Event<FormData>| draft.write().status = evt.value(),
                    option { value: "", {t(lang, "common.all")} }
                    for status in CASE_STATUSES.iter().copied() {
                        option { key: "{status}", value: status, {status_label(lang, status)} }
                    }
                }
                Input {
                    label: t(lang, "case.region").to_string(),
                    value: current.region.clone(),
                    on_input: move |evt: FormEvent| draft.write().region = evt.value(),
                }
                Input {
                    label: t(lang, "case.violation_types").to_string(),
                    value: current.violation_type.clone(),
                    on_input: move |evt: FormEvent| draft.write().violation_type = evt.value(),
                }
                Button { button_type: "submit", variant: ButtonVariant::Secondary, {t(lang, "common.search")} }
            }

            match &*data.read() {
                Some(Ok(cases)) => rsx! {
                    CaseAdminTable { cases: cases.clone(), on_changed: move |_| data.restart() }
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
fn CaseAdminTable(cases: Vec<CaseResponse>, on_changed: EventHandler<()>) -> Element {
    let lang = use_language();

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { {t(lang, "common.case_id")} }
                DataTableColumn { {t(lang, "case.title")} }
                DataTableColumn { {t(lang, "case.status")} }
                DataTableColumn { {t(lang, "case.priority")} }
                DataTableColumn { {t(lang, "case.region")} }
                DataTableColumn { {t(lang, "case.date_reported")} }
                DataTableColumn { "" }
            }
            DataTableBody {
                if cases.is_empty() {
                    DataTableEmpty { colspan: 7, {t(lang, "common.no_results")} }
                }
                for case in cases {
                    CaseAdminRow { key: "{case.id}", case, on_changed }
                }
            }
        }
    }
}

#[component]
fn CaseAdminRow(case: CaseResponse, on_changed: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();
    let toast = use_toast();
    let mut busy = use_signal(|| false);

    let id = case.id.clone();
    let archived = case.is_archived();
    let next_status = case.toggled_archive_status();
    let status = case.normalized_status().to_string();

    let toggle_archive = move |_| {
        let api = api.clone();
        let id = id.clone();
        busy.set(true);
        spawn(async move {
            let result = if archived {
                api.set_case_status(&id, next_status).await
            } else {
                api.archive_case(&id).await
            };
            match result {
                Ok(()) => {
                    info!(case_id = %id, status = next_status, "archive state toggled");
                    let msg = if archived { "case.unarchive" } else { "case.archive" };
                    toast.success(t(lang, msg).to_string(), ToastOptions::new());
                    on_changed.call(());
                }
                Err(e) => {
                    toast.error(handle_error(&e, session), ToastOptions::new());
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        DataTableRow {
            DataTableCell { "{case.display_id()}" }
            DataTableCell { {case.title.get(lang)} }
            DataTableCell {
                StatusBadge { status: status.clone(), label: status_label(lang, &status) }
            }
            DataTableCell {
                PriorityBadge { priority: case.priority.clone(), label: priority_label(lang, &case.priority) }
            }
            DataTableCell { {case.location.region.get(lang)} }
            DataTableCell { {format_date_human(case.date_reported.as_deref().unwrap_or_default())} }
            DataTableCell {
                div { class: "row-actions",
                    Link { to: Route::CaseDetails { case_id: case.id.clone() },
                        Button { variant: ButtonVariant::Ghost, {t(lang, "case.view")} }
                    }
                    Link { to: Route::UpdateCase { case_id: case.id.clone() },
                        Button { variant: ButtonVariant::Outline, {t(lang, "case.edit")} }
                    }
                    Button {
                        variant: if archived { ButtonVariant::Secondary } else { ButtonVariant::Destructive },
                        loading: busy(),
                        onclick: toggle_archive,
                        if archived {
                            Icon::<LdLockOpen> { icon: LdLockOpen, width: 14, height: 14 }
                            {t(lang, "case.unarchive")}
                        } else {
                            Icon::<LdLock> { icon: LdLock, width: 14, height: 14 }
                            {t(lang, "case.archive")}
                        }
                    }
                }
            }
        }
    }
}
