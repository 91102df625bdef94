use client::ApiClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFolder, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_types::{t, CaseType};
use shared_ui::{
    Alert, AlertVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, PageHeader, PageSubtitle,
    PageTitle, SkeletonRows, ToastOptions, use_toast,
};
use tracing::info;

use crate::format_helpers::status_label;
use crate::session::{guarded, handle_error, use_api, use_language, use_session};

/// Admin queue of violation types suggested by reporters.
#[component]
pub fn ReviewCaseTypes() -> Element {
    let api = use_api();
    let session = use_session();
    let lang = use_language();

    let mut data = use_resource(move || {
        let api = api.clone();
        async move { guarded(session, api.list_case_types(true)).await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle {
                    Icon::<LdFolder> { icon: LdFolder, width: 20, height: 20 }
                    {t(lang, "case_type.title")}
                }
                PageSubtitle { {t(lang, "report.pending")} }
            }

            match &*data.read() {
                Some(Ok(types)) => rsx! {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { {t(lang, "case_type.name")} }
                            DataTableColumn { "" }
                        }
                        DataTableBody {
                            if types.is_empty() {
                                DataTableEmpty { colspan: 2, {t(lang, "common.no_results")} }
                            }
                            for kind in types.iter().cloned() {
                                SuggestionRow {
                                    key: "{kind.id}",
                                    kind,
                                    on_reviewed: move |_| data.restart(),
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
                    SkeletonRows { rows: 3 }
                },
            }
        }
    }
}

#[component]
fn SuggestionRow(kind: CaseType, on_reviewed: EventHandler<()>) -> Element {
    let session = use_session();
    let lang = use_language();
    let toast = use_toast();
    let mut busy = use_signal(|| false);
    let type_id = use_signal(|| kind.id.clone());

    let mut decide = move |approved: bool| {
        let api = consume_context::<ApiClient>();
        let id = type_id();
        busy.set(true);
        spawn(async move {
            match api.set_case_type_approval(&id, approved).await {
                Ok(()) => {
                    info!(case_type_id = %id, approved, "case type reviewed");
                    let outcome = if approved { "approved" } else { "rejected" };
                    toast.success(status_label(lang, outcome), ToastOptions::new());
                    on_reviewed.call(());
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
            DataTableCell { {kind.display_name(lang).to_string()} }
            DataTableCell {
                div { class: "row-actions",
                    Button {
                        variant: ButtonVariant::Success,
                        loading: busy(),
                        onclick: move |_| decide(true),
                        Icon::<LdUserCheck> { icon: LdUserCheck, width: 14, height: 14 }
                        {t(lang, "report.approve")}
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: busy(),
                        onclick: move |_| decide(false),
                        {t(lang, "report.reject")}
                    }
                }
            }
        }
    }
}
