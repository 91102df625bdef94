use dioxus::prelude::*;
use shared_types::{t, Role};
use shared_ui::{PageHeader, PageTitle};

use crate::components::{QuickAction, QuickActions};
use crate::routes::Route;
use crate::session::{use_language, use_session};

/// Quick-action dashboard for any signed-in user. The shortcuts follow the
/// persisted role.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let lang = use_language();
    let role = session.role();

    let (cases_route, report_route) = match role {
        Role::Admin => (Route::ManageCases {}, Route::ReviewReports {}),
        Role::Institution => (Route::AvailableCases {}, Route::InstitutionCreateCase {}),
        Role::Investigator | Role::Public => (Route::Reports {}, Route::SubmitReport {}),
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {t(lang, "nav.dashboard")} }
            }
            QuickActions {
                QuickAction {
                    title: t(lang, "nav.cases").to_string(),
                    description: t(lang, "case.view").to_string(),
                    to: cases_route,
                }
                QuickAction {
                    title: t(lang, "nav.submit_report").to_string(),
                    description: t(lang, "report.title").to_string(),
                    to: report_route,
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
