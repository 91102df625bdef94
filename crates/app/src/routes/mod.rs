pub mod case_types;
pub mod cases;
pub mod dashboard;
pub mod home;
pub mod institution;
pub mod login;
pub mod not_found;
pub mod reports;
pub mod statistics;
pub mod welcome;

use client::access::{self, GuardDecision};
use dioxus::prelude::*;
use tracing::info;

use crate::components::AppNavbar;
use crate::session::{use_language, use_session};

use case_types::review::ReviewCaseTypes;
use cases::available::AvailableCases;
use cases::create::CreateCase;
use cases::detail::CaseDetails;
use cases::manage::ManageCases;
use cases::update::UpdateCase;
use dashboard::Dashboard;
use home::Home;
use institution::dashboard::InstitutionDashboard;
use institution::profile::InstitutionProfilePage;
use login::Login;
use not_found::NotFound;
use reports::list::{InstitutionReports, Reports};
use reports::review::ReviewReports;
use reports::submit::{InstitutionCreateCase, InstitutionCreateReport, SubmitReport};
use statistics::Statistics;
use welcome::{AdminWelcome, InstitutionWelcome, InvestigatorWelcome};

/// Application routes. Who may open each path lives in
/// `client::access::ROUTE_ACCESS`, checked once in [`RouterLayout`].
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(RouterLayout)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/statistics")]
    Statistics {},
    #[route("/submit-report")]
    SubmitReport {},
    #[route("/reports")]
    Reports {},
    #[route("/cases/:case_id")]
    CaseDetails { case_id: String },
    // ── Admin ──
    #[route("/admin-welcome")]
    AdminWelcome {},
    #[route("/admin/cases")]
    ManageCases {},
    #[route("/admin/cases/create")]
    CreateCase {},
    #[route("/admin/cases/:case_id/edit")]
    UpdateCase { case_id: String },
    #[route("/admin-reports")]
    ReviewReports {},
    #[route("/admin/case-types")]
    ReviewCaseTypes {},
    // ── Institution ──
    #[route("/institution-welcome")]
    InstitutionWelcome {},
    #[route("/institution-dashboard")]
    InstitutionDashboard {},
    #[route("/cases")]
    AvailableCases {},
    #[route("/institution-create-report/:case_id")]
    InstitutionCreateReport { case_id: String },
    #[route("/institution-create-case")]
    InstitutionCreateCase {},
    #[route("/institution-reports")]
    InstitutionReports {},
    #[route("/institution-profile")]
    InstitutionProfilePage {},
    // ── Investigator ──
    #[route("/investigator-welcome")]
    InvestigatorWelcome {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Guard plus chrome for every page.
///
/// Evaluates the access table against the stored session, then draws the
/// navbar that matches the persisted role. Pages below trust this check.
#[component]
fn RouterLayout() -> Element {
    let route: Route = use_route();
    let session = use_session();
    let lang = use_language();
    let path = route.to_string();

    let decision = access::evaluate(&path, session.current.read().as_ref());
    if decision == GuardDecision::RedirectToLogin {
        info!(%path, role = %session.role(), "access denied; redirecting to login");
        navigator().replace(Route::Login {});
        return rsx! {
            div { class: "guard-redirect",
                p { "Redirecting to login..." }
            }
        };
    }

    let navbar = access::navbar_for(&path, session.role());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        div { class: "app-shell", dir: lang.dir(), lang: lang.as_str(),
            if let Some(variant) = navbar {
                AppNavbar { variant }
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
