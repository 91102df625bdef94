//! The three navbar variants. Which one renders is decided by
//! `client::access::navbar_for` in the router layout.

use client::NavbarVariant;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdBriefcase, LdFileText, LdFolder, LdLayoutDashboard, LdLock, LdLockOpen, LdScale,
    LdSearch, LdSettings, LdShield,
};
use dioxus_free_icons::Icon;
use shared_types::{t, FeatureFlags};
use shared_ui::{Button, ButtonVariant, Navbar, NavbarActions, NavbarBrand, NavbarLink, NavbarLinks};

use crate::routes::Route;
use crate::session::{logout, use_api, use_language, use_session, LanguageState};

#[component]
pub fn AppNavbar(variant: NavbarVariant) -> Element {
    match variant {
        NavbarVariant::Admin => rsx! { AdminNavbar {} },
        NavbarVariant::Institution => rsx! { InstitutionNavbar {} },
        NavbarVariant::Public => rsx! { PublicNavbar {} },
    }
}

#[component]
fn AdminNavbar() -> Element {
    let route: Route = use_route();
    let lang = use_language();

    rsx! {
        Navbar { class: "navbar-admin",
            NavbarBrand { to: Route::AdminWelcome {}.to_string(), {t(lang, "app.name")} }
            NavbarLinks {
                NavbarLink { to: Route::AdminWelcome {}.to_string(), active: matches!(route, Route::AdminWelcome {}),
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                    {t(lang, "nav.dashboard")}
                }
                NavbarLink {
                    to: Route::ManageCases {}.to_string(),
                    active: matches!(route, Route::ManageCases {} | Route::CreateCase {} | Route::UpdateCase { .. }),
                    Icon::<LdBriefcase> { icon: LdBriefcase, width: 16, height: 16 }
                    {t(lang, "nav.manage_cases")}
                }
                NavbarLink { to: Route::ReviewReports {}.to_string(), active: matches!(route, Route::ReviewReports {}),
                    Icon::<LdShield> { icon: LdShield, width: 16, height: 16 }
                    {t(lang, "nav.review_reports")}
                }
                NavbarLink { to: Route::ReviewCaseTypes {}.to_string(), active: matches!(route, Route::ReviewCaseTypes {}),
                    Icon::<LdFolder> { icon: LdFolder, width: 16, height: 16 }
                    {t(lang, "nav.case_types")}
                }
                NavbarLink { to: Route::Reports {}.to_string(), active: matches!(route, Route::Reports {}),
                    Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                    {t(lang, "nav.reports")}
                }
            }
            SessionActions {}
        }
    }
}

#[component]
fn InstitutionNavbar() -> Element {
    let route: Route = use_route();
    let lang = use_language();

    rsx! {
        Navbar { class: "navbar-institution",
            NavbarBrand { to: Route::InstitutionWelcome {}.to_string(), {t(lang, "app.name")} }
            NavbarLinks {
                NavbarLink {
                    to: Route::InstitutionDashboard {}.to_string(),
                    active: matches!(route, Route::InstitutionDashboard {} | Route::InstitutionWelcome {}),
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                    {t(lang, "nav.dashboard")}
                }
                NavbarLink {
                    to: Route::AvailableCases {}.to_string(),
                    active: matches!(route, Route::AvailableCases {} | Route::CaseDetails { .. } | Route::InstitutionCreateReport { .. }),
                    Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                    {t(lang, "nav.cases")}
                }
                NavbarLink { to: Route::InstitutionCreateCase {}.to_string(), active: matches!(route, Route::InstitutionCreateCase {}),
                    Icon::<LdBriefcase> { icon: LdBriefcase, width: 16, height: 16 }
                    {t(lang, "nav.create_case")}
                }
                NavbarLink { to: Route::InstitutionReports {}.to_string(), active: matches!(route, Route::InstitutionReports {}),
                    Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                    {t(lang, "nav.reports")}
                }
                NavbarLink { to: Route::InstitutionProfilePage {}.to_string(), active: matches!(route, Route::InstitutionProfilePage {}),
                    Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                    {t(lang, "nav.profile")}
                }
            }
            SessionActions {}
        }
    }
}

#[component]
fn PublicNavbar() -> Element {
    let route: Route = use_route();
    let lang = use_language();
    let flags: FeatureFlags = use_context();

    rsx! {
        Navbar { class: "navbar-public",
            NavbarBrand { to: Route::Home {}.to_string(), {t(lang, "app.name")} }
            NavbarLinks {
                NavbarLink { to: Route::Home {}.to_string(), active: matches!(route, Route::Home {}),
                    {t(lang, "nav.home")}
                }
                if flags.public_reports {
                    NavbarLink { to: Route::SubmitReport {}.to_string(), active: matches!(route, Route::SubmitReport {}),
                        Icon::<LdBookOpen> { icon: LdBookOpen, width: 16, height: 16 }
                        {t(lang, "nav.submit_report")}
                    }
                }
                if flags.statistics {
                    NavbarLink { to: Route::Statistics {}.to_string(), active: matches!(route, Route::Statistics {}),
                        Icon::<LdScale> { icon: LdScale, width: 16, height: 16 }
                        {t(lang, "nav.statistics")}
                    }
                }
            }
            SessionActions {}
        }
    }
}

/// Language switch plus login or logout, shared by all three navbars.
#[component]
fn SessionActions() -> Element {
    let api = use_api();
    let session = use_session();
    let mut language: LanguageState = use_context();
    let flags: FeatureFlags = use_context();
    let lang = language.get();

    rsx! {
        NavbarActions {
            if flags.language_toggle {
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "language-toggle",
                    onclick: move |_| language.toggle(),
                    {lang.toggle().display_name()}
                }
            }
            if session.is_authenticated() {
                if let Some(name) = session.username() {
                    span { class: "navbar-user", "{name}" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| logout(&api, session),
                    Icon::<LdLockOpen> { icon: LdLockOpen, width: 16, height: 16 }
                    {t(lang, "nav.logout")}
                }
            } else {
                Link { to: Route::Login {},
                    Button { variant: ButtonVariant::Primary,
                        Icon::<LdLock> { icon: LdLock, width: 16, height: 16 }
                        {t(lang, "nav.login")}
                    }
                }
            }
        }
    }
}
