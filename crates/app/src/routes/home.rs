use dioxus::prelude::*;
use shared_types::{t, FeatureFlags};
use shared_ui::{Button, ButtonVariant};

use crate::routes::Route;
use crate::session::{use_language, use_session};

#[component]
pub fn Home() -> Element {
    let lang = use_language();
    let session = use_session();
    let flags: FeatureFlags = use_context();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        section { class: "home-hero",
            h1 { {t(lang, "app.name")} }
            p { class: "home-tagline", {t(lang, "home.tagline")} }
            div { class: "home-actions",
                if flags.public_reports {
                    Link { to: Route::SubmitReport {},
                        Button { variant: ButtonVariant::Primary, {t(lang, "nav.submit_report")} }
                    }
                }
                if flags.statistics {
                    Link { to: Route::Statistics {},
                        Button { variant: ButtonVariant::Outline, {t(lang, "nav.statistics")} }
                    }
                }
                if session.is_authenticated() {
                    Link { to: Route::Dashboard {},
                        Button { variant: ButtonVariant::Secondary, {t(lang, "nav.dashboard")} }
                    }
                } else {
                    Link { to: Route::Login {},
                        Button { variant: ButtonVariant::Secondary, {t(lang, "nav.login")} }
                    }
                }
            }
        }
    }
}
