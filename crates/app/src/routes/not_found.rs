use dioxus::prelude::*;
use shared_types::t;

use crate::routes::Route;
use crate::session::use_language;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let lang = use_language();
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", {t(lang, "not_found.title")} }
                p { class: "not-found-message",
                    code { "{path}" }
                }
                Link { to: Route::Home {},
                    class: "not-found-link",
                    {t(lang, "nav.home")}
                }
            }
        }
    }
}
