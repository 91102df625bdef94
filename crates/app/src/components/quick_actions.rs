use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::routes::Route;

/// Grid of navigation cards used by the welcome and dashboard pages.
#[component]
pub fn QuickActions(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./quick_actions.css") }
        div { class: "quick-actions", {children} }
    }
}

#[component]
pub fn QuickAction(title: String, description: String, to: Route) -> Element {
    rsx! {
        Link { class: "quick-action", to: to,
            Card {
                CardHeader {
                    CardTitle { "{title}" }
                }
                CardContent {
                    CardDescription { "{description}" }
                }
            }
        }
    }
}
