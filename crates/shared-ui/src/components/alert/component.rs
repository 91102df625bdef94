use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Info,
    Success,
    Error,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Info => "info",
            AlertVariant::Success => "success",
            AlertVariant::Error => "error",
        }
    }

    fn role(&self) -> &'static str {
        match self {
            AlertVariant::Error => "alert",
            _ => "status",
        }
    }
}

/// Inline message box for page-level errors and confirmations.
#[component]
pub fn Alert(
    #[props(default)] variant: AlertVariant,
    #[props(default)] title: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "alert", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: variant.role(),
            ..merged,
            if !title.is_empty() {
                strong { class: "alert-title", "{title}" }
            }
            div { class: "alert-body", {children} }
        }
    }
}
