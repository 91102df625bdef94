use dioxus::prelude::*;
use shared_types::normalize_status;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Badge colour for a case or report status. Legacy statuses are
/// normalized first; unknown values render as outline.
pub fn status_variant(status: &str) -> BadgeVariant {
    match normalize_status(status) {
        "new" => BadgeVariant::Primary,
        "under_investigation" => BadgeVariant::Warning,
        "resolved" | "approved" => BadgeVariant::Success,
        "rejected" => BadgeVariant::Destructive,
        "archived" => BadgeVariant::Secondary,
        _ => BadgeVariant::Outline,
    }
}

pub fn priority_variant(priority: &str) -> BadgeVariant {
    match priority {
        "high" => BadgeVariant::Destructive,
        "medium" => BadgeVariant::Warning,
        "low" => BadgeVariant::Secondary,
        _ => BadgeVariant::Outline,
    }
}

/// Inline label for short statuses and tags.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Badge coloured by status; `label` is the already translated text.
#[component]
pub fn StatusBadge(status: String, label: String) -> Element {
    rsx! {
        Badge { variant: status_variant(&status), "{label}" }
    }
}

#[component]
pub fn PriorityBadge(priority: String, label: String) -> Element {
    rsx! {
        Badge { variant: priority_variant(&priority), "{label}" }
    }
}
