use dioxus::prelude::*;

/// Vertical list of label/value rows for a record's detail view.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// One row inside a [`DetailList`].
///
/// Pass `value` for plain text, or children for badges and links. A blank
/// value renders as `-`.
#[component]
pub fn DetailItem(
    label: String,
    #[props(default)]
    value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());
    let shown = if value.trim().is_empty() { "-" } else { value.as_str() };

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value",
                if has_children {
                    {children}
                } else {
                    span { "{shown}" }
                }
            }
        }
    }
}

/// Responsive grid of cards.
#[component]
pub fn DetailGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-grid", {children} }
    }
}
