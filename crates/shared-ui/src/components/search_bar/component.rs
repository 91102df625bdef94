use dioxus::prelude::*;

/// Filter row above a list: search box, selects and a reset button.
#[component]
pub fn SearchBar(
    #[props(default)] onsubmit: Option<EventHandler<FormEvent>>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            class: "search-bar",
            role: "search",
            onsubmit: move |evt| {
                evt.prevent_default();
                if let Some(handler) = &onsubmit {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
