use dioxus::prelude::*;

/// Native checkbox with a trailing label. `onchange` receives the new state.
#[component]
pub fn Checkbox(
    checked: bool,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onchange: EventHandler<bool>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "checkbox", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "checkbox-field",
            input {
                r#type: "checkbox",
                checked: checked,
                disabled: disabled,
                onchange: move |evt| onchange.call(evt.checked()),
                ..merged,
            }
            if !label.is_empty() {
                span { class: "checkbox-label", "{label}" }
            }
        }
    }
}
