use dioxus::prelude::*;

/// Multi-line text input with an optional inline error.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = 4)] rows: u32,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(default = false)] rtl: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: if invalid { "textarea-wrapper invalid" } else { "textarea-wrapper" },
            if !label.is_empty() {
                label { class: "textarea-label",
                    "{label}"
                    if required {
                        span { class: "textarea-required", " *" }
                    }
                }
            }
            textarea {
                value: value,
                placeholder: placeholder,
                rows: "{rows}",
                disabled: disabled,
                required: required,
                dir: if rtl { "rtl" } else { "auto" },
                "aria-invalid": "{invalid}",
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}
