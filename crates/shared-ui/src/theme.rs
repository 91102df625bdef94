use dioxus::prelude::*;
use shared_types::Language;

/// Set `lang`/`dir` for the starting language. Render once near the root.
#[component]
pub fn ThemeSeed(#[props(default)] language: Language) -> Element {
    use_effect(move || set_document_direction(language));

    rsx! {}
}

/// Script that sets `lang` and `dir` on `<html>`.
pub fn direction_script(language: Language) -> String {
    format!(
        "document.documentElement.setAttribute('lang', '{}'); \
         document.documentElement.setAttribute('dir', '{}');",
        language.as_str(),
        language.dir(),
    )
}

/// Flip the whole document between LTR and RTL for `language`.
pub fn set_document_direction(language: Language) {
    document::eval(&direction_script(language));
}
