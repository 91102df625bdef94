use dioxus::prelude::*;

/// Top bar shell. The app decides which links go inside.
#[component]
pub fn Navbar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "m360-navbar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn NavbarBrand(to: String, children: Element) -> Element {
    rsx! {
        Link { class: "m360-navbar-brand", to: to, {children} }
    }
}

#[component]
pub fn NavbarLinks(children: Element) -> Element {
    rsx! {
        ul { class: "m360-navbar-links", {children} }
    }
}

/// One entry in [`NavbarLinks`]; `active` highlights the current page.
#[component]
pub fn NavbarLink(to: String, #[props(default = false)] active: bool, children: Element) -> Element {
    let class = if active {
        "m360-navbar-link active"
    } else {
        "m360-navbar-link"
    };
    rsx! {
        li {
            Link {
                class: class.to_string(),
                to: to,
                {children}
            }
        }
    }
}

/// Trailing group for the language toggle and login/logout.
#[component]
pub fn NavbarActions(children: Element) -> Element {
    rsx! {
        div { class: "m360-navbar-actions", {children} }
    }
}
