use dioxus::prelude::*;

#[component]
pub fn NotFoundPage() -> Element {
    rsx! {
        main {
            section { class: "hero hero-full",
                div { class: "container",
                    div { class: "hero-content text-center",
                        p { class: "section-label", "Error 404" }
                        h1 { class: "error-code", "404" }
                        p { class: "lead", "Page Not Found" }
                        p { class: "text-tertiary",
                            "The page you are looking for might have been removed, had its name changed, or is temporarily unavailable."
                        }
                        a { href: "/", class: "cta-button button-large", "Return to Homepage" }
                    }
                }
            }
        }
    }
}
