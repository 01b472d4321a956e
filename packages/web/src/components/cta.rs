//! Call-to-action sections

use dioxus::prelude::*;

/// Section styling. `Band` is the full-width brand-colour strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CtaStyle {
    #[default]
    Section,
    Band,
}

/// Heading, body copy and a single button linking to the contact page
#[component]
pub fn CtaSection(
    #[props(into)] heading: String,
    #[props(into)] body: String,
    #[props(default, into)] label: String,
    #[props(default)] style: CtaStyle,
    #[props(default = "Schedule Consultation".to_string(), into)] button: String,
) -> Element {
    let class = match style {
        CtaStyle::Section => "cta-section",
        CtaStyle::Band => "section cta-band",
    };

    rsx! {
        section { class: "{class}",
            div { class: "container",
                if !label.is_empty() {
                    p { class: "section-label", "{label}" }
                }
                h2 { "{heading}" }
                p { "{body}" }
                a { href: "/contact", class: "cta-button button-large", "{button}" }
            }
        }
    }
}
