//! Contact page
//!
//! The consultation form is markup only: it posts to `#` and nothing
//! handles the submission.

use dioxus::prelude::*;
use site_core::SiteConfig;

use crate::components::{Breadcrumbs, Crumb, SocialLinks};

const PRACTICE_TYPES: [(&str, &str); 5] = [
    ("plastic-surgery", "Plastic Surgery"),
    ("medical-spa", "Medical Spa"),
    ("coolsculpting", "CoolSculpting"),
    ("dermatology", "Dermatology"),
    ("other", "Other Aesthetic Practice"),
];

#[component]
pub fn ContactPage(config: SiteConfig) -> Element {
    let phone_href = config.phone_href();

    rsx! {
        main {
            Breadcrumbs { trail: vec![Crumb::link("Home", "/"), Crumb::current("Contact")] }

            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        p { class: "section-label", "Contact" }
                        h1 { "Let's Discuss Your Growth" }
                        p {
                            "Ready to grow your aesthetic practice? Get in touch with our team to schedule a consultation."
                        }
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    div { class: "grid grid-2",
                        div {
                            h2 { "Schedule a Consultation" }
                            p { class: "text-tertiary",
                                "Fill out the form below and a member of our team will be in touch within one business day."
                            }
                            ConsultationForm {}
                        }

                        div {
                            div { class: "card",
                                h3 { "Get In Touch" }
                                div { class: "contact-item",
                                    h6 { "Phone" }
                                    a { href: "{phone_href}", "{config.phone}" }
                                }
                                div { class: "contact-item",
                                    h6 { "Email" }
                                    a { href: "mailto:{config.email}", "{config.email}" }
                                }
                                div { class: "contact-item",
                                    h6 { "Location" }
                                    p { class: "mb-0",
                                        "{config.address.city}, {config.address.state}"
                                    }
                                }
                            }
                            div { class: "card",
                                h3 { "Follow Us" }
                                SocialLinks { config: config.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ConsultationForm() -> Element {
    rsx! {
        form { action: "#", method: "POST",
            div { class: "grid grid-2",
                div { class: "form-group",
                    label { r#for: "name", class: "form-label", "Name *" }
                    input { r#type: "text", id: "name", name: "name", class: "form-input", required: true }
                }
                div { class: "form-group",
                    label { r#for: "email", class: "form-label", "Email *" }
                    input { r#type: "email", id: "email", name: "email", class: "form-input", required: true }
                }
            }
            div { class: "grid grid-2",
                div { class: "form-group",
                    label { r#for: "phone", class: "form-label", "Phone" }
                    input { r#type: "tel", id: "phone", name: "phone", class: "form-input" }
                }
                div { class: "form-group",
                    label { r#for: "practice", class: "form-label", "Practice Name" }
                    input { r#type: "text", id: "practice", name: "practice", class: "form-input" }
                }
            }
            div { class: "form-group",
                label { r#for: "practice-type", class: "form-label", "Practice Type" }
                select { id: "practice-type", name: "practice-type", class: "form-input",
                    option { value: "", "Select your practice type..." }
                    for (value, label) in PRACTICE_TYPES {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
            }
            div { class: "form-group",
                label { r#for: "message", class: "form-label", "How can we help? *" }
                textarea {
                    id: "message",
                    name: "message",
                    class: "form-textarea",
                    placeholder: "Tell us about your practice and goals...",
                    required: true,
                }
            }
            button { r#type: "submit", class: "cta-button button-large", "Submit Request" }
        }
    }
}
