//! Page shell: document, header and footer

use chrono::Datelike;
use dioxus::prelude::*;
use site_core::seo::PageMetadata;
use site_core::SiteConfig;

use super::{HeadTags, JsonLdScript};

/// Stylesheet path shared by every page
pub const STYLESHEET_PATH: &str = "/styles.css";

pub const STYLESHEET: &str = include_str!("../../assets/styles.css");

/// Full HTML document wrapping a page body
#[component]
pub fn Document(
    config: SiteConfig,
    metadata: PageMetadata,
    #[props(!optional)] json_ld: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                HeadTags { metadata: metadata.clone() }
                link { rel: "stylesheet", href: STYLESHEET_PATH }
                if let Some(json) = json_ld.clone() {
                    JsonLdScript { json }
                }
            }
            body {
                Header { config: config.clone() }
                {children}
                Footer { config: config.clone() }
            }
        }
    }
}

#[component]
pub fn Header(config: SiteConfig) -> Element {
    let phone_href = config.phone_href();

    rsx! {
        header { class: "site-header",
            div { class: "header-container",
                a { href: "/", class: "logo", aria_label: "{config.name} Home",
                    span { class: "logo-text", "Plastix" }
                }
                nav { class: "main-nav", aria_label: "Main navigation",
                    ul { class: "nav-list",
                        for item in config.navigation.iter() {
                            li { key: "{item.href}", class: "nav-item",
                                a { href: "{item.href}", class: "nav-link", "{item.label}" }
                            }
                        }
                    }
                }
                div { class: "header-actions",
                    a { href: "{phone_href}", class: "phone-link", "{config.phone}" }
                    a { href: "/contact", class: "cta-button", "Get Started" }
                }
            }
        }
    }
}

/// Number of solution links in the first footer column
const FIRST_COLUMN_LINKS: usize = 7;

#[component]
pub fn Footer(config: SiteConfig) -> Element {
    let year = chrono::Local::now().year();
    let phone_href = config.phone_href();
    let solutions = &config.footer_links.solutions;
    let split = FIRST_COLUMN_LINKS.min(solutions.len());
    let (first, rest) = solutions.split_at(split);

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-container",
                div { class: "footer-main",
                    div { class: "footer-column footer-about",
                        a { href: "/", class: "footer-logo", "Plastix" }
                        p { class: "footer-description",
                            "The premier marketing partner for plastic surgeons, medical spas, and aesthetic practices. We deliver measurable growth through strategic, data-driven marketing."
                        }
                        SocialLinks { config: config.clone() }
                    }

                    div { class: "footer-column",
                        h3 { class: "footer-heading", "Solutions" }
                        ul { class: "footer-links",
                            for link in first.iter() {
                                li { key: "{link.href}", a { href: "{link.href}", "{link.label}" } }
                            }
                        }
                    }

                    div { class: "footer-column",
                        h3 { class: "footer-heading", "More" }
                        ul { class: "footer-links",
                            for link in rest.iter() {
                                li { key: "{link.href}", a { href: "{link.href}", "{link.label}" } }
                            }
                        }
                    }

                    div { class: "footer-column",
                        h3 { class: "footer-heading", "Industries" }
                        ul { class: "footer-links",
                            for link in config.footer_links.specialties.iter() {
                                li { key: "{link.href}", a { href: "{link.href}", "{link.label}" } }
                            }
                        }
                    }

                    div { class: "footer-column",
                        h3 { class: "footer-heading", "Contact" }
                        ul { class: "footer-links footer-contact",
                            li { a { href: "/contact", "Schedule Consultation" } }
                            li { a { href: "{phone_href}", "{config.phone}" } }
                            li { a { href: "mailto:{config.email}", "{config.email}" } }
                            li { class: "footer-location",
                                "{config.address.city}, {config.address.state}"
                            }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { class: "copyright",
                        "© {year} {config.name}. All rights reserved."
                        a { href: "/privacy", "Privacy" }
                        a { href: "/terms", "Terms" }
                    }
                    p { class: "division", "A Division of Evolve Marketing" }
                }
            }
        }
    }
}

/// LinkedIn, X and Facebook profile links
#[component]
pub fn SocialLinks(config: SiteConfig) -> Element {
    let social = &config.social;

    rsx! {
        div { class: "social-links",
            a {
                href: "{social.linkedin}",
                target: "_blank",
                rel: "noopener noreferrer",
                class: "social-icon",
                aria_label: "LinkedIn",
                "in"
            }
            a {
                href: "{social.twitter}",
                target: "_blank",
                rel: "noopener noreferrer",
                class: "social-icon",
                aria_label: "Twitter",
                "X"
            }
            a {
                href: "{social.facebook}",
                target: "_blank",
                rel: "noopener noreferrer",
                class: "social-icon",
                aria_label: "Facebook",
                "f"
            }
        }
    }
}
