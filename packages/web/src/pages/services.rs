//! Services index and service detail pages

use dioxus::prelude::*;
use site_core::Service;

use crate::components::{
    Breadcrumbs, Crumb, CtaSection, CtaStyle, InfoCard, Paragraphs, ServiceCard,
};

const REASONS: [(&str, &str); 3] = [
    (
        "Industry Expertise",
        "Deep understanding of plastic surgery and med spa marketing, patient concerns, and competitive landscapes.",
    ),
    (
        "Proven Results",
        "805+ leads per month, 400% traffic increases, and dominant search rankings for our clients.",
    ),
    (
        "Full-Service Capabilities",
        "One partner for all your marketing needs, with integrated strategies that work together.",
    ),
];

#[component]
pub fn ServicesPage(services: Vec<Service>) -> Element {
    rsx! {
        main {
            Breadcrumbs { trail: vec![Crumb::link("Home", "/"), Crumb::current("Services")] }

            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        p { class: "section-label", "Solutions" }
                        h1 { "Full-Service Marketing Solutions" }
                        p {
                            "Comprehensive marketing services designed specifically for plastic surgeons, medical spas, and aesthetic practices."
                        }
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    div { class: "grid grid-3",
                        for service in services {
                            ServiceCard { key: "{service.slug}", service: service.clone(), show_arrow: true }
                        }
                    }
                }
            }

            section { class: "section section-alt",
                div { class: "container",
                    div { class: "section-header",
                        p { class: "section-label", "Why Plastix" }
                        h2 { "Not Just Another Agency" }
                        p {
                            "We focus exclusively on marketing for aesthetic practices, bringing unmatched industry expertise to every service."
                        }
                    }
                    div { class: "grid grid-3",
                        for (title, description) in REASONS {
                            InfoCard { key: "{title}", title, description }
                        }
                    }
                }
            }

            CtaSection {
                label: "Get Started",
                heading: "Ready to Begin?",
                body: "Schedule a consultation to discuss which services are right for your practice.",
            }
        }
    }
}

/// One service: body copy, what's included, benefits and related services
#[component]
pub fn ServiceDetailPage(service: Service, related: Vec<Service>) -> Element {
    let lowercase = service.short_title.to_lowercase();

    rsx! {
        main {
            Breadcrumbs {
                trail: vec![
                    Crumb::link("Home", "/"),
                    Crumb::link("Services", "/services"),
                    Crumb::current(service.short_title.clone()),
                ],
            }

            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        h1 { "{service.title}" }
                        p { "{service.description}" }
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    div { class: "grid grid-2",
                        div { class: "article-content",
                            Paragraphs { content: service.content.clone() }
                        }
                        aside {
                            div { class: "card",
                                h2 { "What's Included" }
                                ul {
                                    for feature in service.features.iter() {
                                        li { key: "{feature}", "{feature}" }
                                    }
                                }
                            }
                            div { class: "card",
                                h2 { "Benefits" }
                                ul {
                                    for benefit in service.benefits.iter() {
                                        li { key: "{benefit}", "{benefit}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section section-alt",
                div { class: "container",
                    div { class: "section-header",
                        h2 { "Related Services" }
                        p { "Explore more ways we can help grow your practice." }
                    }
                    div { class: "grid grid-3",
                        for other in related {
                            ServiceCard { key: "{other.slug}", service: other.clone() }
                        }
                    }
                }
            }

            CtaSection {
                style: CtaStyle::Band,
                heading: format!("Ready to Get Started with {}?", service.short_title),
                body: format!(
                    "Schedule a consultation to discuss how {lowercase} can help grow your aesthetic practice."
                ),
            }
        }
    }
}
