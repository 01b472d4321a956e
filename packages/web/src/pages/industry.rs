use dioxus::prelude::*;
use site_core::{Industry, Service};

use crate::components::{Breadcrumbs, Crumb, CtaSection, Paragraphs, ServiceCard};

/// Industry landing page. `services` are the industry's resolved related
/// services.
#[component]
pub fn IndustryPage(industry: Industry, services: Vec<Service>) -> Element {
    let lowercase = industry.short_title.to_lowercase();

    rsx! {
        main {
            Breadcrumbs {
                trail: vec![
                    Crumb::link("Home", "/"),
                    Crumb::current(format!("{} Marketing", industry.short_title)),
                ],
            }

            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        p { class: "section-label", "Industry" }
                        h1 { "{industry.hero_headline}" }
                        p { class: "hero-subheadline", "{industry.hero_subheadline}" }
                        a { href: "/contact", class: "cta-button button-large", "Get Started" }
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    div { class: "article-content",
                        Paragraphs { content: industry.content.clone() }
                    }
                }
            }

            section { class: "section section-alt",
                div { class: "container",
                    div { class: "grid grid-2",
                        div {
                            p { class: "section-label", "Challenges" }
                            h2 { "What We Solve" }
                            ul {
                                for challenge in industry.challenges.iter() {
                                    li { key: "{challenge}", "{challenge}" }
                                }
                            }
                        }
                        div {
                            p { class: "section-label", "Solutions" }
                            h2 { "Our Approach" }
                            ul {
                                for solution in industry.solutions.iter() {
                                    li { key: "{solution}", "{solution}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    div { class: "section-header",
                        p { class: "section-label", "Services" }
                        h2 { "Services for {industry.short_title} Practices" }
                        p { "Comprehensive marketing services tailored to {lowercase} practices." }
                    }
                    div { class: "grid grid-3",
                        for service in services {
                            ServiceCard { key: "{service.slug}", service: service.clone(), show_arrow: true }
                        }
                    }
                    div { class: "text-center",
                        a { href: "/services", class: "button button-outline", "View All Services" }
                    }
                }
            }

            CtaSection {
                label: "Get Started",
                heading: format!("Ready to Grow Your {} Practice?", industry.short_title),
                body: "Schedule a consultation to discuss your goals and learn how we can help.",
            }
        }
    }
}
