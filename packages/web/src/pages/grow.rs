use dioxus::prelude::*;
use site_core::Service;

use crate::components::{Breadcrumbs, Crumb, CtaSection, CtaStyle, InfoCard, ServiceCard};

struct GrowthStep {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const GROWTH_PLAN: [GrowthStep; 5] = [
    GrowthStep {
        number: "01",
        title: "Discovery & Strategy",
        description: "We start by understanding your practice, goals, competition, and target patients. This informs a customized growth strategy.",
    },
    GrowthStep {
        number: "02",
        title: "Foundation Building",
        description: "We build or optimize your website, establish your SEO foundation, and set up the marketing technology stack.",
    },
    GrowthStep {
        number: "03",
        title: "Content & Authority",
        description: "We create comprehensive content that positions you as an authority and drives organic traffic for years to come.",
    },
    GrowthStep {
        number: "04",
        title: "Lead Generation",
        description: "We launch targeted campaigns across multiple channels to generate a consistent flow of qualified leads.",
    },
    GrowthStep {
        number: "05",
        title: "Optimization & Scaling",
        description: "We continuously optimize based on data, improve conversion rates, and scale what works to accelerate growth.",
    },
];

const REASONS: [(&str, &str); 3] = [
    (
        "Industry Expertise",
        "We understand plastic surgery and med spa marketing inside and out. We know what patients are searching for, what concerns they have, and how to convert them.",
    ),
    (
        "Proven Results",
        "Our clients generate 805+ leads per month, see 400% traffic increases, and achieve dominant search rankings. We have the track record to prove it.",
    ),
    (
        "Full-Service Partnership",
        "From web design to marketing automation, we handle everything. One partner, one strategy, one team focused on your growth.",
    ),
];

/// The Plastix Growth Plan and the full service list
#[component]
pub fn GrowPage(services: Vec<Service>) -> Element {
    rsx! {
        main {
            Breadcrumbs { trail: vec![Crumb::link("Home", "/"), Crumb::current("Grow")] }

            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        h1 { "Grow With Plastix" }
                        p {
                            "The Plastix Growth Plan is our proven framework for sustainable practice growth. Learn how we can help your aesthetic practice reach its full potential."
                        }
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    div { class: "section-header",
                        h2 { "Why Practices Choose Plastix" }
                        p {
                            "We're not a generic marketing agency. We exclusively serve aesthetic practices, bringing deep industry expertise to every engagement."
                        }
                    }
                    div { class: "grid grid-3",
                        for (title, description) in REASONS {
                            InfoCard { key: "{title}", title, description }
                        }
                    }
                }
            }

            section { class: "section section-alt",
                div { class: "container",
                    div { class: "section-header",
                        h2 { "The Plastix Growth Plan" }
                        p { "Our proven 5-step process for sustainable aesthetic practice growth." }
                    }
                    div { class: "growth-plan",
                        for step in GROWTH_PLAN.iter() {
                            div { key: "{step.number}", class: "card growth-step",
                                span { class: "step-number", "{step.number}" }
                                div {
                                    h3 { "{step.title}" }
                                    p { class: "mb-0", "{step.description}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    div { class: "section-header",
                        h2 { "Our Comprehensive Services" }
                        p {
                            "The Plastix Growth Plan leverages our full suite of marketing services, customized to your practice's unique needs."
                        }
                    }
                    div { class: "grid grid-4",
                        for service in services {
                            ServiceCard { key: "{service.slug}", service: service.clone() }
                        }
                    }
                }
            }

            CtaSection {
                style: CtaStyle::Band,
                heading: "Ready to Start Growing?",
                body: "Schedule a consultation to discuss your practice goals and learn how the Plastix Growth Plan can help you achieve them.",
            }
        }
    }
}
