use dioxus::prelude::*;

use crate::components::{Breadcrumbs, Crumb, CtaSection, InfoCard};

const VALUES: [(&str, &str); 3] = [
    (
        "Results-Driven",
        "Everything we do is measured by the results it produces. We focus on consultations and procedures, not vanity metrics.",
    ),
    (
        "Partnership",
        "We view ourselves as an extension of your team. Your success is our success, and we invest in your long-term growth.",
    ),
    (
        "Innovation",
        "The digital landscape evolves constantly. We stay ahead of trends to maintain your competitive advantage.",
    ),
];

const ADVANTAGES: [(&str, &str); 5] = [
    ("Industry Expertise", "We exclusively serve aesthetic practices"),
    ("Proven Results", "805+ leads per month for our clients"),
    ("Long-Term Partnership", "Strategies for sustainable growth"),
    ("Full-Service Capabilities", "From web design to automation"),
    ("Transparent Reporting", "You always know what you are getting"),
];

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        main {
            Breadcrumbs { trail: vec![Crumb::link("Home", "/"), Crumb::current("About")] }

            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        p { class: "section-label", "About Us" }
                        h1 { "The Premier Agency for Aesthetic Practices" }
                        p {
                            "We partner with plastic surgeons, medical spas, and aesthetic practices nationwide to deliver measurable, sustainable growth."
                        }
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    div { class: "grid grid-2",
                        div { class: "article-content",
                            h2 { "Our Story" }
                            p {
                                "Plastix Marketing was founded with a singular focus: helping aesthetic practices grow through proven marketing strategies. We understood that plastic surgeons, medical spas, and aesthetic practices face unique marketing challenges that generic agencies simply do not understand."
                            }
                            p {
                                "Our team brings together decades of experience in healthcare marketing, digital strategy, and the aesthetic industry. We have worked inside practices, understanding firsthand the challenges of patient acquisition, consultation conversion, and building a sustainable growth engine."
                            }
                        }
                        div { class: "article-content",
                            h2 { "Our Approach" }
                            p {
                                "We do not believe in one-size-fits-all marketing. Every practice is different: different services, different markets, different goals. Our approach starts with understanding your unique situation before developing a customized strategy."
                            }
                            p {
                                "The Plastix Growth Plan is our comprehensive framework for aesthetic practice marketing. It combines proven tactics across SEO, content marketing, paid advertising, marketing automation, and sales enablement to create predictable, sustainable growth."
                            }
                        }
                    }
                }
            }

            section { class: "section section-alt",
                div { class: "container",
                    div { class: "section-header",
                        p { class: "section-label", "Why Plastix" }
                        h2 { "Your Competitive Advantage" }
                    }
                    div { class: "grid grid-3",
                        for (title, description) in ADVANTAGES {
                            div { key: "{title}", class: "card",
                                h4 { class: "accent", "{title}" }
                                p { class: "mb-0", "{description}" }
                            }
                        }
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    div { class: "section-header",
                        p { class: "section-label", "Our Values" }
                        h2 { "What Drives Us" }
                    }
                    div { class: "grid grid-3",
                        for (title, description) in VALUES {
                            InfoCard { key: "{title}", title, description }
                        }
                    }
                }
            }

            CtaSection {
                label: "Get Started",
                heading: "Ready to Grow Your Practice?",
                body: "Schedule a consultation to learn how Plastix Marketing can help your aesthetic practice reach its full potential.",
            }
        }
    }
}
