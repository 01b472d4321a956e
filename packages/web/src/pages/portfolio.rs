use dioxus::prelude::*;

use crate::components::{Breadcrumbs, Crumb, CtaSection, CtaStyle, InfoCard, Stat, StatGrid};

const CLIENTS: [&str; 6] = [
    "Buckhead Plastic Surgery",
    "LUX Med Spa",
    "Slim Studio Atlanta",
    "Zubowicz Plastic Surgery",
    "Coastal Aesthetics",
    "Emergent Testing",
];

const CASE_STUDY_STATS: [Stat; 4] = [
    Stat { value: "805%", label: "Inbound Marketing ROI" },
    Stat { value: "4,000+", label: "New Leads Generated" },
    Stat { value: "400%", label: "Traffic Increase" },
    Stat { value: "500K+", label: "Monthly Impressions" },
];

const RESULTS: [(&str, &str); 4] = [
    (
        "Lead Generation",
        "Our clients generate an average of 805+ new leads per month through comprehensive inbound marketing strategies. These are qualified prospects actively seeking aesthetic services.",
    ),
    (
        "SEO Dominance",
        "We help practices achieve top rankings for competitive procedure keywords. Clients see 400%+ increases in organic traffic and dominate local search results.",
    ),
    (
        "Conversion Optimization",
        "Beyond driving traffic, we optimize the entire patient journey. Our clients convert more website visitors into consultations and more consultations into procedures.",
    ),
    (
        "Marketing Automation",
        "We implement marketing automation that nurtures leads, retains patients, and scales growth without requiring additional staff. More efficiency, better results.",
    ),
];

#[component]
pub fn PortfolioPage() -> Element {
    rsx! {
        main {
            Breadcrumbs { trail: vec![Crumb::link("Home", "/"), Crumb::current("Portfolio")] }

            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        h1 { "Our Portfolio" }
                        p {
                            "We take great pride in the work and results we have provided for elite aesthetic practices across the country."
                        }
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    div { class: "card case-study",
                        span { class: "text-muted eyebrow", "Featured Case Study" }
                        h2 { "Buckhead Plastic Surgery Case Study" }
                        p {
                            "Learn how we helped Buckhead Plastic Surgery dominate keyword rankings, convert more leads, and schedule more surgeries."
                        }
                        StatGrid { stats: CASE_STUDY_STATS.to_vec() }
                        a { href: "/contact", class: "button", "Download Case Study" }
                    }
                }
            }

            section { class: "section section-alt",
                div { class: "container",
                    div { class: "section-header",
                        h2 { "Our Clients" }
                        p {
                            "We partner with leading plastic surgeons, medical spas, and aesthetic practices to drive sustainable growth."
                        }
                    }
                    div { class: "grid grid-3",
                        for client in CLIENTS {
                            div { key: "{client}", class: "card text-center",
                                h3 { class: "mb-0", "{client}" }
                            }
                        }
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    div { class: "section-header",
                        h2 { "The Results We Deliver" }
                        p {
                            "Our clients see measurable improvements in leads, traffic, and revenue. Here's what the Plastix Growth Plan delivers."
                        }
                    }
                    div { class: "grid grid-2",
                        for (title, description) in RESULTS {
                            InfoCard { key: "{title}", title, description }
                        }
                    }
                }
            }

            CtaSection {
                style: CtaStyle::Band,
                heading: "Ready to Join Our Portfolio?",
                body: "Schedule a consultation to learn how we can deliver similar results for your practice.",
            }
        }
    }
}
