//! Home page

use dioxus::prelude::*;
use site_core::{Industry, Service};

use crate::components::{CtaSection, CtaStyle, IndustryCard, ServiceCard, Stat, StatGrid};

/// Services previewed on the home page
pub const FEATURED_SERVICES: usize = 8;

const STATS: [Stat; 4] = [
    Stat { value: "805%", label: "Inbound Marketing ROI" },
    Stat { value: "805+", label: "New Leads Every Month" },
    Stat { value: "400%", label: "Increase in Website Traffic" },
    Stat { value: "500K+", label: "Monthly Search Impressions" },
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    company: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "We were looking for an elite lead generation marketing agency, and Plastix Marketing more than delivered. We saw an immediate increase in the number of leads coming into the practice.",
        author: "Dr. Alan Larsen",
        company: "Buckhead Plastic Surgery",
    },
    Testimonial {
        quote: "Plastix Marketing far exceeds expectations in performance. They are dedicated to the success of our business and are extremely knowledgeable in business operations and marketing expertise.",
        author: "Courtney Rodriguez",
        company: "LUX Med Spa",
    },
    Testimonial {
        quote: "Plastix Marketing is fantastic at what they do. Kari and her team will jump through hoops to get the job done. They are always very professional and a pleasure to work with.",
        author: "Robbie Spence",
        company: "Slim Studio Atlanta",
    },
];

/// Home page: hero, results, testimonials, specialties and a services preview
#[component]
pub fn HomePage(industries: Vec<Industry>, services: Vec<Service>) -> Element {
    rsx! {
        main {
            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        h1 { "Grow With Plastix" }
                        p {
                            "Our proven marketing strategy delivers effective lead generation and tangible results for plastic surgery practices and med spas."
                        }
                        a { href: "/contact", class: "cta-button", "Show Me How" }
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    div { class: "section-header",
                        h2 { "It's All About The Results" }
                        p {
                            "Our clients are much like your patients. It's all about the results. Aesthetic practices across the country choose Plastix because we deliver a long-term marketing strategy that continues to deliver new patients for years."
                        }
                    }
                    StatGrid { stats: STATS.to_vec() }
                    div { class: "text-center",
                        a { href: "/portfolio", class: "button button-outline", "View Our Portfolio" }
                    }
                }
            }

            section { class: "section section-alt",
                div { class: "container",
                    div { class: "grid grid-3",
                        for testimonial in TESTIMONIALS.iter() {
                            article { key: "{testimonial.author}", class: "testimonial",
                                blockquote { class: "testimonial-quote", "\"{testimonial.quote}\"" }
                                footer {
                                    cite { class: "testimonial-author", "{testimonial.author}" }
                                    div { class: "testimonial-company", "{testimonial.company}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    div { class: "section-header",
                        h2 { "Our Specialties" }
                        p {
                            "We are not just another marketing agency. We focus on marketing for plastic surgeons, medical spas, coolsculpting studios, and other aesthetic practices."
                        }
                    }
                    div { class: "grid grid-3",
                        for industry in industries {
                            IndustryCard { key: "{industry.slug}", industry: industry.clone() }
                        }
                    }
                }
            }

            section { class: "section section-alt",
                div { class: "container",
                    div { class: "section-header",
                        h2 { "Our Solutions" }
                        p { "Comprehensive marketing services designed specifically for aesthetic practices." }
                    }
                    div { class: "grid grid-4",
                        for service in services {
                            ServiceCard { key: "{service.slug}", service: service.clone() }
                        }
                    }
                    div { class: "text-center",
                        a { href: "/services", class: "button", "View All Services" }
                    }
                }
            }

            CtaSection {
                style: CtaStyle::Band,
                heading: "Ready to Grow Your Practice?",
                body: "Learn more about Plastix Marketing and why so many plastic surgery & medical spa practices trust us to grow their business.",
            }
        }
    }
}
