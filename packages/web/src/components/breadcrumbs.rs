//! Visible breadcrumb trail

use dioxus::prelude::*;

/// One step of the trail. The current page has no link.
#[derive(Clone, Debug, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

#[component]
pub fn Breadcrumbs(trail: Vec<Crumb>) -> Element {
    rsx! {
        nav { class: "breadcrumbs", aria_label: "Breadcrumb",
            div { class: "container",
                ol {
                    for crumb in trail.iter() {
                        li {
                            if let Some(href) = crumb.href.as_ref() {
                                a { href: "{href}", "{crumb.label}" }
                            } else {
                                span { aria_current: "page", "{crumb.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
