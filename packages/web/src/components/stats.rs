use dioxus::prelude::*;

/// A headline number with its caption
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[component]
pub fn StatGrid(stats: Vec<Stat>) -> Element {
    rsx! {
        div { class: "stats",
            for stat in stats.iter() {
                div { key: "{stat.label}",
                    div { class: "stat-value", "{stat.value}" }
                    div { class: "stat-label", "{stat.label}" }
                }
            }
        }
    }
}
