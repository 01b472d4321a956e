//! Card components for services, industries, posts and plain text

use chrono::NaiveDate;
use dioxus::prelude::*;
use site_core::{BlogPost, Industry, Service};

/// Human-readable date, e.g. "January 15, 2024"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Linked card for a service
#[component]
pub fn ServiceCard(service: Service, #[props(default)] show_arrow: bool) -> Element {
    rsx! {
        a { href: "/services/{service.slug}", class: "card card-link",
            h3 { "{service.short_title}" }
            p { "{service.description}" }
            if show_arrow {
                span { class: "link-arrow", "Learn more" }
            }
        }
    }
}

/// Linked card for an industry
#[component]
pub fn IndustryCard(industry: Industry) -> Element {
    rsx! {
        a { href: "/industries/{industry.slug}", class: "card card-link",
            h3 { "{industry.short_title} Marketing" }
            p { "{industry.description}" }
        }
    }
}

/// Title and description without a link
#[component]
pub fn InfoCard(#[props(into)] title: String, #[props(into)] description: String) -> Element {
    rsx! {
        div { class: "card",
            h3 { "{title}" }
            p { class: "mb-0", "{description}" }
        }
    }
}

/// Post summary for the blog index
#[component]
pub fn BlogCard(post: BlogPost) -> Element {
    let published = long_date(post.publish_date);
    let iso = post.publish_date.format("%Y-%m-%d").to_string();

    rsx! {
        article { class: "card blog-card",
            div { class: "blog-meta",
                time { "datetime": "{iso}", "{published}" }
                span { class: "meta-separator", "•" }
                span { "{post.category}" }
            }
            h2 { a { href: "/blog/{post.slug}", "{post.title}" } }
            p { class: "blog-excerpt", "{post.description}" }
            a { href: "/blog/{post.slug}", class: "read-more", "Read More →" }
        }
    }
}

/// Compact post summary shown under an article
#[component]
pub fn RelatedPostCard(post: BlogPost) -> Element {
    let published = long_date(post.publish_date);
    let iso = post.publish_date.format("%Y-%m-%d").to_string();

    rsx! {
        article { class: "card blog-card",
            div { class: "blog-meta",
                time { "datetime": "{iso}", "{published}" }
            }
            h3 { a { href: "/blog/{post.slug}", "{post.title}" } }
            p { class: "mb-0", "{post.description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_spells_out_month_without_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(long_date(date), "January 5, 2024");

        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(long_date(date), "March 15, 2024");
    }
}
