//! Document head: title, description, robots, canonical link, Open Graph,
//! Twitter card and structured data.

use dioxus::prelude::*;
use site_core::seo::{OgType, PageMetadata};

fn iso_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Every `<meta>`/`<link>` tag derived from a page's metadata bundle
#[component]
pub fn HeadTags(metadata: PageMetadata) -> Element {
    let og = &metadata.open_graph;
    let twitter = &metadata.twitter;
    let keywords = metadata.keywords.as_ref().map(|k| k.join(", "));
    let robots = metadata.robots.general.as_str();
    let google_bot = metadata.robots.google_bot.as_str();
    let og_type = og.og_type.as_str();
    let article = match &og.og_type {
        OgType::Article(article) => Some(article.clone()),
        OgType::Website => None,
    };

    rsx! {
        title { "{metadata.title}" }
        meta { name: "description", content: "{metadata.description}" }
        if let Some(keywords) = keywords {
            meta { name: "keywords", content: "{keywords}" }
        }
        for author in metadata.authors.iter() {
            meta { name: "author", content: "{author}" }
        }
        meta { name: "creator", content: "{metadata.creator}" }
        meta { name: "publisher", content: "{metadata.publisher}" }
        meta { name: "robots", content: "{robots}" }
        meta { name: "googlebot", content: "{google_bot}" }
        if let Some(canonical) = metadata.canonical.as_ref() {
            link { rel: "canonical", href: "{canonical}" }
        }

        // Open Graph
        meta { "property": "og:type", content: "{og_type}" }
        meta { "property": "og:locale", content: "{og.locale}" }
        meta { "property": "og:url", content: "{og.url}" }
        meta { "property": "og:title", content: "{og.title}" }
        meta { "property": "og:description", content: "{og.description}" }
        meta { "property": "og:site_name", content: "{og.site_name}" }
        for image in og.images.iter() {
            meta { "property": "og:image", content: "{image.url}" }
            meta { "property": "og:image:width", content: "{image.width}" }
            meta { "property": "og:image:height", content: "{image.height}" }
            meta { "property": "og:image:alt", content: "{image.alt}" }
        }
        if let Some(article) = article {
            meta {
                "property": "article:published_time",
                content: iso_date(article.published_time),
            }
            if let Some(modified) = article.modified_time {
                meta { "property": "article:modified_time", content: iso_date(modified) }
            }
            for author in article.authors.iter() {
                meta { "property": "article:author", content: "{author}" }
            }
            for tag in article.tags.iter() {
                meta { "property": "article:tag", content: "{tag}" }
            }
        }

        // Twitter
        meta { name: "twitter:card", content: "{twitter.card}" }
        meta { name: "twitter:title", content: "{twitter.title}" }
        meta { name: "twitter:description", content: "{twitter.description}" }
        for image in twitter.images.iter() {
            meta { name: "twitter:image", content: "{image}" }
        }
    }
}

/// `<script type="application/ld+json">` with a pre-serialized payload.
///
/// The payload must already have `</` escaped (see
/// [`site_core::seo::embed_json`]).
#[component]
pub fn JsonLdScript(json: String) -> Element {
    rsx! {
        script { r#type: "application/ld+json", dangerous_inner_html: "{json}" }
    }
}
