//! sitemap.xml generation
//!
//! A fold over the static pages and every slug in the registry.

use chrono::NaiveDate;
use quick_xml::escape::escape;

use crate::config::SiteConfig;
use crate::content::ContentRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

const STATIC_PAGES: [(&str, ChangeFrequency, f32); 7] = [
    ("", ChangeFrequency::Weekly, 1.0),
    ("/about", ChangeFrequency::Monthly, 0.8),
    ("/services", ChangeFrequency::Weekly, 0.9),
    ("/portfolio", ChangeFrequency::Monthly, 0.7),
    ("/grow", ChangeFrequency::Monthly, 0.8),
    ("/blog", ChangeFrequency::Weekly, 0.8),
    ("/contact", ChangeFrequency::Monthly, 0.7),
];

/// Every canonical URL on the site.
///
/// Static, service and industry pages are stamped with `today`; blog
/// posts carry their own modification date.
pub fn build_sitemap(
    config: &SiteConfig,
    registry: &ContentRegistry,
    today: NaiveDate,
) -> Vec<SitemapEntry> {
    let entry = |path: String, change_frequency, priority, last_modified| SitemapEntry {
        url: config.absolute_url(&path),
        last_modified,
        change_frequency,
        priority,
    };

    let static_pages = STATIC_PAGES
        .iter()
        .map(|(path, freq, priority)| entry(path.to_string(), *freq, *priority, today));

    let services = registry.service_slugs().into_iter().map(|slug| {
        entry(
            format!("/services/{slug}"),
            ChangeFrequency::Monthly,
            0.8,
            today,
        )
    });

    let industries = registry.industry_slugs().into_iter().map(|slug| {
        entry(
            format!("/industries/{slug}"),
            ChangeFrequency::Monthly,
            0.8,
            today,
        )
    });

    let posts = registry.posts().iter().map(|post| {
        entry(
            format!("/blog/{}", post.slug),
            ChangeFrequency::Monthly,
            0.6,
            post.last_modified(),
        )
    });

    static_pages
        .chain(services)
        .chain(industries)
        .chain(posts)
        .collect()
}

/// Render entries as a sitemaps.org `urlset` document.
pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let urls: String = entries.iter().map(url_element).collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
         {urls}</urlset>\n"
    )
}

fn url_element(entry: &SitemapEntry) -> String {
    format!(
        "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{:.1}</priority>\n</url>\n",
        escape(entry.url.as_str()),
        entry.last_modified.format("%Y-%m-%d"),
        entry.change_frequency.as_str(),
        entry.priority,
    )
}
