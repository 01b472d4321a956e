//! Page metadata builder
//!
//! Maps a page's descriptive fields onto everything that ends up in the
//! document head: templated title, canonical link, robots directives,
//! Open Graph and Twitter card fields.

use chrono::NaiveDate;

use crate::config::SiteConfig;

pub const OG_LOCALE: &str = "en_US";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

const SERVICE_KEYWORDS: [&str; 3] = [
    "marketing",
    "plastic surgery marketing",
    "medical spa marketing",
];

// ============================================================================
// Inputs
// ============================================================================

/// Descriptive fields of an ordinary page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSeo {
    pub title: String,
    pub description: String,
    /// Site-relative path, e.g. `/about`
    pub canonical: Option<String>,
    pub og_image: Option<String>,
    pub noindex: bool,
    pub keywords: Vec<String>,
}

impl PageSeo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn canonical(mut self, path: impl Into<String>) -> Self {
        self.canonical = Some(path.into());
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }
}

/// A blog article: page fields plus publication details.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleSeo {
    pub page: PageSeo,
    pub published_time: NaiveDate,
    pub modified_time: Option<NaiveDate>,
    pub author: String,
    pub tags: Vec<String>,
}

/// A service page: page fields plus the kind of service offered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceSeo {
    pub page: PageSeo,
    pub service_type: Option<String>,
}

// ============================================================================
// Output
// ============================================================================

/// Robots directive. Only the two combinations the site uses exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotsDirective {
    IndexFollow,
    NoIndexNoFollow,
}

impl RobotsDirective {
    pub fn as_str(&self) -> &'static str {
        match self {
            RobotsDirective::IndexFollow => "index, follow",
            RobotsDirective::NoIndexNoFollow => "noindex, nofollow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robots {
    pub general: RobotsDirective,
    pub google_bot: RobotsDirective,
}

impl Robots {
    fn for_page(noindex: bool) -> Self {
        let directive = if noindex {
            RobotsDirective::NoIndexNoFollow
        } else {
            RobotsDirective::IndexFollow
        };
        Self {
            general: directive,
            google_bot: directive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OgArticle {
    pub published_time: NaiveDate,
    pub modified_time: Option<NaiveDate>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OgType {
    Website,
    Article(OgArticle),
}

impl OgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article(_) => "article",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub og_type: OgType,
    pub locale: &'static str,
    pub url: String,
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Everything the document head needs for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Option<Vec<String>>,
    pub authors: Vec<String>,
    pub creator: String,
    pub publisher: String,
    pub robots: Robots,
    /// Absolute canonical URL
    pub canonical: Option<String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

// ============================================================================
// Builders
// ============================================================================

/// `"{title} | {site}"`, unless the title already is the site name.
pub fn page_title(config: &SiteConfig, title: &str) -> String {
    if title == config.name {
        title.to_string()
    } else {
        format!("{} | {}", title, config.name)
    }
}

pub fn page_metadata(config: &SiteConfig, seo: &PageSeo) -> PageMetadata {
    let full_title = page_title(config, &seo.title);
    let canonical = seo
        .canonical
        .as_deref()
        .map(|path| config.absolute_url(path));
    let image = seo
        .og_image
        .clone()
        .unwrap_or_else(|| config.og_image.clone());

    PageMetadata {
        title: full_title.clone(),
        description: seo.description.clone(),
        keywords: (!seo.keywords.is_empty()).then(|| seo.keywords.clone()),
        authors: vec![config.name.clone()],
        creator: config.name.clone(),
        publisher: config.name.clone(),
        robots: Robots::for_page(seo.noindex),
        open_graph: OpenGraph {
            og_type: OgType::Website,
            locale: OG_LOCALE,
            url: canonical.clone().unwrap_or_else(|| config.url.clone()),
            title: full_title.clone(),
            description: seo.description.clone(),
            site_name: config.name.clone(),
            images: vec![OgImage {
                url: image.clone(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: seo.title.clone(),
            }],
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title: full_title,
            description: seo.description.clone(),
            images: vec![image],
        },
        canonical,
    }
}

/// Article pages: tags double as keywords and Open Graph switches to
/// `article` with publication details attached.
pub fn article_metadata(config: &SiteConfig, seo: &ArticleSeo) -> PageMetadata {
    let mut page = seo.page.clone();
    page.keywords.extend(seo.tags.iter().cloned());

    let mut metadata = page_metadata(config, &page);
    metadata.open_graph.og_type = OgType::Article(OgArticle {
        published_time: seo.published_time,
        modified_time: seo.modified_time,
        authors: vec![seo.author.clone()],
        tags: seo.tags.clone(),
    });
    metadata
}

/// Service pages get the service type and agency boilerplate appended to
/// their keywords.
pub fn service_metadata(config: &SiteConfig, seo: &ServiceSeo) -> PageMetadata {
    let mut page = seo.page.clone();
    page.keywords = seo
        .page
        .keywords
        .iter()
        .cloned()
        .chain(seo.service_type.iter().cloned())
        .chain(SERVICE_KEYWORDS.iter().map(|k| k.to_string()))
        .filter(|k| !k.is_empty())
        .collect();

    page_metadata(config, &page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> SiteConfig {
        SiteConfig {
            name: "Acme".to_string(),
            url: "https://acme.test".to_string(),
            og_image: "https://acme.test/og.jpg".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn title_is_templated_unless_it_is_the_site_name() {
        let config = acme();

        let home = page_metadata(&config, &PageSeo::new("Home", "d").canonical("/"));
        assert_eq!(home.title, "Home | Acme");
        assert_eq!(home.canonical.as_deref(), Some("https://acme.test/"));

        let brand = page_metadata(&config, &PageSeo::new("Acme", "d"));
        assert_eq!(brand.title, "Acme");
    }

    #[test]
    fn missing_canonical_falls_back_to_site_url_for_og() {
        let metadata = page_metadata(&acme(), &PageSeo::new("About", "d"));

        assert_eq!(metadata.canonical, None);
        assert_eq!(metadata.open_graph.url, "https://acme.test");
    }

    #[test]
    fn robots_default_to_index_follow() {
        let metadata = page_metadata(&acme(), &PageSeo::new("About", "d"));

        assert_eq!(metadata.robots.general, RobotsDirective::IndexFollow);
        assert_eq!(metadata.robots.google_bot, RobotsDirective::IndexFollow);
        assert_eq!(metadata.robots.general.as_str(), "index, follow");
    }

    #[test]
    fn noindex_disables_indexing_and_following() {
        let metadata = page_metadata(&acme(), &PageSeo::new("Missing", "d").noindex());

        assert_eq!(metadata.robots.general, RobotsDirective::NoIndexNoFollow);
        assert_eq!(metadata.robots.google_bot, RobotsDirective::NoIndexNoFollow);
        assert_eq!(metadata.robots.general.as_str(), "noindex, nofollow");
    }

    #[test]
    fn default_image_and_fixed_dimensions() {
        let metadata = page_metadata(&acme(), &PageSeo::new("About", "d"));
        let image = &metadata.open_graph.images[0];

        assert_eq!(image.url, "https://acme.test/og.jpg");
        assert_eq!((image.width, image.height), (1200, 630));
        assert_eq!(image.alt, "About");
        assert_eq!(metadata.twitter.images, vec!["https://acme.test/og.jpg"]);
        assert_eq!(metadata.twitter.card, "summary_large_image");
        assert_eq!(metadata.open_graph.locale, "en_US");
        assert_eq!(metadata.open_graph.og_type, OgType::Website);
    }

    #[test]
    fn page_image_overrides_default() {
        let mut seo = PageSeo::new("About", "d");
        seo.og_image = Some("https://cdn.test/about.png".to_string());

        let metadata = page_metadata(&acme(), &seo);
        assert_eq!(metadata.open_graph.images[0].url, "https://cdn.test/about.png");
        assert_eq!(metadata.twitter.images, vec!["https://cdn.test/about.png"]);
    }

    #[test]
    fn empty_keywords_are_omitted() {
        let metadata = page_metadata(&acme(), &PageSeo::new("About", "d"));
        assert_eq!(metadata.keywords, None);

        let metadata = page_metadata(&acme(), &PageSeo::new("About", "d").keywords(["a", "b"]));
        assert_eq!(metadata.keywords, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn article_metadata_attaches_publication_details() {
        let seo = ArticleSeo {
            page: PageSeo::new("Post", "d")
                .canonical("/blog/post")
                .keywords(["seo"]),
            published_time: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            modified_time: None,
            author: "Team".to_string(),
            tags: vec!["SEO".to_string(), "Growth".to_string()],
        };

        let metadata = article_metadata(&acme(), &seo);
        assert_eq!(
            metadata.keywords,
            Some(vec![
                "seo".to_string(),
                "SEO".to_string(),
                "Growth".to_string()
            ])
        );
        match &metadata.open_graph.og_type {
            OgType::Article(article) => {
                assert_eq!(article.authors, vec!["Team"]);
                assert_eq!(article.tags.len(), 2);
                assert_eq!(article.modified_time, None);
            }
            other => panic!("expected article, got {other:?}"),
        }
        assert_eq!(metadata.open_graph.og_type.as_str(), "article");
    }

    #[test]
    fn service_metadata_appends_boilerplate_keywords() {
        let seo = ServiceSeo {
            page: PageSeo::new("SEO Services", "d"),
            service_type: Some("SEO".to_string()),
        };

        let metadata = service_metadata(&acme(), &seo);
        assert_eq!(
            metadata.keywords,
            Some(vec![
                "SEO".to_string(),
                "marketing".to_string(),
                "plastic surgery marketing".to_string(),
                "medical spa marketing".to_string(),
            ])
        );
    }

    #[test]
    fn service_metadata_drops_empty_keywords() {
        let seo = ServiceSeo {
            page: PageSeo::new("X", "d").keywords(["", "kept"]),
            service_type: Some(String::new()),
        };

        let keywords = service_metadata(&acme(), &seo).keywords.unwrap();
        assert_eq!(keywords[0], "kept");
        assert!(keywords.iter().all(|k| !k.is_empty()));
        assert_eq!(keywords.len(), 4);
    }

    #[test]
    fn builders_are_deterministic() {
        let seo = PageSeo::new("Home", "d").canonical("/");
        assert_eq!(page_metadata(&acme(), &seo), page_metadata(&acme(), &seo));
    }
}
