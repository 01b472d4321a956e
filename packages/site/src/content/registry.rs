//! Read-only, in-memory content registry
//!
//! Built once at startup (from the embedded JSON files or an override
//! directory) and passed by reference to everything that renders pages.
//! Lookups are linear scans; the collections are a few dozen records.

use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::types::{BlogPost, Industry, Service, Slugged};
use crate::error::{Result, SiteError};

const SERVICES_FILE: &str = "services.json";
const INDUSTRIES_FILE: &str = "industries.json";
const BLOG_FILE: &str = "blog.json";

const BUILTIN_SERVICES: &str = include_str!("../../content/services.json");
const BUILTIN_INDUSTRIES: &str = include_str!("../../content/industries.json");
const BUILTIN_BLOG: &str = include_str!("../../content/blog.json");

/// Exact, case-sensitive slug lookup.
pub fn find_by_slug<'a, T: Slugged>(items: &'a [T], slug: &str) -> Option<&'a T> {
    items.iter().find(|item| item.slug() == slug)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentRegistry {
    services: Vec<Service>,
    industries: Vec<Industry>,
    posts: Vec<BlogPost>,
}

impl ContentRegistry {
    /// Build a registry without consistency checks. See [`Self::validate`].
    pub fn new(services: Vec<Service>, industries: Vec<Industry>, posts: Vec<BlogPost>) -> Self {
        Self {
            services,
            industries,
            posts,
        }
    }

    /// Content compiled into the binary.
    pub fn builtin() -> Result<Self> {
        let registry = Self::new(
            parse_records(SERVICES_FILE, BUILTIN_SERVICES)?,
            parse_records(INDUSTRIES_FILE, BUILTIN_INDUSTRIES)?,
            parse_records(BLOG_FILE, BUILTIN_BLOG)?,
        );
        registry.validate()?;
        registry.log_summary("builtin");
        Ok(registry)
    }

    /// Load `services.json`, `industries.json` and `blog.json` from a directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let registry = Self::new(
            read_records(dir, SERVICES_FILE)?,
            read_records(dir, INDUSTRIES_FILE)?,
            read_records(dir, BLOG_FILE)?,
        );
        registry.validate()?;
        registry.log_summary(&dir.display().to_string());
        Ok(registry)
    }

    /// Startup consistency check.
    ///
    /// Rejects duplicate slugs, industries pointing at services that do not
    /// exist, and posts modified before they were published.
    pub fn validate(&self) -> Result<()> {
        ensure_unique("service", &self.services)?;
        ensure_unique("industry", &self.industries)?;
        ensure_unique("blog post", &self.posts)?;

        for industry in &self.industries {
            for slug in &industry.related_services {
                if self.service_by_slug(slug).is_none() {
                    return Err(SiteError::UnknownRelatedService {
                        industry: industry.slug.clone(),
                        service: slug.clone(),
                    });
                }
            }
        }

        for post in &self.posts {
            if let Some(modified) = post.modified_date {
                if modified < post.publish_date {
                    return Err(SiteError::ModifiedBeforePublished {
                        slug: post.slug.clone(),
                        published: post.publish_date,
                        modified,
                    });
                }
            }
        }

        Ok(())
    }

    fn log_summary(&self, source: &str) {
        info!(
            source,
            services = self.services.len(),
            industries = self.industries.len(),
            posts = self.posts.len(),
            "Content registry loaded"
        );
    }

    // ------------------------------------------------------------------------
    // Services
    // ------------------------------------------------------------------------

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn service_by_slug(&self, slug: &str) -> Option<&Service> {
        find_by_slug(&self.services, slug)
    }

    pub fn service_slugs(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.slug.as_str()).collect()
    }

    /// The first `count` services other than `service`, in registry order.
    pub fn related_services_for(&self, service: &Service, count: usize) -> Vec<&Service> {
        self.services
            .iter()
            .filter(|s| s.slug != service.slug)
            .take(count)
            .collect()
    }

    // ------------------------------------------------------------------------
    // Industries
    // ------------------------------------------------------------------------

    pub fn industries(&self) -> &[Industry] {
        &self.industries
    }

    pub fn industry_by_slug(&self, slug: &str) -> Option<&Industry> {
        find_by_slug(&self.industries, slug)
    }

    pub fn industry_slugs(&self) -> Vec<&str> {
        self.industries.iter().map(|i| i.slug.as_str()).collect()
    }

    /// Resolve an industry's related services in declared order.
    ///
    /// Entries that do not resolve are skipped. A validated registry never
    /// has any.
    pub fn related_services(&self, industry: &Industry) -> Vec<&Service> {
        industry
            .related_services
            .iter()
            .filter_map(|slug| {
                let service = self.service_by_slug(slug);
                if service.is_none() {
                    debug!(industry = %industry.slug, service = %slug, "Skipping unresolved related service");
                }
                service
            })
            .collect()
    }

    // ------------------------------------------------------------------------
    // Blog
    // ------------------------------------------------------------------------

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        find_by_slug(&self.posts, slug)
    }

    pub fn post_slugs(&self) -> Vec<&str> {
        self.posts.iter().map(|p| p.slug.as_str()).collect()
    }

    /// The `count` newest posts by publish date.
    ///
    /// The sort is stable, so posts published the same day keep their
    /// registry order.
    pub fn recent_posts(&self, count: usize) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
        posts.truncate(count);
        posts
    }

    /// Every post, newest first. This is the blog index order.
    pub fn posts_newest_first(&self) -> Vec<&BlogPost> {
        self.recent_posts(self.posts.len())
    }

    /// Up to `count` recent posts excluding `post` itself.
    pub fn related_posts(&self, post: &BlogPost, count: usize) -> Vec<&BlogPost> {
        self.recent_posts(count + 1)
            .into_iter()
            .filter(|p| p.slug != post.slug)
            .take(count)
            .collect()
    }

    pub fn posts_by_category(&self, category: &str) -> Vec<&BlogPost> {
        self.posts
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn posts_by_tag(&self, tag: &str) -> Vec<&BlogPost> {
        self.posts
            .iter()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .collect()
    }
}

fn ensure_unique<T: Slugged>(kind: &'static str, items: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.slug()) {
            return Err(SiteError::DuplicateSlug {
                kind,
                slug: item.slug().to_string(),
            });
        }
    }
    Ok(())
}

fn parse_records<T: DeserializeOwned>(file: &str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|source| SiteError::Parse {
        file: file.to_string(),
        source,
    })
}

fn read_records<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>> {
    let path = dir.join(file);
    let json = std::fs::read_to_string(&path).map_err(|source| SiteError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_records(file, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(slug: &str, published: &str) -> BlogPost {
        BlogPost {
            slug: slug.to_string(),
            title: slug.to_string(),
            description: String::new(),
            meta_description: String::new(),
            author: "Team".to_string(),
            publish_date: published.parse::<NaiveDate>().unwrap(),
            modified_date: None,
            category: "SEO".to_string(),
            tags: vec![],
            content: String::new(),
        }
    }

    #[test]
    fn recent_posts_keeps_registry_order_for_same_day() {
        let registry = ContentRegistry::new(
            vec![],
            vec![],
            vec![
                post("a", "2024-01-01"),
                post("b", "2024-02-01"),
                post("c", "2024-02-01"),
            ],
        );

        let slugs: Vec<&str> = registry
            .recent_posts(3)
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["b", "c", "a"]);
    }

    #[test]
    fn related_posts_excludes_current() {
        let registry = ContentRegistry::new(
            vec![],
            vec![],
            vec![
                post("a", "2024-01-01"),
                post("b", "2024-02-01"),
                post("c", "2024-03-01"),
            ],
        );
        let current = registry.post_by_slug("c").unwrap();

        let slugs: Vec<&str> = registry
            .related_posts(current, 3)
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["b", "a"]);
    }

    #[test]
    fn duplicate_post_slug_is_rejected() {
        let registry = ContentRegistry::new(
            vec![],
            vec![],
            vec![post("a", "2024-01-01"), post("a", "2024-02-01")],
        );

        assert!(matches!(
            registry.validate(),
            Err(SiteError::DuplicateSlug { kind: "blog post", .. })
        ));
    }

    #[test]
    fn modified_before_published_is_rejected() {
        let mut early = post("a", "2024-03-01");
        early.modified_date = Some("2024-01-01".parse().unwrap());
        let registry = ContentRegistry::new(vec![], vec![], vec![early]);

        assert!(matches!(
            registry.validate(),
            Err(SiteError::ModifiedBeforePublished { .. })
        ));
    }

    #[test]
    fn malformed_json_reports_file() {
        let err = parse_records::<Service>(SERVICES_FILE, "[{").unwrap_err();
        assert!(err.to_string().contains(SERVICES_FILE));
    }
}
