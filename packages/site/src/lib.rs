// Plastix Marketing - Site Core
//
// Everything the pages need that is not markup: the brand configuration,
// the read-only content registry, the blog body renderer, SEO metadata,
// schema.org structured data and the sitemap.
//
// All of it is pure. Nothing here performs I/O except the optional
// content-directory loader.

pub mod config;
pub mod content;
pub mod error;
pub mod seo;
pub mod sitemap;
pub mod text;

pub use config::*;
pub use content::*;
pub use error::*;

/// Brand configuration plus the content it publishes.
///
/// Built once at startup and shared read-only by every page.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub content: ContentRegistry,
}

impl Site {
    pub fn new(config: SiteConfig, content: ContentRegistry) -> Self {
        Self { config, content }
    }

    /// Default brand with the content compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(SiteConfig::default(), ContentRegistry::builtin()?))
    }
}
