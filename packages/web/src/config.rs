use anyhow::{Context, Result};
use dotenvy::dotenv;
use site_core::{ContentRegistry, Site, SiteConfig};
use std::env;
use std::path::PathBuf;

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Overrides the brand's base URL (staging, previews)
    pub site_url: Option<String>,
    pub out_dir: PathBuf,
    /// Load content from JSON files instead of the compiled-in copies
    pub content_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            site_url: env::var("SITE_URL").ok().filter(|url| !url.is_empty()),
            out_dir: env::var("OUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("dist")),
            content_dir: env::var("CONTENT_DIR").ok().map(PathBuf::from),
        })
    }

    /// Brand configuration and content this config points at.
    pub fn load_site(&self) -> Result<Site> {
        let mut brand = SiteConfig::default();
        if let Some(url) = &self.site_url {
            brand = brand.with_url(url.clone());
        }

        let content = match &self.content_dir {
            Some(dir) => ContentRegistry::from_dir(dir)
                .with_context(|| format!("Failed to load content from {}", dir.display()))?,
            None => ContentRegistry::builtin().context("Builtin content is invalid")?,
        };

        Ok(Site::new(brand, content))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            site_url: None,
            out_dir: PathBuf::from("dist"),
            content_dir: None,
        }
    }
}
