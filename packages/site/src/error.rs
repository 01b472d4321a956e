//! Typed errors for the site core.
//!
//! Lookups never fail (an unknown slug is `None`), so every variant here
//! describes content that could not be loaded or does not hang together.

use thiserror::Error;

/// Errors raised while loading or validating site content.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Reading a content file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A content file is not valid JSON for its record type
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two records of the same kind share a slug
    #[error("duplicate {kind} slug: {slug}")]
    DuplicateSlug { kind: &'static str, slug: String },

    /// An industry lists a related service that does not exist
    #[error("industry '{industry}' references unknown service '{service}'")]
    UnknownRelatedService { industry: String, service: String },

    /// A blog post claims to be modified before it was published
    #[error("blog post '{slug}' modified ({modified}) before it was published ({published})")]
    ModifiedBeforePublished {
        slug: String,
        published: chrono::NaiveDate,
        modified: chrono::NaiveDate,
    },
}

pub type Result<T> = std::result::Result<T, SiteError>;
