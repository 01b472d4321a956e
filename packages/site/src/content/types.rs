//! Content records published on the site
//!
//! These mirror the JSON content files one-to-one (camelCase keys).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Anything addressable by a URL slug.
pub trait Slugged {
    fn slug(&self) -> &str;
}

// ============================================================================
// Services
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub slug: String,
    pub title: String,
    pub short_title: String,
    pub description: String,
    pub meta_description: String,
    pub features: Vec<String>,
    pub benefits: Vec<String>,
    /// Plain paragraphs separated by blank lines
    pub content: String,
}

impl Slugged for Service {
    fn slug(&self) -> &str {
        &self.slug
    }
}

// ============================================================================
// Industries
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Industry {
    pub slug: String,
    pub title: String,
    pub short_title: String,
    pub description: String,
    pub meta_description: String,
    pub hero_headline: String,
    pub hero_subheadline: String,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub content: String,
    /// Service slugs, resolved through the registry
    pub related_services: Vec<String>,
}

impl Slugged for Industry {
    fn slug(&self) -> &str {
        &self.slug
    }
}

// ============================================================================
// Blog
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub meta_description: String,
    pub author: String,
    pub publish_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<NaiveDate>,
    pub category: String,
    pub tags: Vec<String>,
    /// Markdown subset, see [`crate::text::parse_blocks`]
    pub content: String,
}

impl BlogPost {
    /// Date search engines should treat as the last change.
    pub fn last_modified(&self) -> NaiveDate {
        self.modified_date.unwrap_or(self.publish_date)
    }
}

impl Slugged for BlogPost {
    fn slug(&self) -> &str {
        &self.slug
    }
}
