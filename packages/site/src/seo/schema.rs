//! schema.org JSON-LD builders
//!
//! Each builder returns a typed, serializable object tagged with
//! `@context` and `@type`. Pages usually embed several; [`embed_json`]
//! combines them into the payload of a single
//! `<script type="application/ld+json">` element.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{Address, SiteConfig};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const DEFAULT_AREA_SERVED: &str = "United States";
pub const DEFAULT_SERVICE_TYPE: &str = "Marketing Agency";
pub const PRICE_RANGE: &str = "$$$";

// ============================================================================
// Shared nodes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub address_locality: String,
    pub address_region: String,
    pub address_country: String,
}

impl From<&Address> for PostalAddress {
    fn from(address: &Address) -> Self {
        Self {
            kind: "PostalAddress",
            address_locality: address.city.clone(),
            address_region: address.state.clone(),
            address_country: address.country.clone(),
        }
    }
}

/// Name-and-URL organization reference (publisher, provider).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
}

impl OrganizationRef {
    fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: "Organization",
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

// ============================================================================
// Organization
// ============================================================================

/// Optional replacements for the site's own organization details.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizationOverrides {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub address: Option<Address>,
    pub same_as: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    pub description: String,
    pub email: String,
    pub telephone: String,
    pub address: PostalAddress,
    pub same_as: Vec<String>,
}

pub fn organization_schema(config: &SiteConfig, overrides: OrganizationOverrides) -> Organization {
    let address = overrides.address.unwrap_or_else(|| config.address.clone());

    Organization {
        context: SCHEMA_CONTEXT,
        kind: "Organization",
        name: overrides.name.unwrap_or_else(|| config.name.clone()),
        url: overrides.url.unwrap_or_else(|| config.url.clone()),
        description: overrides
            .description
            .unwrap_or_else(|| config.description.clone()),
        email: overrides.email.unwrap_or_else(|| config.email.clone()),
        telephone: overrides.telephone.unwrap_or_else(|| config.phone.clone()),
        address: PostalAddress::from(&address),
        same_as: overrides
            .same_as
            .unwrap_or_else(|| config.social_profiles()),
    }
}

// ============================================================================
// WebSite
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url_template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub target: EntryPoint,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    pub description: String,
    pub potential_action: SearchAction,
}

pub fn website_schema(config: &SiteConfig) -> WebSite {
    WebSite {
        context: SCHEMA_CONTEXT,
        kind: "WebSite",
        name: config.name.clone(),
        url: config.url.clone(),
        description: config.description.clone(),
        potential_action: SearchAction {
            kind: "SearchAction",
            target: EntryPoint {
                kind: "EntryPoint",
                url_template: format!("{}/search?q={{search_term_string}}", config.url),
            },
            query_input: "required name=search_term_string",
        },
    }
}

// ============================================================================
// Article
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleInput {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
    pub date_published: NaiveDate,
    pub date_modified: Option<NaiveDate>,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub date_published: NaiveDate,
    pub date_modified: NaiveDate,
    pub author: Person,
    pub publisher: OrganizationRef,
    pub main_entity_of_page: WebPageRef,
}

pub fn article_schema(config: &SiteConfig, article: ArticleInput) -> Article {
    Article {
        context: SCHEMA_CONTEXT,
        kind: "Article",
        headline: article.title,
        description: article.description,
        image: article.image.unwrap_or_else(|| config.og_image.clone()),
        date_published: article.date_published,
        date_modified: article.date_modified.unwrap_or(article.date_published),
        author: Person {
            kind: "Person",
            name: article.author,
        },
        publisher: OrganizationRef::new(config.name.clone(), config.url.clone()),
        main_entity_of_page: WebPageRef {
            kind: "WebPage",
            id: article.url.clone(),
        },
        url: article.url,
    }
}

// ============================================================================
// Service
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceInput {
    pub name: String,
    pub description: String,
    pub url: String,
    pub provider: Option<String>,
    pub area_served: Option<String>,
    pub service_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub provider: OrganizationRef,
    pub area_served: String,
    pub service_type: String,
}

pub fn service_schema(config: &SiteConfig, service: ServiceInput) -> ServiceSchema {
    ServiceSchema {
        context: SCHEMA_CONTEXT,
        kind: "Service",
        name: service.name,
        description: service.description,
        url: service.url,
        provider: OrganizationRef::new(
            service.provider.unwrap_or_else(|| config.name.clone()),
            config.url.clone(),
        ),
        area_served: service
            .area_served
            .unwrap_or_else(|| DEFAULT_AREA_SERVED.to_string()),
        service_type: service
            .service_type
            .unwrap_or_else(|| DEFAULT_SERVICE_TYPE.to_string()),
    }
}

// ============================================================================
// BreadcrumbList
// ============================================================================

/// One step on the path from the site root to the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<ListItem>,
}

/// Positions are 1-based and follow input order.
pub fn breadcrumb_schema(items: &[Breadcrumb]) -> BreadcrumbList {
    BreadcrumbList {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(index, crumb)| ListItem {
                kind: "ListItem",
                position: index + 1,
                name: crumb.name.clone(),
                item: crumb.url.clone(),
            })
            .collect(),
    }
}

// ============================================================================
// LocalBusiness
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusiness {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub telephone: String,
    pub email: String,
    pub address: PostalAddress,
    pub price_range: &'static str,
    pub same_as: Vec<String>,
}

pub fn local_business_schema(config: &SiteConfig) -> LocalBusiness {
    LocalBusiness {
        context: SCHEMA_CONTEXT,
        kind: "LocalBusiness",
        id: config.url.clone(),
        name: config.name.clone(),
        description: config.description.clone(),
        url: config.url.clone(),
        telephone: config.phone.clone(),
        email: config.email.clone(),
        address: PostalAddress::from(&config.address),
        price_range: PRICE_RANGE,
        same_as: config.social_profiles(),
    }
}

// ============================================================================
// Embedding
// ============================================================================

/// Any structured-data object a page can embed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Schema {
    Organization(Organization),
    WebSite(WebSite),
    Article(Article),
    Service(ServiceSchema),
    BreadcrumbList(BreadcrumbList),
    LocalBusiness(LocalBusiness),
}

macro_rules! impl_from_schema {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Schema {
                fn from(value: $ty) -> Self {
                    Schema::$variant(value)
                }
            }
        )*
    };
}

impl_from_schema! {
    Organization => Organization,
    WebSite => WebSite,
    Article => Article,
    Service => ServiceSchema,
    BreadcrumbList => BreadcrumbList,
    LocalBusiness => LocalBusiness,
}

/// JSON payload for a `<script type="application/ld+json">` element.
///
/// A single schema is emitted bare, several as an array. `</` is escaped
/// so content can never close the surrounding script element.
pub fn embed_json(schemas: &[Schema]) -> serde_json::Result<String> {
    let json = match schemas {
        [single] => serde_json::to_string(single)?,
        many => serde_json::to_string(many)?,
    };
    Ok(json.replace("</", "<\\/"))
}
