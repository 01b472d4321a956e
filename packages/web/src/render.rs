//! Page composition and server-side rendering
//!
//! A [`Route`] is resolved against the content registry into a
//! [`PageView`]: the head metadata, the structured data and the records
//! the body shows. The view is then rendered to a complete HTML document
//! through a Dioxus virtual DOM.

use anyhow::{Context, Result};
use axum::http::StatusCode;
use dioxus::prelude::*;
use site_core::seo::{
    article_metadata, article_schema, breadcrumb_schema, embed_json, local_business_schema,
    organization_schema, page_metadata, service_metadata, service_schema, website_schema,
    ArticleInput, ArticleSeo, Breadcrumb, OrganizationOverrides, PageMetadata, PageSeo, Schema,
    ServiceInput, ServiceSeo,
};
use site_core::{BlogPost, Industry, Service, Site, SiteConfig};

use crate::components::Document;
use crate::pages::{
    AboutPage, BlogPage, BlogPostPage, ContactPage, GrowPage, HomePage, IndustryPage,
    NotFoundPage, PortfolioPage, ServiceDetailPage, ServicesPage, FEATURED_SERVICES,
    RELATED_POSTS,
};
use crate::routes::Route;

/// Related services shown on a service page
const RELATED_SERVICES: usize = 3;

/// The records a page body shows, resolved from the registry
#[derive(Clone, Debug, PartialEq)]
pub enum PageBody {
    Home {
        industries: Vec<Industry>,
        services: Vec<Service>,
    },
    About,
    Grow {
        services: Vec<Service>,
    },
    Services {
        services: Vec<Service>,
    },
    Service {
        service: Service,
        related: Vec<Service>,
    },
    Industry {
        industry: Industry,
        services: Vec<Service>,
    },
    Portfolio,
    Blog {
        posts: Vec<BlogPost>,
    },
    BlogPost {
        post: BlogPost,
        related: Vec<BlogPost>,
    },
    Contact,
    NotFound,
}

/// Everything needed to render one document
#[derive(Clone, Debug, PartialEq)]
pub struct PageView {
    pub metadata: PageMetadata,
    pub schemas: Vec<Schema>,
    pub body: PageBody,
}

/// A rendered response body with the status it should be served with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    pub status: StatusCode,
    pub html: String,
}

// ============================================================================
// Composition
// ============================================================================

fn home_crumb(config: &SiteConfig) -> Breadcrumb {
    Breadcrumb::new("Home", config.url.clone())
}

/// Breadcrumb schema for a top-level page: Home, then the page itself
fn section_breadcrumbs(config: &SiteConfig, name: &str, path: &str) -> Schema {
    breadcrumb_schema(&[
        home_crumb(config),
        Breadcrumb::new(name, config.absolute_url(path)),
    ])
    .into()
}

/// Title, description and keywords of the fixed pages
fn static_page_seo(config: &SiteConfig, route: &Route) -> Option<PageSeo> {
    let path = route.path();
    let seo = match route {
        Route::Home => PageSeo::new(config.name.clone(), config.description.clone()).keywords([
            "plastic surgery marketing agency",
            "medical spa marketing",
            "aesthetic practice marketing",
            "plastic surgeon SEO",
            "med spa lead generation",
        ]),
        Route::About => PageSeo::new(
            "About Plastix Marketing",
            "Learn about Plastix Marketing, the premier marketing agency for plastic surgeons and medical spas. Our team brings decades of aesthetic industry expertise.",
        )
        .keywords(["marketing agency", "aesthetic practice marketing", "about Plastix"]),
        Route::Grow => PageSeo::new(
            "Grow With Plastix",
            "Ready to grow your plastic surgery or medical spa practice? Learn about the Plastix Growth Plan and how we deliver 805+ new leads per month.",
        )
        .keywords([
            "grow aesthetic practice",
            "plastic surgery marketing plan",
            "med spa growth strategy",
        ]),
        Route::Services => PageSeo::new(
            "Our Services",
            "Explore our full range of marketing services for plastic surgeons and medical spas. From SEO to lead generation, we have the expertise to grow your practice.",
        )
        .keywords([
            "plastic surgery marketing services",
            "medical spa marketing services",
            "healthcare SEO",
            "aesthetic practice marketing",
        ]),
        Route::Portfolio => PageSeo::new(
            "Our Portfolio",
            "View case studies and results from Plastix Marketing clients. See how we help plastic surgeons and medical spas achieve significant growth.",
        )
        .keywords([
            "marketing case studies",
            "plastic surgery marketing results",
            "med spa marketing portfolio",
        ]),
        Route::Blog => PageSeo::new(
            "Blog",
            "Marketing tips, strategies, and insights for plastic surgeons, medical spas, and aesthetic practices from the experts at Plastix Marketing.",
        )
        .keywords([
            "plastic surgery marketing blog",
            "medical spa marketing tips",
            "aesthetic practice marketing insights",
        ]),
        Route::Contact => PageSeo::new(
            "Contact Us",
            "Contact Plastix Marketing to discuss how we can help grow your plastic surgery or medical spa practice. Schedule a consultation today.",
        )
        .keywords([
            "contact Plastix Marketing",
            "marketing consultation",
            "plastic surgery marketing agency",
        ]),
        Route::Service { .. } | Route::Industry { .. } | Route::BlogPost { .. } => return None,
    };
    Some(seo.canonical(path))
}

/// Resolve a route into a page view. `None` when a slug is unknown.
pub fn compose(site: &Site, route: &Route) -> Option<PageView> {
    let config = &site.config;
    let content = &site.content;
    let path = route.path();
    let url = config.absolute_url(&path);

    let view = match route {
        Route::Home => PageView {
            metadata: page_metadata(config, &static_page_seo(config, route)?),
            schemas: vec![
                organization_schema(config, OrganizationOverrides::default()).into(),
                website_schema(config).into(),
            ],
            body: PageBody::Home {
                industries: content.industries().to_vec(),
                services: content
                    .services()
                    .iter()
                    .take(FEATURED_SERVICES)
                    .cloned()
                    .collect(),
            },
        },
        Route::About => PageView {
            metadata: page_metadata(config, &static_page_seo(config, route)?),
            schemas: vec![
                organization_schema(config, OrganizationOverrides::default()).into(),
                section_breadcrumbs(config, "About", &path),
            ],
            body: PageBody::About,
        },
        Route::Grow => PageView {
            metadata: page_metadata(config, &static_page_seo(config, route)?),
            schemas: vec![section_breadcrumbs(config, "Grow", &path)],
            body: PageBody::Grow {
                services: content.services().to_vec(),
            },
        },
        Route::Services => PageView {
            metadata: page_metadata(config, &static_page_seo(config, route)?),
            schemas: vec![section_breadcrumbs(config, "Services", &path)],
            body: PageBody::Services {
                services: content.services().to_vec(),
            },
        },
        Route::Portfolio => PageView {
            metadata: page_metadata(config, &static_page_seo(config, route)?),
            schemas: vec![section_breadcrumbs(config, "Portfolio", &path)],
            body: PageBody::Portfolio,
        },
        Route::Blog => PageView {
            metadata: page_metadata(config, &static_page_seo(config, route)?),
            schemas: vec![section_breadcrumbs(config, "Blog", &path)],
            body: PageBody::Blog {
                posts: content.posts_newest_first().into_iter().cloned().collect(),
            },
        },
        Route::Contact => PageView {
            metadata: page_metadata(config, &static_page_seo(config, route)?),
            schemas: vec![
                local_business_schema(config).into(),
                section_breadcrumbs(config, "Contact", &path),
            ],
            body: PageBody::Contact,
        },
        Route::Service { slug } => {
            let service = content.service_by_slug(slug)?;
            let metadata = service_metadata(
                config,
                &ServiceSeo {
                    page: PageSeo::new(service.title.clone(), service.meta_description.clone())
                        .canonical(path.clone()),
                    service_type: Some(service.short_title.clone()),
                },
            );
            let schema = service_schema(
                config,
                ServiceInput {
                    name: service.title.clone(),
                    description: service.meta_description.clone(),
                    url: url.clone(),
                    service_type: Some(service.short_title.clone()),
                    ..Default::default()
                },
            );
            let breadcrumbs = breadcrumb_schema(&[
                home_crumb(config),
                Breadcrumb::new("Services", config.absolute_url("/services")),
                Breadcrumb::new(service.short_title.clone(), url),
            ]);

            PageView {
                metadata,
                schemas: vec![schema.into(), breadcrumbs.into()],
                body: PageBody::Service {
                    service: service.clone(),
                    related: content
                        .related_services_for(service, RELATED_SERVICES)
                        .into_iter()
                        .cloned()
                        .collect(),
                },
            }
        }
        Route::Industry { slug } => {
            let industry = content.industry_by_slug(slug)?;
            let short = &industry.short_title;
            let metadata = page_metadata(
                config,
                &PageSeo::new(industry.title.clone(), industry.meta_description.clone())
                    .canonical(path.clone())
                    .keywords([
                        format!("{short} marketing"),
                        format!("{short} SEO"),
                        format!("{short} lead generation"),
                    ]),
            );
            let schema = service_schema(
                config,
                ServiceInput {
                    name: format!("{short} Marketing"),
                    description: industry.meta_description.clone(),
                    url: url.clone(),
                    service_type: Some(format!("{short} Marketing")),
                    ..Default::default()
                },
            );
            let breadcrumbs =
                breadcrumb_schema(&[home_crumb(config), Breadcrumb::new(short.clone(), url)]);

            PageView {
                metadata,
                schemas: vec![schema.into(), breadcrumbs.into()],
                body: PageBody::Industry {
                    industry: industry.clone(),
                    services: content
                        .related_services(industry)
                        .into_iter()
                        .cloned()
                        .collect(),
                },
            }
        }
        Route::BlogPost { slug } => {
            let post = content.post_by_slug(slug)?;
            let metadata = article_metadata(
                config,
                &ArticleSeo {
                    page: PageSeo::new(post.title.clone(), post.meta_description.clone())
                        .canonical(path.clone()),
                    published_time: post.publish_date,
                    modified_time: post.modified_date,
                    author: post.author.clone(),
                    tags: post.tags.clone(),
                },
            );
            let schema = article_schema(
                config,
                ArticleInput {
                    title: post.title.clone(),
                    description: post.meta_description.clone(),
                    url: url.clone(),
                    image: None,
                    date_published: post.publish_date,
                    date_modified: post.modified_date,
                    author: post.author.clone(),
                },
            );
            let breadcrumbs = breadcrumb_schema(&[
                home_crumb(config),
                Breadcrumb::new("Blog", config.absolute_url("/blog")),
                Breadcrumb::new(post.title.clone(), url),
            ]);

            PageView {
                metadata,
                schemas: vec![schema.into(), breadcrumbs.into()],
                body: PageBody::BlogPost {
                    post: post.clone(),
                    related: content
                        .related_posts(post, RELATED_POSTS)
                        .into_iter()
                        .cloned()
                        .collect(),
                },
            }
        }
    };

    Some(view)
}

/// The not-found page: never indexed, no structured data
pub fn not_found_view(config: &SiteConfig) -> PageView {
    PageView {
        metadata: page_metadata(
            config,
            &PageSeo::new(
                "Page Not Found",
                "The page you are looking for could not be found.",
            )
            .noindex(),
        ),
        schemas: Vec::new(),
        body: PageBody::NotFound,
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Props for SitePage
#[derive(Props, Clone, PartialEq)]
pub struct SitePageProps {
    pub config: SiteConfig,
    pub metadata: PageMetadata,
    pub json_ld: Option<String>,
    pub body: PageBody,
}

/// Root component: the document shell around one page body
#[component]
pub fn SitePage(props: SitePageProps) -> Element {
    let body = match props.body {
        PageBody::Home {
            industries,
            services,
        } => rsx! { HomePage { industries, services } },
        PageBody::About => rsx! { AboutPage {} },
        PageBody::Grow { services } => rsx! { GrowPage { services } },
        PageBody::Services { services } => rsx! { ServicesPage { services } },
        PageBody::Service { service, related } => rsx! { ServiceDetailPage { service, related } },
        PageBody::Industry { industry, services } => rsx! { IndustryPage { industry, services } },
        PageBody::Portfolio => rsx! { PortfolioPage {} },
        PageBody::Blog { posts } => rsx! { BlogPage { posts } },
        PageBody::BlogPost { post, related } => rsx! { BlogPostPage { post, related } },
        PageBody::Contact => rsx! { ContactPage { config: props.config.clone() } },
        PageBody::NotFound => rsx! { NotFoundPage {} },
    };

    rsx! {
        Document {
            config: props.config,
            metadata: props.metadata,
            json_ld: props.json_ld,
            {body}
        }
    }
}

/// Render a view to a complete HTML document
pub fn render_view(config: &SiteConfig, view: PageView) -> Result<String> {
    let json_ld = if view.schemas.is_empty() {
        None
    } else {
        Some(embed_json(&view.schemas).context("Failed to serialize structured data")?)
    };

    let mut dom = VirtualDom::new_with_props(
        SitePage,
        SitePageProps {
            config: config.clone(),
            metadata: view.metadata,
            json_ld,
            body: view.body,
        },
    );
    dom.rebuild_in_place();

    Ok(format!("<!DOCTYPE html>{}", dioxus_ssr::render(&dom)))
}

/// Full HTML document for a route, or `None` when its slug is unknown
pub fn render_route(site: &Site, route: &Route) -> Result<Option<String>> {
    compose(site, route)
        .map(|view| render_view(&site.config, view))
        .transpose()
}

/// The not-found document
pub fn render_not_found(site: &Site) -> Result<String> {
    render_view(&site.config, not_found_view(&site.config))
}

/// Render whatever lives at `path`, falling back to the not-found page
pub fn render_path(site: &Site, path: &str) -> Result<RenderedPage> {
    if let Some(route) = Route::parse(path) {
        if let Some(html) = render_route(site, &route)? {
            return Ok(RenderedPage {
                status: StatusCode::OK,
                html,
            });
        }
    }

    tracing::debug!(path = %path, "No page for path");
    Ok(RenderedPage {
        status: StatusCode::NOT_FOUND,
        html: render_not_found(site)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Site {
        Site::builtin().unwrap()
    }

    #[test]
    fn every_route_composes() {
        let site = site();
        for route in Route::all(&site.content) {
            assert!(compose(&site, &route).is_some(), "{route} did not compose");
        }
    }

    #[test]
    fn unknown_slug_does_not_compose() {
        let route = Route::Service {
            slug: "does-not-exist".to_string(),
        };
        assert!(compose(&site(), &route).is_none());
    }

    #[test]
    fn home_uses_bare_site_name_and_two_schemas() {
        let view = compose(&site(), &Route::Home).unwrap();
        assert_eq!(view.metadata.title, "Plastix Marketing");
        assert_eq!(view.schemas.len(), 2);
        assert!(matches!(view.schemas[0], Schema::Organization(_)));
        assert!(matches!(view.schemas[1], Schema::WebSite(_)));
    }

    #[test]
    fn industry_keywords_use_short_title() {
        let route = Route::Industry {
            slug: "medical-spa".to_string(),
        };
        let view = compose(&site(), &route).unwrap();
        let short = match &view.body {
            PageBody::Industry { industry, .. } => industry.short_title.clone(),
            other => panic!("unexpected body {other:?}"),
        };
        assert_eq!(
            view.metadata.keywords.unwrap(),
            vec![
                format!("{short} marketing"),
                format!("{short} SEO"),
                format!("{short} lead generation"),
            ]
        );
    }

    #[test]
    fn not_found_is_noindex() {
        let view = not_found_view(&SiteConfig::default());
        assert_eq!(view.metadata.title, "Page Not Found | Plastix Marketing");
        assert_eq!(view.metadata.robots.general.as_str(), "noindex, nofollow");
        assert!(view.schemas.is_empty());
    }
}
