//! Rendered documents for every page type.

use axum::http::StatusCode;
use site_core::{Site, SiteConfig};
use web::{render_path, render_route, Route};

fn site() -> Site {
    Site::builtin().expect("builtin content is valid")
}

fn page(path: &str) -> String {
    let rendered = render_path(&site(), path).unwrap();
    assert_eq!(rendered.status, StatusCode::OK, "{path} should render");
    rendered.html
}

#[test]
fn every_route_renders_a_full_document() {
    let site = site();

    for route in Route::all(&site.content) {
        let html = render_route(&site, &route)
            .unwrap()
            .unwrap_or_else(|| panic!("{route} has no page"));

        assert!(html.starts_with("<!DOCTYPE html>"), "{route}");
        assert!(html.contains("<html"), "{route}");
        assert!(html.contains("class=\"site-header\""), "{route}");
        assert!(html.contains("class=\"site-footer\""), "{route}");
        assert!(html.contains("<title>"), "{route}");
    }
}

#[test]
fn home_page_title_is_bare_site_name() {
    let html = page("/");

    assert!(html.contains("<title>Plastix Marketing</title>"));
    assert!(html.contains("\"@type\":\"Organization\""));
    assert!(html.contains("\"@type\":\"WebSite\""));
    assert!(html.contains("Grow With Plastix"));
}

#[test]
fn static_pages_carry_canonical_links_and_breadcrumbs() {
    let html = page("/about");

    assert!(html.contains("<title>About Plastix Marketing | Plastix Marketing</title>"));
    assert!(html.contains("href=\"https://plastixmarketing.com/about\""));
    assert!(html.contains("\"@type\":\"BreadcrumbList\""));
    assert!(html.contains("content=\"index, follow\""));
}

#[test]
fn service_page_lists_features_and_related_services() {
    let site = site();
    let service = site.content.service_by_slug("seo").unwrap();
    let html = page("/services/seo");

    assert!(html.contains("\"@type\":\"Service\""));
    assert!(html.contains("\"serviceType\":\"SEO\""));
    for feature in &service.features {
        if !feature.contains(['&', '\'', '"']) {
            assert!(html.contains(feature.as_str()), "missing feature {feature}");
        }
    }
    for related in site.content.related_services_for(service, 3) {
        assert!(html.contains(&format!("href=\"/services/{}\"", related.slug)));
    }
}

#[test]
fn industry_page_resolves_related_services() {
    let site = site();
    let industry = site.content.industry_by_slug("medical-spa").unwrap();
    let html = page("/industries/medical-spa");

    assert!(html.contains("\"name\":\"Medical Spa Marketing\""));
    assert!(html.contains("content=\"Medical Spa marketing, Medical Spa SEO, Medical Spa lead generation\""));
    for slug in &industry.related_services {
        assert!(html.contains(&format!("href=\"/services/{slug}\"")));
    }
}

#[test]
fn blog_index_lists_posts_newest_first() {
    let html = page("/blog");

    let newest = html
        .find("/blog/marketing-automation-aesthetic-practices")
        .unwrap();
    let oldest = html.find("/blog/why-seo-matters-for-plastic-surgeons").unwrap();
    assert!(newest < oldest);
    assert!(html.contains("March 5, 2024"));
}

#[test]
fn blog_post_renders_structured_body_and_article_schema() {
    let html = page("/blog/why-seo-matters-for-plastic-surgeons");

    assert!(html.contains("<h2>Key SEO Strategies for Plastic Surgeons</h2>"));
    assert!(html.contains("<h3>2. Local SEO</h3>"));
    assert!(html.contains("<li>Reviews and testimonials</li>"));
    assert!(html.contains("January 15, 2024"));

    assert!(html.contains("\"@type\":\"Article\""));
    assert!(html.contains("\"datePublished\":\"2024-01-15\""));
    assert!(html.contains("\"dateModified\":\"2024-03-01\""));
    assert!(html.contains("content=\"article\""));
    assert!(html.contains("Related Articles"));
}

#[test]
fn contact_form_has_no_handler() {
    let html = page("/contact");

    assert!(html.contains("action=\"#\""));
    assert!(html.contains("\"@type\":\"LocalBusiness\""));
    assert!(html.contains("href=\"tel:4047377673\""));
}

#[test]
fn trailing_slash_renders_same_page() {
    assert_eq!(page("/portfolio/"), page("/portfolio"));
}

#[test]
fn unknown_paths_get_noindex_not_found_document() {
    let site = site();

    for path in ["//", "/nope", "/services/does-not-exist", "/blog/missing/extra"] {
        let rendered = render_path(&site, path).unwrap();
        assert_eq!(rendered.status, StatusCode::NOT_FOUND, "{path}");
        assert!(rendered
            .html
            .contains("<title>Page Not Found | Plastix Marketing</title>"));
        assert!(rendered.html.contains("content=\"noindex, nofollow\""));
        assert!(!rendered.html.contains("application/ld+json"));
    }
}

#[test]
fn unknown_slug_route_has_no_page() {
    let route = Route::BlogPost {
        slug: "does-not-exist".to_string(),
    };
    assert!(render_route(&site(), &route).unwrap().is_none());
}

#[test]
fn site_url_override_flows_into_canonical_and_schema() {
    let site = Site::new(
        SiteConfig::default().with_url("https://preview.test"),
        site().content,
    );

    let html = render_route(&site, &Route::Grow).unwrap().unwrap();
    assert!(html.contains("href=\"https://preview.test/grow\""));
    assert!(html.contains("\"item\":\"https://preview.test/grow\""));
}
