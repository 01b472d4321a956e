//! Route definitions for the site

use std::fmt;

use site_core::ContentRegistry;

/// Every page the site publishes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Grow,
    Services,
    Service { slug: String },
    Industry { slug: String },
    Portfolio,
    Blog,
    BlogPost { slug: String },
    Contact,
}

impl Route {
    /// Match a request path. One trailing slash is tolerated.
    ///
    /// Slugs are not checked against the registry here; an unknown slug
    /// becomes a not-found page when the route is rendered.
    pub fn parse(path: &str) -> Option<Route> {
        if path.is_empty() || path == "/" {
            return Some(Route::Home);
        }

        let path = path.strip_suffix('/').unwrap_or(path);
        let segments: Vec<&str> = path.strip_prefix('/')?.split('/').collect();
        let route = match segments.as_slice() {
            ["about"] => Route::About,
            ["grow"] => Route::Grow,
            ["services"] => Route::Services,
            ["services", slug] if !slug.is_empty() => Route::Service {
                slug: slug.to_string(),
            },
            ["industries", slug] if !slug.is_empty() => Route::Industry {
                slug: slug.to_string(),
            },
            ["portfolio"] => Route::Portfolio,
            ["blog"] => Route::Blog,
            ["blog", slug] if !slug.is_empty() => Route::BlogPost {
                slug: slug.to_string(),
            },
            ["contact"] => Route::Contact,
            _ => return None,
        };
        Some(route)
    }

    /// Site-relative path, e.g. `/services/seo`.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Grow => "/grow".to_string(),
            Route::Services => "/services".to_string(),
            Route::Service { slug } => format!("/services/{slug}"),
            Route::Industry { slug } => format!("/industries/{slug}"),
            Route::Portfolio => "/portfolio".to_string(),
            Route::Blog => "/blog".to_string(),
            Route::BlogPost { slug } => format!("/blog/{slug}"),
            Route::Contact => "/contact".to_string(),
        }
    }

    /// All routes with content behind them: static pages first, then one
    /// per service, industry and blog post.
    pub fn all(registry: &ContentRegistry) -> Vec<Route> {
        let mut routes = vec![
            Route::Home,
            Route::About,
            Route::Grow,
            Route::Services,
            Route::Portfolio,
            Route::Blog,
            Route::Contact,
        ];
        routes.extend(registry.service_slugs().into_iter().map(|slug| Route::Service {
            slug: slug.to_string(),
        }));
        routes.extend(registry.industry_slugs().into_iter().map(|slug| Route::Industry {
            slug: slug.to_string(),
        }));
        routes.extend(registry.post_slugs().into_iter().map(|slug| Route::BlogPost {
            slug: slug.to_string(),
        }));
        routes
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_static_and_slug_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/about"), Some(Route::About));
        assert_eq!(Route::parse("/about/"), Some(Route::About));
        assert_eq!(
            Route::parse("/services/seo"),
            Some(Route::Service {
                slug: "seo".to_string()
            })
        );
        assert_eq!(
            Route::parse("/blog/some-post/"),
            Some(Route::BlogPost {
                slug: "some-post".to_string()
            })
        );
    }

    #[test]
    fn parse_rejects_unknown_shapes() {
        assert_eq!(Route::parse("/industries"), None);
        assert_eq!(Route::parse("/services/seo/extra"), None);
        assert_eq!(Route::parse("/search"), None);
        assert_eq!(Route::parse("/services//"), None);
        assert_eq!(Route::parse("//"), None);
        assert_eq!(Route::parse("about"), None);
    }

    #[test]
    fn path_round_trips_through_parse() {
        let registry = ContentRegistry::builtin().unwrap();
        for route in Route::all(&registry) {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }
}
