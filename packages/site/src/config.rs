//! Brand identity shared by every page, schema and sitemap entry.

/// A labelled link used in navigation menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinks {
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLinks {
    pub solutions: Vec<NavLink>,
    pub specialties: Vec<NavLink>,
}

/// Site-wide configuration: name, base URL, contact details and menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    /// Base URL without a trailing slash
    pub url: String,
    /// Fallback Open Graph image for pages without their own
    pub og_image: String,
    pub phone: String,
    pub email: String,
    pub address: Address,
    pub social: SocialLinks,
    pub navigation: Vec<NavLink>,
    pub footer_links: FooterLinks,
}

impl SiteConfig {
    /// Same brand served from a different base URL (staging, previews).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.url = url.trim_end_matches('/').to_string();
        self
    }

    /// Resolve a site-relative path such as `/blog` against the base URL.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }

    pub fn social_profiles(&self) -> Vec<String> {
        vec![
            self.social.twitter.clone(),
            self.social.facebook.clone(),
            self.social.linkedin.clone(),
        ]
    }

    /// `tel:` link for the phone number (dots stripped).
    pub fn phone_href(&self) -> String {
        format!("tel:{}", self.phone.replace('.', ""))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let solutions = [
            ("Branding", "branding"),
            ("Chatbots", "chatbots"),
            ("Consulting", "consulting"),
            ("Content Marketing", "content-marketing"),
            ("CRM Support", "crm-support"),
            ("Digital Advertising", "digital-advertising"),
            ("Lead Generation", "lead-generation"),
            ("Marketing Automation", "marketing-automation"),
            ("Sales Enablement", "sales-enablement"),
            ("SEM", "sem"),
            ("SEO", "seo"),
            ("Social Media", "social-media"),
            ("Video Marketing", "video-marketing"),
            ("Web Design", "web-design"),
        ]
        .into_iter()
        .map(|(label, slug)| NavLink::new(label, format!("/services/{slug}")))
        .collect();

        let specialties = [
            ("Plastic Surgery Marketing", "plastic-surgery"),
            ("Medical Spa Marketing", "medical-spa"),
            ("Coolsculpting Marketing", "coolsculpting"),
        ]
        .into_iter()
        .map(|(label, slug)| NavLink::new(label, format!("/industries/{slug}")))
        .collect();

        Self {
            name: "Plastix Marketing".to_string(),
            description: "The premier marketing agency for plastic surgeons, medical spas, and aesthetic practices. Our proven marketing strategy delivers effective lead generation and tangible results.".to_string(),
            url: "https://plastixmarketing.com".to_string(),
            og_image: "https://plastixmarketing.com/images/og-default.jpg".to_string(),
            phone: "404.737.7673".to_string(),
            email: "help@plastixmarketing.com".to_string(),
            address: Address {
                city: "Atlanta".to_string(),
                state: "GA".to_string(),
                country: "US".to_string(),
            },
            social: SocialLinks {
                twitter: "https://twitter.com/plastixmarketing".to_string(),
                facebook: "https://facebook.com/plastixmarketing".to_string(),
                linkedin: "https://linkedin.com/company/plastixmarketing".to_string(),
            },
            navigation: vec![
                NavLink::new("About", "/about"),
                NavLink::new("Grow", "/grow"),
                NavLink::new("Services", "/services"),
                NavLink::new("Portfolio", "/portfolio"),
                NavLink::new("Blog", "/blog"),
                NavLink::new("Contact", "/contact"),
            ],
            footer_links: FooterLinks {
                solutions,
                specialties,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_url_strips_trailing_slash() {
        let config = SiteConfig::default().with_url("https://staging.example.com/");
        assert_eq!(config.url, "https://staging.example.com");
        assert_eq!(
            config.absolute_url("/blog"),
            "https://staging.example.com/blog"
        );
    }

    #[test]
    fn phone_href_drops_dots() {
        assert_eq!(SiteConfig::default().phone_href(), "tel:4047377673");
    }

    #[test]
    fn footer_links_point_at_service_and_industry_pages() {
        let config = SiteConfig::default();
        assert_eq!(config.footer_links.solutions.len(), 14);
        assert!(config
            .footer_links
            .solutions
            .iter()
            .all(|link| link.href.starts_with("/services/")));
        assert!(config
            .footer_links
            .specialties
            .iter()
            .all(|link| link.href.starts_with("/industries/")));
    }
}
