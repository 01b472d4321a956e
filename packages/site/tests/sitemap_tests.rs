use chrono::NaiveDate;
use site_core::sitemap::{build_sitemap, to_xml, ChangeFrequency};
use site_core::{ContentRegistry, SiteConfig};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn one_entry_per_static_page_and_slug() {
    let config = SiteConfig::default();
    let registry = ContentRegistry::builtin().unwrap();

    let entries = build_sitemap(&config, &registry, today());

    let expected = 7
        + registry.service_slugs().len()
        + registry.industry_slugs().len()
        + registry.post_slugs().len();
    assert_eq!(entries.len(), expected);

    for slug in registry.service_slugs() {
        let url = format!("https://plastixmarketing.com/services/{slug}");
        assert!(entries.iter().any(|e| e.url == url), "missing {url}");
    }
}

#[test]
fn blog_entries_use_modified_or_published_date() {
    let config = SiteConfig::default();
    let registry = ContentRegistry::builtin().unwrap();
    let entries = build_sitemap(&config, &registry, today());

    let modified = entries
        .iter()
        .find(|e| e.url.ends_with("/blog/why-seo-matters-for-plastic-surgeons"))
        .unwrap();
    assert_eq!(modified.last_modified, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(modified.change_frequency, ChangeFrequency::Monthly);
    assert_eq!(modified.priority, 0.6);

    let published_only = entries
        .iter()
        .find(|e| e.url.ends_with("/blog/content-marketing-medical-spas"))
        .unwrap();
    assert_eq!(
        published_only.last_modified,
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    );
}

#[test]
fn base_url_override_flows_into_every_entry() {
    let config = SiteConfig::default().with_url("https://preview.test/");
    let registry = ContentRegistry::builtin().unwrap();

    let entries = build_sitemap(&config, &registry, today());
    assert!(entries.iter().all(|e| e.url.starts_with("https://preview.test")));

    let xml = to_xml(&entries);
    assert_eq!(xml.matches("<url>").count(), entries.len());
}
