//! Static export writes the whole site to disk.

use std::fs;

use site_core::Site;
use tempfile::tempdir;
use web::export::export_site;
use web::Route;

#[test]
fn export_writes_every_page_sitemap_and_assets() {
    let site = Site::builtin().unwrap();
    let dir = tempdir().unwrap();
    let out = dir.path().join("dist");

    let report = export_site(&site, &out).unwrap();

    assert_eq!(report.pages, Route::all(&site.content).len());
    assert_eq!(report.out_dir, out);

    for file in [
        "index.html",
        "about/index.html",
        "services/seo/index.html",
        "industries/medical-spa/index.html",
        "blog/why-seo-matters-for-plastic-surgeons/index.html",
        "404.html",
        "sitemap.xml",
        "styles.css",
    ] {
        assert!(out.join(file).is_file(), "missing {file}");
    }

    let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
    assert_eq!(sitemap.matches("<url>").count(), report.sitemap_entries);

    let not_found = fs::read_to_string(out.join("404.html")).unwrap();
    assert!(not_found.contains("noindex, nofollow"));
}

#[test]
fn export_overwrites_previous_output() {
    let site = Site::builtin().unwrap();
    let dir = tempdir().unwrap();
    let out = dir.path();

    fs::write(out.join("index.html"), "stale").unwrap();

    export_site(&site, out).unwrap();

    let home = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(home.starts_with("<!DOCTYPE html>"));
}
