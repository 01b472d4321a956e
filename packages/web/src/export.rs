//! Static export
//!
//! Writes every page to `<out>/<path>/index.html` so any static file host
//! can serve the site with clean URLs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use site_core::sitemap::{build_sitemap, to_xml};
use site_core::Site;
use tracing::{debug, info};

use crate::components::{STYLESHEET, STYLESHEET_PATH};
use crate::render::{render_not_found, render_route};
use crate::routes::Route;

/// What an export wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub out_dir: PathBuf,
    pub pages: usize,
    pub sitemap_entries: usize,
}

/// File a route is written to, relative to the output directory
pub fn page_file(route: &Route) -> PathBuf {
    let path = route.path();
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("index.html")
    } else {
        Path::new(trimmed).join("index.html")
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

/// Render the whole site into `out_dir`. Existing files are overwritten.
pub fn export_site(site: &Site, out_dir: &Path) -> Result<ExportReport> {
    info!(out_dir = %out_dir.display(), "Exporting site");

    let mut pages = 0;
    for route in Route::all(&site.content) {
        let html = render_route(site, &route)?
            .with_context(|| format!("Route {route} has no content"))?;
        let file = out_dir.join(page_file(&route));
        write_file(&file, &html)?;
        debug!(route = %route, file = %file.display(), "Wrote page");
        pages += 1;
    }

    write_file(&out_dir.join("404.html"), &render_not_found(site)?)?;

    let today = chrono::Local::now().date_naive();
    let entries = build_sitemap(&site.config, &site.content, today);
    write_file(&out_dir.join("sitemap.xml"), &to_xml(&entries))?;

    write_file(
        &out_dir.join(STYLESHEET_PATH.trim_start_matches('/')),
        STYLESHEET,
    )?;

    info!(pages, sitemap_entries = entries.len(), "Export complete");

    Ok(ExportReport {
        out_dir: out_dir.to_path_buf(),
        pages,
        sitemap_entries: entries.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_files_mirror_route_paths() {
        assert_eq!(page_file(&Route::Home), PathBuf::from("index.html"));
        assert_eq!(page_file(&Route::About), PathBuf::from("about/index.html"));
        assert_eq!(
            page_file(&Route::BlogPost {
                slug: "hello".to_string()
            }),
            PathBuf::from("blog/hello/index.html")
        );
    }
}
