//! Plastix Marketing site
//!
//! ```bash
//! plastix build --out dist      # write the static site
//! plastix serve --port 8080     # render pages on request
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use web::{export::export_site, server::router, Config};

#[derive(Parser)]
#[command(name = "plastix")]
#[command(about = "Build or preview the Plastix Marketing site")]
struct Cli {
    /// Base URL used in canonical links, structured data and the sitemap
    #[arg(long, global = true)]
    site_url: Option<String>,

    /// Directory holding services.json, industries.json and blog.json
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every page to static files
    Build {
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Serve pages rendered on request
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,web=debug,site_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if cli.site_url.is_some() {
        config.site_url = cli.site_url;
    }
    if cli.content_dir.is_some() {
        config.content_dir = cli.content_dir;
    }

    let site = config.load_site()?;

    match cli.command {
        Commands::Build { out } => {
            let out_dir = out.unwrap_or(config.out_dir);
            let report = export_site(&site, &out_dir)?;
            tracing::info!(
                "Wrote {} pages and {} sitemap entries to {}",
                report.pages,
                report.sitemap_entries,
                report.out_dir.display()
            );
        }
        Commands::Serve { port } => {
            let port = port.unwrap_or(config.port);
            let app = router(Arc::new(site));

            let addr = format!("0.0.0.0:{}", port);
            tracing::info!("Starting server on {}", addr);
            tracing::info!("Health check: http://localhost:{}/health", port);

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .context("Failed to bind to address")?;

            axum::serve(listener, app).await.context("Server error")?;
        }
    }

    Ok(())
}
