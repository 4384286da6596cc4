//! `bloomroutes` — generate the sitemap and static route set from catalog
//! configuration.
//!
//! All file and clock access lives here; the library core is pure.

use anyhow::{Context, Result};
use bloomroutes::catalog::{CatalogConfig, Registry};
use bloomroutes::sitemap::{self, xml};
use bloomroutes::topology;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bloomroutes", version, about = "Site topology generator for the BloomLocal storefront")]
struct Cli {
    /// Path to the catalog configuration JSON.
    #[arg(long, default_value = "catalog.json")]
    catalog: PathBuf,

    /// Site origin the sitemap advertises, e.g. https://bloomlocal.com
    #[arg(long)]
    base_url: String,

    /// Where to write the sitemap document.
    #[arg(long, default_value = "sitemap.xml")]
    out: PathBuf,

    /// Where to write the static route parameters for the rendering layer.
    #[arg(long, default_value = "routes.json")]
    routes_out: PathBuf,

    /// Validate and report counts without writing any artifact.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let base_url = url::Url::parse(&cli.base_url)
        .with_context(|| format!("invalid base url {:?}", cli.base_url))?;

    let raw = std::fs::read_to_string(&cli.catalog)
        .with_context(|| format!("reading catalog {}", cli.catalog.display()))?;
    let config: CatalogConfig = serde_json::from_str(&raw)
        .with_context(|| format!("parsing catalog {}", cli.catalog.display()))?;

    let registry = Registry::from_config(config).context("validating catalog")?;
    let descriptors = topology::build_descriptors(&registry).context("building url space")?;
    let city_params = topology::enumerate_city_params(&registry);
    let document = sitemap::assemble(base_url.as_str(), descriptors, Utc::now())
        .context("assembling sitemap")?;

    if cli.check {
        eprintln!(
            "ok: {} sitemap entries, {} static city routes",
            document.entries.len(),
            city_params.len()
        );
        return Ok(());
    }

    let sitemap_xml = xml::to_xml(&document).context("serializing sitemap")?;
    std::fs::write(&cli.out, sitemap_xml)
        .with_context(|| format!("writing {}", cli.out.display()))?;
    info!(path = %cli.out.display(), entries = document.entries.len(), "wrote sitemap");

    let routes_json =
        serde_json::to_string_pretty(&city_params).context("serializing route params")?;
    std::fs::write(&cli.routes_out, routes_json)
        .with_context(|| format!("writing {}", cli.routes_out.display()))?;
    info!(path = %cli.routes_out.display(), routes = city_params.len(), "wrote static routes");

    Ok(())
}
