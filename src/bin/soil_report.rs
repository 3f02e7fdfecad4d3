//! Soil Report
//!
//! Prints the design summary and suitability scores for a site.
//!
//! Usage:
//!   cargo run --features cli --bin soil_report                 # built-in sample sites
//!   cargo run --features cli --bin soil_report -- site.json    # one site from a file
//!   cargo run --features cli --bin soil_report -- site.json --config engine.json --json
//!
//! A site file holds either a bare soil description or
//! `{"name", "description", "environment"}`. `SOIL_ENGINE_CONFIG` may point
//! to a config file instead of `--config`.

use anyhow::{Context, Result};
use soil_engine::samples::{sample_sites, SampleSite};
use soil_engine::{EngineConfig, SoilDescription, SoilEngine, Track};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Default)]
struct Args {
    site: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--json" => args.json = true,
            flag if flag.starts_with("--") => anyhow::bail!("Unknown flag: {}", flag),
            path => args.site = Some(PathBuf::from(path)),
        }
    }
    if args.config.is_none() {
        args.config = std::env::var("SOIL_ENGINE_CONFIG").ok().map(PathBuf::from);
    }
    Ok(args)
}

fn load_site(path: &Path) -> Result<SampleSite> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read site file: {:?}", path))?;

    // Full site record first, bare description as the fallback
    if let Ok(site) = serde_json::from_str::<SampleSite>(&contents) {
        return Ok(site);
    }
    let description: SoilDescription = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse site JSON: {:?}", path))?;
    Ok(SampleSite {
        name: description.name.clone(),
        description,
        environment: None,
    })
}

fn print_site(engine: &SoilEngine, site: &SampleSite, json: bool) -> Result<()> {
    let summary = engine.summarize(&site.description, site.environment.as_ref());
    let report = engine.score_suitability(&site.description);

    if json {
        let value = serde_json::json!({
            "name": site.name,
            "design": summary.bundle,
            "suitability": report,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("=== {} ===", site.name);
    for message in &summary.messages {
        println!("  {}", message);
    }
    for note in &summary.bundle.notes {
        println!("  Note: {}", note);
    }
    for track in [Track::Building, Track::Agriculture] {
        let band = report.band(track);
        println!(
            "  {:?} suitability: {:.1} ({})",
            track,
            report.score(track),
            band.display_text(track)
        );
    }
    println!();
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soil_engine=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading engine config from {:?}", path);
            EngineConfig::load(path)?
        }
        None => EngineConfig::default(),
    };
    let engine = SoilEngine::new(config);

    let sites = match &args.site {
        Some(path) => vec![load_site(path)?],
        None => sample_sites(),
    };
    tracing::info!("Evaluating {} site(s)", sites.len());

    for site in &sites {
        print_site(&engine, site, args.json)?;
    }

    Ok(())
}
