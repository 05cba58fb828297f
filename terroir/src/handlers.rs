use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use terroir_core::harvest::{DEFAULT_EXCLUSIONS, HarvestConfig, HarvestSummary, execute_harvest};
use terroir_core::report::generate_store_report;
use terroir_core::store::ProfileStore;
use terroir_scanner::GoogleTranslator;
use tracing::Level;
use url::Url;

/// Install the stderr log subscriber. Progress lines go to stdout, so logging
/// stays at warnings unless asked for.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Expand a leading `~` in a user-supplied store path.
pub fn expand_store_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Build the run configuration from `harvest` subcommand arguments.
pub fn harvest_config_from_args(args: &ArgMatches) -> HarvestConfig {
    let defaults = HarvestConfig::default();

    let mut exclusions: Vec<String> = if args.get_flag("no-default-excludes") {
        Vec::new()
    } else {
        DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect()
    };
    if let Some(extra) = args.get_many::<String>("exclude") {
        exclusions.extend(extra.cloned());
    }

    HarvestConfig {
        sitemap_url: args
            .get_one::<Url>("sitemap")
            .map(|u| u.as_str().to_string())
            .unwrap_or(defaults.sitemap_url),
        exclusions,
        store_path: args
            .get_one::<String>("output")
            .map(|p| expand_store_path(p))
            .unwrap_or(defaults.store_path),
        source_language: args
            .get_one::<String>("source")
            .cloned()
            .unwrap_or(defaults.source_language),
        target_language: args
            .get_one::<String>("target")
            .cloned()
            .unwrap_or(defaults.target_language),
        block_class: args
            .get_one::<String>("block-class")
            .cloned()
            .unwrap_or(defaults.block_class),
        dry_run: args.get_flag("dry-run"),
        ..defaults
    }
}

/// Translation endpoint chosen on the command line, if any.
pub fn translate_endpoint_from_args(args: &ArgMatches) -> Option<String> {
    args.get_one::<Url>("translate-endpoint")
        .map(|u| u.as_str().to_string())
}

pub async fn handle_harvest(
    mut config: HarvestConfig,
    translate_endpoint: Option<String>,
    quiet: bool,
) -> Result<()> {
    let translator = match translate_endpoint {
        Some(endpoint) => GoogleTranslator::with_endpoint(&endpoint),
        None => GoogleTranslator::new(),
    }
    .context("Failed to set up translation client")?;

    if !quiet {
        println!("\n🍇 Harvesting profiles from {}", config.sitemap_url);
        println!("Store: {}", config.store_path.display());
        println!(
            "Translation: {} → {}",
            config.source_language, config.target_language
        );
        println!("Exclusions: {}", config.exclusions.len());
        if config.dry_run {
            println!("{}", "Dry run: nothing will be fetched or written".yellow());
        }
        println!();
    }
    config.show_progress_bars = !quiet;

    let progress_callback: Option<terroir_core::HarvestProgressCallback> = if quiet {
        None
    } else {
        Some(Arc::new(|msg: String| {
            println!("{}", msg);
        }))
    };

    let summary = execute_harvest(&config, &translator, progress_callback)
        .await
        .with_context(|| format!("Harvest of {} failed", config.sitemap_url))?;

    print_summary(&config, &summary);
    Ok(())
}

fn print_summary(config: &HarvestConfig, summary: &HarvestSummary) {
    if config.dry_run {
        println!(
            "{} {} profile(s) would be harvested",
            "→".blue().bold(),
            summary.harvested.len().to_string().cyan()
        );
        println!(
            "  {} already stored, {} in store",
            summary.skipped, summary.total
        );
        return;
    }

    println!("{} Harvest complete!", "✓".green().bold());
    println!("  Listed in sitemap: {}", summary.listed);
    println!("  Already stored:    {}", summary.skipped);
    println!("  New profiles:      {}", summary.added.to_string().cyan());
    println!(
        "  Store:             {} ({} profiles)",
        config.store_path.display().to_string().bright_white(),
        summary.total
    );
}

/// Load the store at `path` and render its report.
pub fn load_store_report(path: &std::path::Path) -> Result<String> {
    let store = ProfileStore::load(path)
        .with_context(|| format!("Failed to read store {}", path.display()))?;
    Ok(generate_store_report(&store))
}

pub fn handle_report(args: &ArgMatches) -> Result<()> {
    let path = args
        .get_one::<String>("output")
        .map(|p| expand_store_path(p))
        .unwrap_or_else(|| HarvestConfig::default().store_path);

    if !ProfileStore::exists(&path) {
        println!(
            "{} No store at {} yet",
            "ℹ".blue(),
            path.display().to_string().bright_white()
        );
    }

    print!("{}", load_store_report(&path)?);
    Ok(())
}
