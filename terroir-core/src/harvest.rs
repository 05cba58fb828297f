use crate::error::HarvestError;
use crate::model::ProfileRecord;
use crate::store::{DEFAULT_STORE_FILE, ProfileStore};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use terroir_scanner::profile::{ContentExtractor, DEFAULT_BLOCK_CLASS, fetch_profile};
use terroir_scanner::sitemap::{SitemapEntry, fetch_sitemap};
use terroir_scanner::{DEFAULT_USER_AGENT, PageClient, Translator};
use tracing::{debug, info};

pub const DEFAULT_SITEMAP_URL: &str = "https://www.terrovin.be/sitemap.xml";

/// Site pages that are listed in the sitemap but are not winemaker profiles.
pub const DEFAULT_EXCLUSIONS: [&str; 5] = [
    "https://www.terrovin.be/bestellen",
    "https://www.terrovin.be/prijslijst",
    "https://www.terrovin.be/contact",
    "https://www.terrovin.be/events",
    "https://www.terrovin.be/intro",
];

pub const DEFAULT_SOURCE_LANGUAGE: &str = "nl";
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Everything a harvest run needs to know
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub sitemap_url: String,
    pub exclusions: Vec<String>,
    pub store_path: PathBuf,
    pub user_agent: String,
    pub source_language: String,
    pub target_language: String,
    pub block_class: String,
    /// List what would be harvested without fetching profiles or writing
    pub dry_run: bool,
    pub show_progress_bars: bool,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            sitemap_url: DEFAULT_SITEMAP_URL.to_string(),
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            block_class: DEFAULT_BLOCK_CLASS.to_string(),
            dry_run: false,
            show_progress_bars: false,
        }
    }
}

/// Callback for human-readable progress lines
pub type HarvestProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Outcome of a harvest run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestSummary {
    /// Sitemap entries left after exclusions
    pub listed: usize,
    /// Entries whose URL was already in the store
    pub skipped: usize,
    /// Profiles fetched and translated this run
    pub added: usize,
    /// Store size after the run
    pub total: usize,
    /// Entries that were (or, on a dry run, would have been) harvested
    pub harvested: Vec<SitemapEntry>,
}

/// Run the whole pipeline: load the store, read the sitemap, fetch and
/// translate every profile not yet stored, then rewrite the store.
///
/// Entries are processed one at a time. The store is written once, after the
/// last entry; an error anywhere aborts the run and leaves the file on disk
/// untouched.
pub async fn execute_harvest<T: Translator>(
    config: &HarvestConfig,
    translator: &T,
    progress_callback: Option<HarvestProgressCallback>,
) -> Result<HarvestSummary, HarvestError> {
    let mut store = ProfileStore::load(&config.store_path)?;
    let client = PageClient::with_user_agent(&config.user_agent)?;
    let extractor = ContentExtractor::new(&config.block_class)?;

    let entries = fetch_sitemap(&client, &config.sitemap_url, &config.exclusions).await?;

    let progress_bar = if config.show_progress_bars {
        let pb = ProgressBar::new(entries.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(pb)
    } else {
        None
    };

    let report = |msg: String| {
        if let Some(ref callback) = progress_callback {
            match progress_bar {
                Some(ref pb) => pb.suspend(|| callback(msg)),
                None => callback(msg),
            }
        }
    };

    let mut summary = HarvestSummary {
        listed: entries.len(),
        ..Default::default()
    };

    for entry in entries {
        if let Some(ref pb) = progress_bar {
            pb.inc(1);
        }

        if store.contains(&entry.loc) {
            debug!("Already stored: {}", entry.loc);
            summary.skipped += 1;
            continue;
        }

        if config.dry_run {
            report(format!("Would retrieve profile for {} at {}", entry.title, entry.loc));
            // Keep repeated sitemap URLs from being counted twice
            store.push(ProfileRecord::new(
                entry.loc.clone(),
                entry.title.clone(),
                String::new(),
                String::new(),
            ));
            summary.harvested.push(entry);
            continue;
        }

        if let Some(ref pb) = progress_bar {
            pb.set_message(entry.title.clone());
        }

        report(format!("Retrieved profile for {} at {}", entry.title, entry.loc));
        let html = fetch_profile(&client, &entry.loc).await?;
        let information = extractor.extract(&html);

        let translated = translator
            .translate(&information, &config.source_language, &config.target_language)
            .await?;
        report(format!("Translating {} profile...\n", entry.title));

        store.push(ProfileRecord::new(
            entry.loc.clone(),
            entry.title.clone(),
            translated,
            information,
        ));
        summary.added += 1;
        summary.harvested.push(entry);
    }

    if let Some(ref pb) = progress_bar {
        pb.finish_and_clear();
    }

    if config.dry_run {
        summary.total = store.len() - summary.harvested.len();
        info!(
            "Dry run: {} profiles would be harvested, nothing written",
            summary.harvested.len()
        );
        return Ok(summary);
    }

    store.save(&config.store_path)?;
    summary.total = store.len();
    info!(
        "Harvest complete: {} new, {} already stored, {} total",
        summary.added, summary.skipped, summary.total
    );

    Ok(summary)
}
