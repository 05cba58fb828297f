// CSV-backed profile store. Doubles as the dedup cache between runs.

use crate::error::StoreError;
use crate::model::{ProfileRecord, STORE_COLUMNS};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::{debug, info};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Default file name of the store.
pub const DEFAULT_STORE_FILE: &str = "winemaker_profiles.csv";

#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    records: Vec<ProfileRecord>,
    urls: HashSet<String>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    /// Read the store at `path`. A missing file yields an empty store; any
    /// other failure is returned.
    pub fn load(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No store at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new().from_reader(file);
        // Header read errors are not reported by `deserialize`
        reader.headers()?;
        let mut store = Self::new();
        for row in reader.deserialize() {
            let record: ProfileRecord = row?;
            store.push(record);
        }

        info!("Loaded {} profiles from {}", store.len(), path.display());
        Ok(store)
    }

    /// Rewrite the whole file at `path`. The header row is always written,
    /// so an empty store still produces a readable file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        writer.write_record(STORE_COLUMNS)?;
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        debug!("Wrote {} profiles to {}", self.records.len(), path.display());
        Ok(())
    }

    /// Exact match on the URL column.
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn push(&mut self, record: ProfileRecord) {
        self.urls.insert(record.url.clone());
        self.records.push(record);
    }

    pub fn records(&self) -> &[ProfileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
