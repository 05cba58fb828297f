// Tests for the CSV profile store

use std::fs;
use terroir_core::model::{ProfileRecord, STORE_COLUMNS};
use terroir_core::store::ProfileStore;
use tempfile::TempDir;

fn record(url: &str, name: &str) -> ProfileRecord {
    ProfileRecord::new(
        url.to_string(),
        name.to_string(),
        format!("{} makes wine", name),
        format!("{} maakt wijn", name),
    )
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.csv");

    let store = ProfileStore::load(&path).unwrap();

    assert!(store.is_empty());
    assert!(!ProfileStore::exists(&path));
}

#[test]
fn test_load_malformed_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.csv");
    fs::write(&path, "URL,Winemaker\nhttps://www.terrovin.be/a,A,extra,fields\n").unwrap();

    assert!(ProfileStore::load(&path).is_err());
}

#[test]
fn test_load_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ProfileStore::load(temp_dir.path()).is_err());
}

#[test]
fn test_load_legacy_three_column_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("legacy.csv");
    fs::write(
        &path,
        "URL,Winemaker,Information\nhttps://www.terrovin.be/a,A,Oude tekst\n",
    )
    .unwrap();

    let store = ProfileStore::load(&path).unwrap();

    assert_eq!(store.len(), 1);
    let loaded = &store.records()[0];
    assert_eq!(loaded.url, "https://www.terrovin.be/a");
    assert_eq!(loaded.information, "Oude tekst");
    assert_eq!(loaded.translated_information, "");
    assert!(!loaded.is_translated());
}

#[test]
fn test_load_reads_empty_cells() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.csv");
    fs::write(
        &path,
        "URL,Winemaker,Translated Information,Information\nhttps://www.terrovin.be/a,A,,\n",
    )
    .unwrap();

    let store = ProfileStore::load(&path).unwrap();

    assert_eq!(store.records()[0].information, "");
    assert_eq!(store.records()[0].translated_information, "");
}

// ============================================================================
// Saving
// ============================================================================

#[test]
fn test_save_writes_fixed_column_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.csv");

    let mut store = ProfileStore::new();
    store.push(record("https://www.terrovin.be/a", "A"));
    store.save(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let header = content.lines().next().unwrap();
    assert_eq!(header, STORE_COLUMNS.join(","));
    assert_eq!(header, "URL,Winemaker,Translated Information,Information");
    assert_eq!(
        content.lines().nth(1).unwrap(),
        "https://www.terrovin.be/a,A,A makes wine,A maakt wijn"
    );
}

#[test]
fn test_save_empty_store_writes_header() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.csv");

    ProfileStore::new().save(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.trim_end(), "URL,Winemaker,Translated Information,Information");

    let reloaded = ProfileStore::load(&path).unwrap();
    assert!(reloaded.is_empty());
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("store.csv");

    ProfileStore::new().save(&path).unwrap();

    assert!(path.exists());
}

#[test]
fn test_round_trip_preserves_rows_and_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.csv");

    let mut store = ProfileStore::new();
    store.push(record("https://www.terrovin.be/b", "B"));
    store.push(ProfileRecord::new(
        "https://www.terrovin.be/a".to_string(),
        "Château \"A\", Fils".to_string(),
        "Line one\nline two".to_string(),
        "Regel één, regel twee".to_string(),
    ));
    store.push(record("https://www.terrovin.be/c", "C"));
    store.save(&path).unwrap();
    let first_write = fs::read_to_string(&path).unwrap();

    let reloaded = ProfileStore::load(&path).unwrap();
    assert_eq!(reloaded.records(), store.records());

    reloaded.save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), first_write);
}

#[test]
fn test_round_trip_upgrades_legacy_layout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("legacy.csv");
    fs::write(&path, "URL,Winemaker,Information\nhttps://www.terrovin.be/a,A,Tekst\n").unwrap();

    ProfileStore::load(&path).unwrap().save(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "URL,Winemaker,Translated Information,Information\nhttps://www.terrovin.be/a,A,,Tekst\n"
    );
}

// ============================================================================
// Membership
// ============================================================================

#[test]
fn test_contains_is_exact_match() {
    let mut store = ProfileStore::new();
    store.push(record("https://www.terrovin.be/domaine-rimbert-2", "Rimbert"));

    assert!(store.contains("https://www.terrovin.be/domaine-rimbert-2"));
    assert!(!store.contains("https://www.terrovin.be/domaine-rimbert"));
    assert!(!store.contains("domaine-rimbert-2"));
}

#[test]
fn test_contains_after_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.csv");

    let mut store = ProfileStore::new();
    store.push(record("https://www.terrovin.be/a", "A"));
    store.save(&path).unwrap();

    let reloaded = ProfileStore::load(&path).unwrap();
    assert!(reloaded.contains("https://www.terrovin.be/a"));
    assert!(!reloaded.contains("https://www.terrovin.be/b"));
}
