// Human-readable summary of the profile store

use crate::store::ProfileStore;
use url::Url;

/// Extract the path component from a URL
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() || path == "/" {
                "/".to_string()
            } else {
                path
            }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Render the store as a text report, one line per profile in store order.
pub fn generate_store_report(store: &ProfileStore) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    if store.is_empty() {
        report.push_str("No profiles stored yet\n");
        return report;
    }

    let untranslated = store.records().iter().filter(|r| !r.is_translated()).count();

    report.push_str("# Summary:\n");
    report.push_str(&format!("  Profiles stored: {}\n", store.len()));
    report.push_str(&format!("  Missing translation: {}\n", untranslated));
    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    let width = store
        .records()
        .iter()
        .map(|r| r.winemaker.chars().count())
        .max()
        .unwrap_or(0);

    for record in store.records() {
        let marker = if record.is_translated() { "✓" } else { "·" };
        report.push_str(&format!(
            "  {} {:<width$}  {}\n",
            marker,
            record.winemaker,
            extract_url_path(&record.url),
            width = width
        ));
    }

    report
}
