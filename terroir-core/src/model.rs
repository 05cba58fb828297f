use serde::{Deserialize, Serialize};

/// Column order of the persisted store.
pub const STORE_COLUMNS: [&str; 4] = ["URL", "Winemaker", "Translated Information", "Information"];

/// One harvested winemaker profile. A row of the store, keyed by `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Winemaker")]
    pub winemaker: String,
    /// Missing in stores written before translation was added.
    #[serde(rename = "Translated Information", default)]
    pub translated_information: String,
    #[serde(rename = "Information", default)]
    pub information: String,
}

impl ProfileRecord {
    pub fn new(
        url: String,
        winemaker: String,
        translated_information: String,
        information: String,
    ) -> Self {
        Self {
            url,
            winemaker,
            translated_information,
            information,
        }
    }

    pub fn is_translated(&self) -> bool {
        !self.translated_information.trim().is_empty()
    }
}
