pub mod client;
pub mod error;
pub mod profile;
pub mod sitemap;
pub mod translate;

pub use client::{DEFAULT_USER_AGENT, PageClient};
pub use error::{Result, ScanError};
pub use profile::{ContentExtractor, DEFAULT_BLOCK_CLASS, extract_information, fetch_profile};
pub use sitemap::{SitemapEntry, fetch_sitemap, filter_entries, parse_sitemap};
pub use translate::{DEFAULT_TRANSLATE_ENDPOINT, GoogleTranslator, Translator};
