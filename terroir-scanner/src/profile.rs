use crate::client::PageClient;
use crate::error::{Result, ScanError};
use scraper::{Html, Selector};
use tracing::debug;

/// Styling class the site's page builder puts on rendered text blocks.
pub const DEFAULT_BLOCK_CLASS: &str = "sqs-block-content";

/// Fetch a profile page and return its raw HTML.
pub async fn fetch_profile(client: &PageClient, url: &str) -> Result<String> {
    client.get_text(url).await
}

/// Pulls the biography text out of a profile page.
pub struct ContentExtractor {
    blocks: Selector,
    paragraphs: Selector,
}

impl ContentExtractor {
    pub fn new(block_class: &str) -> Result<Self> {
        let blocks = Selector::parse(&format!("div.{}", block_class)).map_err(|e| {
            ScanError::ParseError(format!("invalid block class '{}': {}", block_class, e))
        })?;
        let paragraphs = Selector::parse("p").unwrap();

        Ok(Self { blocks, paragraphs })
    }

    /// Concatenate the trimmed text of every paragraph inside every content
    /// block, in document order, joined by single spaces.
    ///
    /// Paragraphs that trim down to nothing are dropped. `str::trim` treats
    /// U+00A0 as whitespace, so the `&nbsp;` spacer paragraphs the page builder
    /// emits fall out here too.
    pub fn extract(&self, html: &str) -> String {
        let document = Html::parse_document(html);

        let paragraphs: Vec<String> = document
            .select(&self.blocks)
            .flat_map(|block| block.select(&self.paragraphs))
            .map(|p| p.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        debug!("Extracted {} paragraphs", paragraphs.len());
        paragraphs.join(" ")
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self {
            blocks: Selector::parse(&format!("div.{}", DEFAULT_BLOCK_CLASS)).unwrap(),
            paragraphs: Selector::parse("p").unwrap(),
        }
    }
}

/// Extract profile text using the default content block class.
pub fn extract_information(html: &str) -> String {
    ContentExtractor::default().extract(html)
}
