use crate::error::{Result, ScanError};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com";

/// Machine translation backend.
pub trait Translator {
    /// Translate `text` from `source` to `target` (ISO 639-1 codes).
    fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// Client for the public Google Translate `translate_a/single` endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_TRANSLATE_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let url = format!("{}/translate_a/single", self.endpoint);
        debug!("Translating {} chars {} -> {}", text.len(), source, target);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::Translation(format!(
                "translation service answered {}",
                status.as_u16()
            )));
        }

        let body = response.text().await?;
        parse_translation(&body)
    }
}

/// Pull the translated text out of a `translate_a/single` response.
///
/// The payload is a nested array whose first element lists the translated
/// segments; the first item of every segment is its translated text.
pub fn parse_translation(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ScanError::Translation(format!("unreadable response: {}", e)))?;

    let root = value
        .as_array()
        .ok_or_else(|| ScanError::Translation("response is not an array".to_string()))?;

    let segments = match root.first() {
        Some(Value::Array(segments)) => segments,
        // Empty input comes back with a null segment list
        Some(Value::Null) => return Ok(String::new()),
        _ => {
            return Err(ScanError::Translation(
                "response has no segment list".to_string(),
            ));
        }
    };

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}
