use crate::client::PageClient;
use crate::error::{Result, ScanError};
use quick_xml::events::Event;
use tracing::{debug, info};

/// One `<url>` element of a sitemap that carried both a location and an
/// image title. The title may be empty when the element is present but blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub title: String,
}

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Loc,
    ImageTitle,
}

/// Fetch `sitemap_url` and return its entries minus anything on the exclusion
/// list.
pub async fn fetch_sitemap(
    client: &PageClient,
    sitemap_url: &str,
    exclusions: &[String],
) -> Result<Vec<SitemapEntry>> {
    info!("Fetching sitemap {}", sitemap_url);
    let body = client.get_text(sitemap_url).await?;
    let entries = parse_sitemap(&body)?;
    let total = entries.len();
    let kept = filter_entries(entries, exclusions);
    info!(
        "Sitemap listed {} profile entries, {} after exclusions",
        total,
        kept.len()
    );
    Ok(kept)
}

/// Parse sitemap XML into (loc, image:title) pairs in document order.
///
/// `<url>` elements without a non-empty `<loc>` or without any
/// `<image:title>` element are skipped without error. A blank title is kept
/// as an empty string. Only the first `<image:title>` of an element counts.
pub fn parse_sitemap(xml: &str) -> Result<Vec<SitemapEntry>> {
    let mut entries = Vec::new();
    let mut in_url = false;
    let mut capturing: Option<Field> = None;
    let mut text = String::new();
    let mut loc: Option<String> = None;
    let mut title: Option<String> = None;

    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"url" => {
                    in_url = true;
                    loc = None;
                    title = None;
                }
                b"loc" if in_url && loc.is_none() => {
                    capturing = Some(Field::Loc);
                    text.clear();
                }
                b"image:title" if in_url && title.is_none() => {
                    capturing = Some(Field::ImageTitle);
                    text.clear();
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => {
                if in_url && title.is_none() && e.name().as_ref() == b"image:title" {
                    title = Some(String::new());
                }
            }
            Ok(Event::Text(ref e)) => {
                if capturing.is_some() {
                    let chunk = e
                        .unescape()
                        .map_err(|err| ScanError::ParseError(format!("sitemap text: {}", err)))?;
                    text.push_str(&chunk);
                }
            }
            Ok(Event::CData(ref e)) => {
                if capturing.is_some() {
                    text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"loc" if capturing == Some(Field::Loc) => {
                    loc = non_empty(&text);
                    capturing = None;
                }
                b"image:title" if capturing == Some(Field::ImageTitle) => {
                    title = Some(text.trim().to_string());
                    capturing = None;
                }
                b"url" if in_url => {
                    match (loc.take(), title.take()) {
                        (Some(loc), Some(title)) => entries.push(SitemapEntry { loc, title }),
                        (loc, _) => debug!("Skipping sitemap entry without loc/title: {:?}", loc),
                    }
                    in_url = false;
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ScanError::ParseError(format!(
                    "malformed sitemap at byte {}: {}",
                    reader.error_position(),
                    e
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}

/// Drop entries whose location contains any of the exclusion strings.
pub fn filter_entries(entries: Vec<SitemapEntry>, exclusions: &[String]) -> Vec<SitemapEntry> {
    entries
        .into_iter()
        .filter(|entry| {
            let excluded = exclusions.iter().any(|x| entry.loc.contains(x.as_str()));
            if excluded {
                debug!("Excluded {}", entry.loc);
            }
            !excluded
        })
        .collect()
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
