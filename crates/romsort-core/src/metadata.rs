//! Metadata lookup against the remote game-database pages.
//!
//! Uses the curl crate (libcurl) to fetch the page for an identifier and
//! the scraper crate to pull the two fields out of the document. The page
//! markup is an external schema we do not control; everything tied to it
//! (selectors, attribute names) stays behind [`MetadataSource`] so the
//! extraction strategy can be swapped without touching the pipeline.

use scraper::{Html, Selector};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// CSS path to the header image whose `alt` attribute carries the console name.
const CONSOLE_SELECTOR: &str = r"#elCmsPageWrap > div.ipsPageHeader.ipsBox.ipsResponsive_pull.ipsPadding.ipsClearfix > div.ipsPageHeader__meta.ipsFlex.ipsFlex-jc\:between.ipsFlex-ai\:center.ipsFlex-fw\:wrap.ipsGap\:3 > div.ipsFlex-flex\:11 > span > a:nth-child(2) > img";

/// CSS path to the heading span holding the game's display title.
const TITLE_SELECTOR: &str = r"#elCmsPageWrap > div.ipsPageHeader.ipsBox.ipsResponsive_pull.ipsPadding.ipsClearfix > div.ipsFlex.ipsFlex-ai\:center.ipsFlex-fw\:wrap.ipsGap\:4 > div.ipsFlex-flex\:11 > h1 > span";

/// The two fields resolved for one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMetadata {
    /// Display title of the game, as shown on the page heading.
    pub title: String,
    /// Hardware platform label, e.g. "Sony PlayStation 2".
    pub console: String,
}

/// Error resolving metadata for one identifier. Typed so the orchestrator
/// can report the failure class without string matching.
#[derive(Debug, Error)]
pub enum LookupError {
    /// A selector constant failed to parse. Indicates a bug, not bad input.
    #[error("invalid selector: {0}")]
    Selector(String),
    /// The configured base URL plus identifier is not a valid URL.
    #[error("invalid metadata URL: {0}")]
    Url(#[from] url::ParseError),
    /// Curl reported an error (timeout, connection, TLS, etc.).
    #[error(transparent)]
    Transport(#[from] curl::Error),
    /// The page request returned a non-2xx status.
    #[error("HTTP {status} fetching {url}")]
    Http { status: u32, url: String },
    /// The response body is not valid UTF-8.
    #[error("response from {url} is not valid UTF-8")]
    Encoding { url: String },
    /// The expected element is absent or empty. Hard error: an unresolved
    /// field must never reach path construction.
    #[error("page for '{id}' has no {field}")]
    MissingField { id: String, field: &'static str },
}

/// Resolves (title, console) for an identifier.
pub trait MetadataSource {
    fn lookup(&self, id: &str) -> Result<GameMetadata, LookupError>;
}

/// Live metadata source scraping the game-database pages.
pub struct RomstationClient {
    base_url: String,
    title_selector: Selector,
    console_selector: Selector,
}

impl RomstationClient {
    /// Builds a client for pages under `base_url` (the identifier is
    /// appended per lookup; no separator is inserted).
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        let title_selector =
            Selector::parse(TITLE_SELECTOR).map_err(|e| LookupError::Selector(e.to_string()))?;
        let console_selector =
            Selector::parse(CONSOLE_SELECTOR).map_err(|e| LookupError::Selector(e.to_string()))?;
        Ok(Self {
            base_url: base_url.to_string(),
            title_selector,
            console_selector,
        })
    }

    /// Page URL for one identifier, validated.
    fn page_url(&self, id: &str) -> Result<Url, LookupError> {
        Ok(Url::parse(&format!("{}{}", self.base_url, id))?)
    }

    /// GET the page body. Follows redirects; bounded by connect/total
    /// timeouts so a dead host cannot hang the whole batch.
    fn fetch_page(&self, url: &Url) -> Result<String, LookupError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(Duration::from_secs(15))?;
        easy.timeout(Duration::from_secs(30))?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if !(200..300).contains(&status) {
            return Err(LookupError::Http {
                status,
                url: url.to_string(),
            });
        }

        String::from_utf8(body).map_err(|_| LookupError::Encoding {
            url: url.to_string(),
        })
    }

    /// Pulls both fields out of one parsed document.
    fn extract(&self, id: &str, html: &str) -> Result<GameMetadata, LookupError> {
        let doc = Html::parse_document(html);

        let console = doc
            .select(&self.console_selector)
            .next()
            .and_then(|img| img.value().attr("alt"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LookupError::MissingField {
                id: id.to_string(),
                field: "console",
            })?;

        let title = doc
            .select(&self.title_selector)
            .next()
            .map(|span| span.text().collect::<String>())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LookupError::MissingField {
                id: id.to_string(),
                field: "title",
            })?;

        Ok(GameMetadata { title, console })
    }
}

impl MetadataSource for RomstationClient {
    /// One GET per identifier; title and console come from the same document.
    fn lookup(&self, id: &str) -> Result<GameMetadata, LookupError> {
        let url = self.page_url(id)?;
        tracing::debug!(%url, id, "fetching metadata page");
        let html = self.fetch_page(&url)?;
        self.extract(id, &html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal document matching the page header structure the selectors
    /// are pinned to.
    fn page(title_span: &str, console_img: &str) -> String {
        format!(
            concat!(
                r#"<html><body><div id="elCmsPageWrap">"#,
                r#"<div class="ipsPageHeader ipsBox ipsResponsive_pull ipsPadding ipsClearfix">"#,
                r#"<div class="ipsPageHeader__meta ipsFlex ipsFlex-jc:between ipsFlex-ai:center ipsFlex-fw:wrap ipsGap:3">"#,
                r#"<div class="ipsFlex-flex:11"><span><a href="/games/">Games</a><a href="/games/ps2/">{img}</a></span></div>"#,
                r#"</div>"#,
                r#"<div class="ipsFlex ipsFlex-ai:center ipsFlex-fw:wrap ipsGap:4">"#,
                r#"<div class="ipsFlex-flex:11"><h1>{h1}</h1></div>"#,
                r#"</div>"#,
                r#"</div></div></body></html>"#,
            ),
            img = console_img,
            h1 = title_span,
        )
    }

    fn client() -> RomstationClient {
        RomstationClient::new("https://games.example.org/page/").unwrap()
    }

    #[test]
    fn selectors_parse() {
        client();
    }

    #[test]
    fn page_url_appends_identifier() {
        let url = client().page_url("12345").unwrap();
        assert_eq!(url.as_str(), "https://games.example.org/page/12345");
    }

    #[test]
    fn extracts_title_and_console() {
        let html = page(
            "<span>007: From Russia with Love</span>",
            r#"<img src="/ps2.png" alt="Sony PlayStation 2">"#,
        );
        let meta = client().extract("12345", &html).unwrap();
        assert_eq!(
            meta,
            GameMetadata {
                title: "007: From Russia with Love".to_string(),
                console: "Sony PlayStation 2".to_string(),
            }
        );
    }

    #[test]
    fn title_text_is_trimmed() {
        let html = page(
            "<span>\n  Ico\n  </span>",
            r#"<img alt="Sony PlayStation 2">"#,
        );
        let meta = client().extract("7", &html).unwrap();
        assert_eq!(meta.title, "Ico");
    }

    #[test]
    fn missing_console_image_is_a_hard_error() {
        let html = page("<span>Ico</span>", "no image here");
        match client().extract("7", &html) {
            Err(LookupError::MissingField { id, field }) => {
                assert_eq!(id, "7");
                assert_eq!(field, "console");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn empty_alt_attribute_is_a_hard_error() {
        let html = page("<span>Ico</span>", r#"<img alt="">"#);
        assert!(matches!(
            client().extract("7", &html),
            Err(LookupError::MissingField { field: "console", .. })
        ));
    }

    #[test]
    fn missing_title_span_is_a_hard_error() {
        let html = page("no heading span", r#"<img alt="Sony PlayStation 2">"#);
        assert!(matches!(
            client().extract("7", &html),
            Err(LookupError::MissingField { field: "title", .. })
        ));
    }

    #[test]
    fn unrelated_markup_does_not_match() {
        // Same classes but outside #elCmsPageWrap must not be selected.
        let html = r#"<html><body><div class="ipsPageHeader ipsBox ipsResponsive_pull ipsPadding ipsClearfix"><h1><span>Decoy</span></h1></div></body></html>"#;
        assert!(client().extract("7", html).is_err());
    }
}
