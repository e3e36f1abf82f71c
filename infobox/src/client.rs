//! MediaWiki API client.

use serde::Deserialize;

use crate::error::{InfoboxError, Result};
use crate::scrape;

/// Default MediaWiki API endpoint (English Wikipedia).
pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Synchronous client for fetching rendered page HTML.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    agent: ureq::Agent,
    endpoint: String,
}

impl Client {
    /// Creates a client against the default endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Creates a client against a custom MediaWiki API endpoint, e.g.
    /// another language edition or a local mirror.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            endpoint: endpoint.into(),
        }
    }

    /// Returns the configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the rendered HTML of a page by title, following
    /// redirects so informal titles resolve to the canonical page.
    pub fn page_html(&self, title: &str) -> Result<String> {
        tracing::debug!(title, endpoint = %self.endpoint, "fetching page html");

        let mut response = self
            .agent
            .get(&self.endpoint)
            .query("action", "parse")
            .query("page", title)
            .query("prop", "text")
            .query("format", "json")
            .query("formatversion", "2")
            .query("redirects", "1")
            .call()?;
        let payload: ParseResponse = response.body_mut().read_json()?;

        if let Some(error) = payload.error {
            return Err(InfoboxError::Api(format!("{}: {}", error.code, error.info)));
        }
        let parse = payload
            .parse
            .ok_or_else(|| InfoboxError::Api("response has no parse payload".to_string()))?;

        tracing::debug!(title = %parse.title, bytes = parse.text.len(), "page html fetched");
        Ok(parse.text)
    }

    /// Fetches a page and returns the cleaned text of its first
    /// infobox.
    pub fn first_infobox_text(&self, title: &str) -> Result<String> {
        let html = self.page_html(title)?;
        let infobox = scrape::first_infobox(&html).ok_or(InfoboxError::NoInfobox)?;
        Ok(scrape::clean_text(&scrape::element_text(infobox)))
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level `action=parse` response.
#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: Option<ParsePayload>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ParsePayload {
    title: String,
    /// Rendered page HTML (`formatversion=2` inlines it as a string).
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    info: String,
}
