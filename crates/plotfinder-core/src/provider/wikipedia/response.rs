//! Minimal MediaWiki Action API response shapes (`format=json&formatversion=2`).

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ProviderError;

#[derive(Debug, Deserialize)]
struct Envelope<Q> {
    #[serde(default)]
    query: Option<Q>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

/// `list=search` payload.
#[derive(Debug, Default, Deserialize)]
pub(super) struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchHit {
    pub title: String,
    pub pageid: u64,
}

/// `prop=extracts|info` payload.
#[derive(Debug, Default, Deserialize)]
pub(super) struct PagesQuery {
    #[serde(default)]
    pub pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Page {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub fullurl: Option<String>,
    #[serde(default)]
    pub missing: bool,
}

/// Decodes the `query` object of a response, or the API `error` if present.
///
/// A response without `query` (e.g. a search with no hits on some wikis)
/// decodes to the empty payload.
pub(super) fn decode<Q>(bytes: &[u8]) -> Result<Q, ProviderError>
where
    Q: DeserializeOwned + Default,
{
    let envelope: Envelope<Q> = serde_json::from_slice(bytes)?;
    if let Some(err) = envelope.error {
        return Err(ProviderError::Api {
            code: err.code,
            info: err.info,
        });
    }
    Ok(envelope.query.unwrap_or_default())
}

impl PagesQuery {
    /// The single requested page, unless the API reports it missing.
    pub fn into_page(self) -> Option<Page> {
        self.pages.into_iter().find(|p| !p.missing)
    }
}
