//! Error taxonomy for plot retrieval.

use crate::types::PageId;

/// Failure of a single call to the encyclopedia provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Curl reported an error (DNS, connect, timeout, TLS, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// HTTP response had a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Http { url: String, status: u32 },
    /// Body was not the JSON shape the API documents.
    #[error("malformed provider response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The API answered with an `error` object.
    #[error("provider rejected the request ({code}): {info}")]
    Api { code: String, info: String },
}

/// Errors surfaced to the presentation layer.
///
/// "No match" is not here: an empty search is a normal outcome
/// ([`crate::types::Retrieval::NoMatch`]).
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// Blank query; rejected before any network call.
    #[error("please enter a movie title")]
    InvalidQuery,
    /// The provider could not be reached or answered with an error.
    #[error("encyclopedia service unavailable: {0}")]
    ProviderUnavailable(#[from] ProviderError),
    /// Neither a plot section nor a summary produced any text.
    #[error("plot not found for \"{title}\"")]
    ContentUnavailable {
        title: String,
        /// Set when the summary fetch itself failed.
        #[source]
        cause: Option<ProviderError>,
    },
    /// A disambiguation choice that is not among the matches for the query.
    #[error("page id {page_id} is not one of the matches for \"{query}\"")]
    InvalidChoice { query: String, page_id: PageId },
}
