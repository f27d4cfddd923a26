//! Encyclopedia provider interface.
//!
//! The resolver and extractor only depend on this trait and do not know
//! about Wikipedia, HTTP or JSON. The production implementation lives in
//! [`wikipedia`].

pub mod wikipedia;

#[cfg(test)]
pub(crate) mod fake;

use crate::error::ProviderError;
use crate::types::{Article, CandidateMatch, PageId};

pub use wikipedia::WikipediaProvider;

/// Outbound capabilities consumed from the content provider.
///
/// Calls are blocking; run them on `spawn_blocking` when used from async code.
pub trait EncyclopediaProvider {
    /// Title search, at most `limit` hits, in the provider's relevance order.
    fn search(&self, query: &str, limit: usize) -> Result<Vec<CandidateMatch>, ProviderError>;

    /// Full structured content of one article.
    fn sections(&self, page_id: PageId) -> Result<Article, ProviderError>;

    /// Lead summary of one article; empty when the article has none.
    fn summary(&self, page_id: PageId) -> Result<String, ProviderError>;
}
