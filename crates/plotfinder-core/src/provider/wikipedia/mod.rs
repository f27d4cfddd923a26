//! Wikipedia provider over the MediaWiki Action API.
//!
//! Uses the curl crate (libcurl) for transport. Search goes through
//! `list=search`; article content and the lead summary both come from the
//! TextExtracts `prop=extracts` module as plain text, so section structure is
//! recovered from the `== Heading ==` markers of the full extract.

mod extract;
mod http;
mod response;

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

use crate::config::PlotfinderConfig;
use crate::error::ProviderError;
use crate::types::{Article, CandidateMatch, PageId};

use super::EncyclopediaProvider;
use response::{PagesQuery, SearchQuery};

pub use http::HttpOptions;

/// Blocking Wikipedia client. Cheap to clone; holds no connections.
#[derive(Debug, Clone)]
pub struct WikipediaProvider {
    endpoint: Url,
    http: HttpOptions,
    summary_sentences: u32,
}

impl WikipediaProvider {
    pub fn new(endpoint: &str, http: HttpOptions, summary_sentences: u32) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).with_context(|| format!("invalid API endpoint: {endpoint}"))?;
        Ok(Self {
            endpoint,
            http,
            summary_sentences,
        })
    }

    /// Builds a client for the configured language wiki (or `api_base_url` override).
    pub fn from_config(cfg: &PlotfinderConfig) -> Result<Self> {
        let http = HttpOptions {
            user_agent: cfg.user_agent.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        };
        Self::new(&cfg.endpoint(), http, cfg.summary_sentences)
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    fn request_url(&self, params: &[(&str, &str)]) -> String {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("formatversion", "2")
            .extend_pairs(params);
        url.into()
    }

    fn fetch_page(&self, params: &[(&str, &str)]) -> Result<Option<response::Page>, ProviderError> {
        let url = self.request_url(params);
        let body = http::get(&url, &self.http)?;
        Ok(response::decode::<PagesQuery>(&body)?.into_page())
    }
}

impl EncyclopediaProvider for WikipediaProvider {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<CandidateMatch>, ProviderError> {
        let limit = limit.to_string();
        let url = self.request_url(&[
            ("action", "query"),
            ("list", "search"),
            ("srsearch", query),
            ("srlimit", limit.as_str()),
            ("srprop", ""),
        ]);
        tracing::debug!(query, "searching {}", self.endpoint);
        let body = http::get(&url, &self.http)?;
        let hits = response::decode::<SearchQuery>(&body)?.search;
        Ok(hits
            .into_iter()
            .map(|hit| CandidateMatch::new(hit.title, hit.pageid))
            .collect())
    }

    fn sections(&self, page_id: PageId) -> Result<Article, ProviderError> {
        let page_id = page_id.to_string();
        let page = self.fetch_page(&[
            ("action", "query"),
            ("prop", "extracts|info"),
            ("inprop", "url"),
            ("explaintext", "1"),
            ("exsectionformat", "wiki"),
            ("pageids", page_id.as_str()),
        ])?;
        let Some(page) = page else {
            tracing::debug!(page_id = %page_id, "page reported missing");
            return Ok(Article::default());
        };
        let sections = extract::parse_sections(page.extract.as_deref().unwrap_or_default());
        Ok(Article {
            title: page.title,
            url: page.fullurl,
            sections,
        })
    }

    fn summary(&self, page_id: PageId) -> Result<String, ProviderError> {
        let page_id = page_id.to_string();
        let sentences = self.summary_sentences.to_string();
        let page = self.fetch_page(&[
            ("action", "query"),
            ("prop", "extracts"),
            ("exintro", "1"),
            ("explaintext", "1"),
            ("exsentences", sentences.as_str()),
            ("pageids", page_id.as_str()),
        ])?;
        Ok(page
            .and_then(|p| p.extract)
            .map(|text| text.trim().to_string())
            .unwrap_or_default())
    }
}
