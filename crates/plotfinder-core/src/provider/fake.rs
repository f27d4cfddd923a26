//! In-memory provider for unit tests; records every call.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::ProviderError;
use crate::types::{Article, CandidateMatch, PageId, Section};

use super::EncyclopediaProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Search(String),
    Sections(PageId),
    Summary(PageId),
}

#[derive(Default)]
pub(crate) struct FakeProvider {
    searches: HashMap<String, Vec<CandidateMatch>>,
    articles: HashMap<PageId, Article>,
    summaries: HashMap<PageId, String>,
    fail_search: bool,
    fail_sections: bool,
    fail_summary: bool,
    calls: RefCell<Vec<Call>>,
}

fn unavailable() -> ProviderError {
    ProviderError::Http {
        url: "https://en.wikipedia.org/w/api.php".to_string(),
        status: 503,
    }
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str, hits: &[(&str, PageId)]) -> Self {
        let hits = hits
            .iter()
            .map(|(title, id)| CandidateMatch::new(*title, *id))
            .collect();
        self.searches.insert(query.to_string(), hits);
        self
    }

    pub fn with_article(mut self, page_id: PageId, title: &str, sections: Vec<Section>) -> Self {
        self.articles.insert(
            page_id,
            Article {
                title: title.to_string(),
                url: Some(format!(
                    "https://en.wikipedia.org/wiki/{}",
                    title.replace(' ', "_")
                )),
                sections,
            },
        );
        self
    }

    pub fn with_summary(mut self, page_id: PageId, text: &str) -> Self {
        self.summaries.insert(page_id, text.to_string());
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    pub fn failing_sections(mut self) -> Self {
        self.fail_sections = true;
        self
    }

    pub fn failing_summary(mut self) -> Self {
        self.fail_summary = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl EncyclopediaProvider for FakeProvider {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<CandidateMatch>, ProviderError> {
        self.calls.borrow_mut().push(Call::Search(query.to_string()));
        if self.fail_search {
            return Err(unavailable());
        }
        let mut hits = self.searches.get(query).cloned().unwrap_or_default();
        hits.truncate(limit);
        Ok(hits)
    }

    fn sections(&self, page_id: PageId) -> Result<Article, ProviderError> {
        self.calls.borrow_mut().push(Call::Sections(page_id));
        if self.fail_sections {
            return Err(unavailable());
        }
        Ok(self.articles.get(&page_id).cloned().unwrap_or_default())
    }

    fn summary(&self, page_id: PageId) -> Result<String, ProviderError> {
        self.calls.borrow_mut().push(Call::Summary(page_id));
        if self.fail_summary {
            return Err(unavailable());
        }
        Ok(self.summaries.get(&page_id).cloned().unwrap_or_default())
    }
}
