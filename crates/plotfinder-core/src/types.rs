//! Value types passed between the resolver, the extractor and the CLI.

use serde::Serialize;

/// Opaque article identifier issued by the provider (a Wikipedia page id).
pub type PageId = u64;

/// One article the provider's search suggested for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateMatch {
    pub title: String,
    pub page_id: PageId,
}

impl CandidateMatch {
    pub fn new(title: impl Into<String>, page_id: PageId) -> Self {
        Self {
            title: title.into(),
            page_id,
        }
    }
}

/// A named section of an article, with nested subsections in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub body: String,
    pub subsections: Vec<Section>,
}

impl Section {
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
            subsections: Vec::new(),
        }
    }

    pub fn with_subsections(mut self, subsections: Vec<Section>) -> Self {
        self.subsections = subsections;
        self
    }
}

/// Structured content of one article: top-level sections plus its canonical URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub url: Option<String>,
    pub sections: Vec<Section>,
}

/// Text shown to the user for a resolved article.
///
/// Never built with blank text: "nothing to show" is
/// [`crate::error::PlotError::ContentUnavailable`], not an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlotResult {
    text: String,
    is_fallback: bool,
    source_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    heading: Option<String>,
}

impl PlotResult {
    pub fn from_section(
        text: String,
        heading: String,
        source_title: String,
        source_url: Option<String>,
    ) -> Self {
        debug_assert!(!text.trim().is_empty());
        Self {
            text,
            is_fallback: false,
            source_title,
            source_url,
            heading: Some(heading),
        }
    }

    pub fn from_summary(
        text: String,
        source_title: String,
        source_url: Option<String>,
    ) -> Self {
        debug_assert!(!text.trim().is_empty());
        Self {
            text,
            is_fallback: true,
            source_title,
            source_url,
            heading: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when no plot section was usable and the lead summary was shown instead.
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    pub fn source_title(&self) -> &str {
        &self.source_title
    }

    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    /// Heading of the section the text came from; `None` for summary fallback.
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }
}

/// Outcome of one `retrieve_plot` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Retrieval {
    /// The search returned nothing. Not an error.
    NoMatch,
    /// Several articles matched and no choice was supplied; nothing was extracted.
    Candidates { candidates: Vec<CandidateMatch> },
    Plot(PlotResult),
}
