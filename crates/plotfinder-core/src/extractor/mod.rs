//! Extractor: plot section lookup with summary fallback.
//!
//! Per call: fetch the article's sections; if a plot heading has text,
//! return it verbatim. Otherwise fetch the lead summary (only then, and only
//! after the section fetch finished) and return it flagged as a fallback.
//! No retries; a failed section fetch ends the call.

pub mod sections;

use crate::error::PlotError;
use crate::provider::EncyclopediaProvider;
use crate::types::{CandidateMatch, PlotResult};

pub struct Extractor<'p, P: ?Sized> {
    provider: &'p P,
    plot_headings: &'p [String],
    prefer_plot_section: bool,
}

impl<'p, P: EncyclopediaProvider + ?Sized> Extractor<'p, P> {
    pub fn new(provider: &'p P, plot_headings: &'p [String]) -> Self {
        Self {
            provider,
            plot_headings,
            prefer_plot_section: true,
        }
    }

    /// When off, the plot section is ignored and the summary is always used.
    pub fn prefer_plot_section(mut self, prefer: bool) -> Self {
        self.prefer_plot_section = prefer;
        self
    }

    pub fn get_plot(&self, candidate: &CandidateMatch) -> Result<PlotResult, PlotError> {
        let page_id = candidate.page_id;
        let article = self.provider.sections(page_id)?;

        let plot = if self.prefer_plot_section {
            sections::find_first(&article.sections, self.plot_headings)
        } else {
            None
        };
        if let Some(section) = plot {
            tracing::debug!(page_id, heading = %section.heading, "plot section found");
            return Ok(PlotResult::from_section(
                section.body.clone(),
                section.heading.trim().to_string(),
                candidate.title.clone(),
                article.url,
            ));
        }

        tracing::debug!(page_id, "no plot section; fetching summary");
        let summary = match self.provider.summary(page_id) {
            Ok(text) => text,
            Err(e) => {
                return Err(PlotError::ContentUnavailable {
                    title: candidate.title.clone(),
                    cause: Some(e),
                })
            }
        };
        if summary.trim().is_empty() {
            tracing::debug!(page_id, "summary empty");
            return Err(PlotError::ContentUnavailable {
                title: candidate.title.clone(),
                cause: None,
            });
        }

        tracing::debug!(page_id, "using summary fallback");
        Ok(PlotResult::from_summary(
            summary,
            candidate.title.clone(),
            article.url,
        ))
    }
}
