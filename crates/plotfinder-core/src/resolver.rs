//! Resolver: turns a free-text title into ranked candidate articles.
//!
//! The resolver never chooses between several candidates; that is the
//! caller's job (see [`suggested_index`] for the default an interactive
//! picker should highlight).

use crate::error::PlotError;
use crate::provider::EncyclopediaProvider;
use crate::query::Query;
use crate::types::CandidateMatch;

/// Smallest search limit that can still reveal an ambiguous title.
pub const MIN_RESULTS: usize = 2;

pub struct Resolver<'p, P: ?Sized> {
    provider: &'p P,
    max_results: usize,
}

impl<'p, P: EncyclopediaProvider + ?Sized> Resolver<'p, P> {
    /// `max_results` below [`MIN_RESULTS`] is raised to it.
    pub fn new(provider: &'p P, max_results: usize) -> Self {
        Self {
            provider,
            max_results: max_results.max(MIN_RESULTS),
        }
    }

    /// Candidates for `raw_query`, in the provider's ranking order.
    ///
    /// Blank input fails with [`PlotError::InvalidQuery`] without touching the
    /// provider. An empty vector means no match; provider failures are
    /// [`PlotError::ProviderUnavailable`], never an empty list.
    pub fn search(&self, raw_query: &str) -> Result<Vec<CandidateMatch>, PlotError> {
        let query = Query::parse(raw_query)?;
        self.search_query(&query)
    }

    pub fn search_query(&self, query: &Query) -> Result<Vec<CandidateMatch>, PlotError> {
        let mut candidates = self.provider.search(query.as_str(), self.max_results)?;
        candidates.truncate(self.max_results);
        tracing::debug!(query = %query, hits = candidates.len(), "search complete");
        Ok(candidates)
    }
}

/// Index a picker should preselect for `query` among `candidates`.
///
/// `query` is normalized like a search query, so `Inception.` matches
/// `Inception`. Exact (case-insensitive) title match first, then the first
/// title that looks like a film ("film" or a "(1999)"-style year), then the
/// top hit.
/// `None` only for an empty list.
pub fn suggested_index(query: &str, candidates: &[CandidateMatch]) -> Option<usize> {
    if candidates.is_empty() {
        return None;
    }
    let wanted = Query::parse(query)
        .map(|q| q.as_str().to_lowercase())
        .unwrap_or_default();
    if let Some(i) = candidates
        .iter()
        .position(|c| c.title.to_lowercase() == wanted)
    {
        return Some(i);
    }
    let film_like = candidates
        .iter()
        .position(|c| c.title.to_lowercase().contains("film") || has_year_in_parens(&c.title));
    Some(film_like.unwrap_or(0))
}

fn has_year_in_parens(title: &str) -> bool {
    title.as_bytes().windows(6).any(|w| {
        w[0] == b'(' && w[5] == b')' && w[1..5].iter().all(u8::is_ascii_digit)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::fake::FakeProvider;

    #[test]
    fn limit_of_one_still_returns_both_ambiguous_hits() {
        let provider = FakeProvider::new().with_search(
            "Avatar",
            &[
                ("Avatar (2009 film)", 4_273_140),
                ("Avatar: The Last Airbender", 1_185_017),
            ],
        );
        let hits = Resolver::new(&provider, 1).search("Avatar").unwrap();
        assert_eq!(hits.len(), 2);
    }

    fn titles(list: &[&str]) -> Vec<CandidateMatch> {
        list.iter()
            .enumerate()
            .map(|(i, t)| CandidateMatch::new(*t, i as u64 + 1))
            .collect()
    }

    #[test]
    fn exact_match_wins() {
        let c = titles(&["Avatar (2009 film)", "Avatar", "Avatar: The Last Airbender"]);
        assert_eq!(suggested_index("avatar", &c), Some(1));
    }

    #[test]
    fn exact_match_uses_normalized_query() {
        let c = titles(&["Inception (soundtrack)", "Inception (2010 film)", "Inception"]);
        assert_eq!(suggested_index("  Inception. ", &c), Some(2));
    }

    #[test]
    fn film_keyword_preferred_over_top_hit() {
        let c = titles(&["Heat (disambiguation)", "Heat (1995 film)", "Miami Heat"]);
        assert_eq!(suggested_index("Heat", &c), Some(1));
    }

    #[test]
    fn year_in_parens_counts_as_film() {
        let c = titles(&["Solaris (novel)", "Solaris (1972)", "Solaris (2002)"]);
        assert_eq!(suggested_index("Solaris", &c), Some(1));
    }

    #[test]
    fn falls_back_to_first() {
        let c = titles(&["Vertigo (medical)", "Vertigo (band)"]);
        assert_eq!(suggested_index("vertigo effect", &c), Some(0));
        assert_eq!(suggested_index("x", &[]), None);
    }

    #[test]
    fn year_detection() {
        assert!(has_year_in_parens("Dune (2021)"));
        assert!(!has_year_in_parens("Dune (21)"));
        assert!(!has_year_in_parens("Dune 2021"));
        assert!(!has_year_in_parens("Dune (20211)"));
    }
}
