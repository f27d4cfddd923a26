//! Single entry point for the presentation layer: title in, outcome out.
//!
//! Disambiguation is two calls: the first returns the candidate list, the
//! second passes the chosen page id back in.

use crate::config::PlotfinderConfig;
use crate::error::PlotError;
use crate::extractor::Extractor;
use crate::provider::EncyclopediaProvider;
use crate::query::Query;
use crate::resolver::Resolver;
use crate::types::{PageId, Retrieval};

/// Settings the resolver and extractor need; a subset of the config.
#[derive(Debug, Clone)]
pub struct RetrievalSettings {
    pub max_results: usize,
    pub plot_headings: Vec<String>,
    pub prefer_plot_section: bool,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self::from(&PlotfinderConfig::default())
    }
}

impl From<&PlotfinderConfig> for RetrievalSettings {
    fn from(cfg: &PlotfinderConfig) -> Self {
        Self {
            max_results: cfg.max_results,
            plot_headings: cfg.plot_headings.clone(),
            prefer_plot_section: cfg.prefer_plot_section,
        }
    }
}

/// Searches for `title` and, when the target is unambiguous, extracts its plot.
///
/// - no hits: [`Retrieval::NoMatch`]
/// - one hit, or `choice` names one of the hits: [`Retrieval::Plot`]
/// - several hits and no `choice`: [`Retrieval::Candidates`], nothing extracted
///
/// A `choice` that is not among the hits fails with [`PlotError::InvalidChoice`].
pub fn retrieve_plot<P>(
    provider: &P,
    settings: &RetrievalSettings,
    title: &str,
    choice: Option<PageId>,
) -> Result<Retrieval, PlotError>
where
    P: EncyclopediaProvider + ?Sized,
{
    let query = Query::parse(title)?;
    let mut candidates =
        Resolver::new(provider, settings.max_results).search_query(&query)?;
    let extractor = Extractor::new(provider, &settings.plot_headings)
        .prefer_plot_section(settings.prefer_plot_section);

    let chosen = match choice {
        Some(page_id) => {
            let Some(i) = candidates.iter().position(|c| c.page_id == page_id) else {
                return Err(PlotError::InvalidChoice {
                    query: query.to_string(),
                    page_id,
                });
            };
            candidates.swap_remove(i)
        }
        None if candidates.is_empty() => return Ok(Retrieval::NoMatch),
        None if candidates.len() > 1 => {
            tracing::debug!(query = %query, hits = candidates.len(), "ambiguous; returning candidates");
            return Ok(Retrieval::Candidates { candidates });
        }
        None => candidates.remove(0),
    };

    tracing::info!(query = %query, page_id = chosen.page_id, title = %chosen.title, "extracting plot");
    extractor.get_plot(&chosen).map(Retrieval::Plot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::fake::{Call, FakeProvider};
    use crate::types::Section;

    const DARK_KNIGHT_PLOT: &str = "The Joker robs a Gotham City mob bank.";
    const AVATAR_PLOT: &str = "In 2154, humans mine unobtanium on Pandora.";

    fn provider() -> FakeProvider {
        FakeProvider::new()
            .with_search("The Dark Knight", &[("The Dark Knight", 4_746_087)])
            .with_article(
                4_746_087,
                "The Dark Knight",
                vec![Section::new("Plot", DARK_KNIGHT_PLOT)],
            )
            .with_search(
                "Avatar",
                &[
                    ("Avatar (2009 film)", 4_273_140),
                    ("Avatar: The Last Airbender", 1_185_017),
                ],
            )
            .with_article(
                4_273_140,
                "Avatar (2009 film)",
                vec![Section::new("Plot", AVATAR_PLOT)],
            )
    }

    #[test]
    fn blank_query_makes_no_provider_call() {
        let p = provider();
        for title in ["", "   ", "\t"] {
            let err = retrieve_plot(&p, &RetrievalSettings::default(), title, None).unwrap_err();
            assert!(matches!(err, PlotError::InvalidQuery));
        }
        assert!(p.calls().is_empty());
    }

    #[test]
    fn single_match_extracts_without_disambiguation() {
        let p = provider();
        let outcome =
            retrieve_plot(&p, &RetrievalSettings::default(), "The Dark Knight", None).unwrap();
        match outcome {
            Retrieval::Plot(result) => {
                assert!(!result.is_fallback());
                assert_eq!(result.text(), DARK_KNIGHT_PLOT);
                assert_eq!(result.source_title(), "The Dark Knight");
            }
            other => panic!("expected Plot, got {other:?}"),
        }
        assert_eq!(
            p.calls(),
            vec![
                Call::Search("The Dark Knight".to_string()),
                Call::Sections(4_746_087)
            ]
        );
    }

    #[test]
    fn multiple_matches_return_candidates_without_extraction() {
        let p = provider();
        let outcome = retrieve_plot(&p, &RetrievalSettings::default(), "Avatar", None).unwrap();
        match outcome {
            Retrieval::Candidates { candidates } => {
                let titles: Vec<&str> = candidates.iter().map(|c| c.title.as_str()).collect();
                assert_eq!(titles, ["Avatar (2009 film)", "Avatar: The Last Airbender"]);
            }
            other => panic!("expected Candidates, got {other:?}"),
        }
        assert_eq!(p.calls(), vec![Call::Search("Avatar".to_string())]);
    }

    #[test]
    fn choice_resolves_ambiguity() {
        let p = provider();
        let outcome =
            retrieve_plot(&p, &RetrievalSettings::default(), "Avatar", Some(4_273_140)).unwrap();
        match outcome {
            Retrieval::Plot(result) => {
                assert_eq!(result.source_title(), "Avatar (2009 film)");
                assert_eq!(result.text(), AVATAR_PLOT);
                assert!(!result.is_fallback());
            }
            other => panic!("expected Plot, got {other:?}"),
        }
    }

    #[test]
    fn unknown_choice_is_rejected() {
        let p = provider();
        let err = retrieve_plot(&p, &RetrievalSettings::default(), "Avatar", Some(42)).unwrap_err();
        match err {
            PlotError::InvalidChoice { query, page_id } => {
                assert_eq!(query, "Avatar");
                assert_eq!(page_id, 42);
            }
            other => panic!("expected InvalidChoice, got {other:?}"),
        }
    }

    #[test]
    fn no_hits_is_no_match() {
        let p = provider();
        let outcome = retrieve_plot(
            &p,
            &RetrievalSettings::default(),
            "Xyzzyplugh Nonexistent Film 9999",
            None,
        )
        .unwrap();
        assert_eq!(outcome, Retrieval::NoMatch);
    }

    #[test]
    fn search_failure_is_not_no_match() {
        let p = provider().failing_search();
        let err =
            retrieve_plot(&p, &RetrievalSettings::default(), "The Dark Knight", None).unwrap_err();
        assert!(matches!(err, PlotError::ProviderUnavailable(_)));
    }

    #[test]
    fn query_is_normalized_before_search() {
        let p = provider();
        let outcome =
            retrieve_plot(&p, &RetrievalSettings::default(), "  The Dark Knight. ", None).unwrap();
        assert!(matches!(outcome, Retrieval::Plot(_)));
        assert_eq!(p.calls()[0], Call::Search("The Dark Knight".to_string()));
    }

    #[test]
    fn max_results_of_one_never_auto_picks_ambiguous_title() {
        let p = provider();
        let settings = RetrievalSettings {
            max_results: 1,
            ..RetrievalSettings::default()
        };
        let outcome = retrieve_plot(&p, &settings, "Avatar", None).unwrap();
        match outcome {
            Retrieval::Candidates { candidates } => assert_eq!(candidates.len(), 2),
            other => panic!("expected Candidates, got {other:?}"),
        }
        assert_eq!(p.calls(), vec![Call::Search("Avatar".to_string())]);
    }
}
