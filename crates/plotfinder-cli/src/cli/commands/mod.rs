//! CLI command handlers, one file per subcommand.

mod completions;
mod config;
mod man;
mod plot;
mod search;

pub use completions::run_completions;
pub use config::run_config;
pub use man::run_man;
pub use plot::{run_plot, PlotOptions};
#[cfg(test)]
pub use plot::save_result;
pub use search::run_search;

use anyhow::{Context, Result};
use plotfinder_core::config::PlotfinderConfig;
use plotfinder_core::resolver::Resolver;
use plotfinder_core::{retrieve_plot, CandidateMatch, PageId, Retrieval, RetrievalSettings};
use plotfinder_core::WikipediaProvider;

/// Runs one blocking retrieval off the async runtime.
async fn retrieve(cfg: &PlotfinderConfig, title: &str, choice: Option<PageId>) -> Result<Retrieval> {
    let provider = WikipediaProvider::from_config(cfg)?;
    let settings = RetrievalSettings::from(cfg);
    let title = title.to_string();
    let outcome = tokio::task::spawn_blocking(move || {
        retrieve_plot(&provider, &settings, &title, choice)
    })
    .await
    .context("retrieval task join")??;
    Ok(outcome)
}

/// Search only; no article content is fetched.
async fn search_candidates(cfg: &PlotfinderConfig, title: &str) -> Result<Vec<CandidateMatch>> {
    let provider = WikipediaProvider::from_config(cfg)?;
    let max_results = cfg.max_results;
    let title = title.to_string();
    let candidates = tokio::task::spawn_blocking(move || {
        Resolver::new(&provider, max_results).search(&title)
    })
    .await
    .context("search task join")??;
    Ok(candidates)
}
