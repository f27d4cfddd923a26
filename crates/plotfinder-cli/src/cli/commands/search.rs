//! `plotfinder search` – list matching articles without fetching any content.

use anyhow::Result;
use plotfinder_core::config::PlotfinderConfig;
use plotfinder_core::resolver::suggested_index;
use std::io;

use super::search_candidates;
use crate::cli::render;

pub async fn run_search(cfg: &PlotfinderConfig, title: &str, json: bool) -> Result<()> {
    let candidates = search_candidates(cfg, title).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else if candidates.is_empty() {
        println!("No Wikipedia article found for \"{title}\".");
    } else {
        let suggested = suggested_index(title, &candidates);
        render::write_candidates(&candidates, suggested, &mut io::stdout().lock())?;
    }
    Ok(())
}
