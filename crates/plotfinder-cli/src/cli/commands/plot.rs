//! `plotfinder plot` – resolve a title, disambiguate, print (and optionally save) the plot.

use anyhow::{bail, Result};
use plotfinder_core::config::PlotfinderConfig;
use plotfinder_core::resolver::suggested_index;
use plotfinder_core::{export, CandidateMatch, PageId, PlotResult, Retrieval};
use std::io::{self, IsTerminal};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use super::retrieve;
use crate::cli::{prompt, render};

#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub title: String,
    pub choice: Option<PageId>,
    pub pick: Option<NonZeroUsize>,
    pub no_prompt: bool,
    pub save: Option<PathBuf>,
    pub overwrite: bool,
    pub json: bool,
}

pub async fn run_plot(cfg: &PlotfinderConfig, opts: PlotOptions) -> Result<()> {
    let outcome = retrieve(cfg, &opts.title, opts.choice).await?;

    let result = match outcome {
        Retrieval::Plot(result) => result,
        Retrieval::NoMatch => {
            if opts.json {
                println!("{}", serde_json::to_string_pretty(&Retrieval::NoMatch)?);
            } else {
                println!("No Wikipedia article found for \"{}\".", opts.title);
            }
            return Ok(());
        }
        Retrieval::Candidates { candidates } => {
            let Some(page_id) = choose(&opts, &candidates)? else {
                return Ok(());
            };
            match retrieve(cfg, &opts.title, Some(page_id)).await? {
                Retrieval::Plot(result) => result,
                other => bail!("expected a plot for page {page_id}, got {other:?}"),
            }
        }
    };

    print_plot(&result, opts.json)?;

    if let Some(path) = save_result(&result, &opts)? {
        if opts.json {
            eprintln!("Saved plot to {}", path.display());
        } else {
            println!("Saved plot to {}", path.display());
        }
    }
    Ok(())
}

/// Writes the plot file when `--save` was given; `None` otherwise.
pub fn save_result(result: &PlotResult, opts: &PlotOptions) -> Result<Option<PathBuf>> {
    let Some(dir) = &opts.save else {
        return Ok(None);
    };
    let path = export::save_plot(result, dir, opts.overwrite)?;
    tracing::info!(path = %path.display(), "saved plot");
    Ok(Some(path))
}

/// Picks one of several candidates. `Ok(None)` means the candidates were
/// printed as JSON and there is nothing more to do.
fn choose(opts: &PlotOptions, candidates: &[CandidateMatch]) -> Result<Option<PageId>> {
    if let Some(n) = opts.pick {
        let Some(c) = candidates.get(n.get() - 1) else {
            bail!(
                "--pick {} is out of range; \"{}\" has {} matches",
                n,
                opts.title,
                candidates.len()
            );
        };
        return Ok(Some(c.page_id));
    }

    if opts.json {
        let outcome = Retrieval::Candidates {
            candidates: candidates.to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(None);
    }

    let suggested = suggested_index(&opts.title, candidates).unwrap_or(0);
    let stdin = io::stdin();
    if !opts.no_prompt && stdin.is_terminal() {
        let i = prompt::choose_candidate(
            candidates,
            suggested,
            &mut stdin.lock(),
            &mut io::stdout().lock(),
        )?;
        return Ok(Some(candidates[i].page_id));
    }

    println!("Several articles match \"{}\":", opts.title);
    render::write_candidates(candidates, Some(suggested), &mut io::stdout().lock())?;
    bail!("ambiguous title; re-run with --choice <PAGE_ID> or --pick <N>")
}

fn print_plot(result: &PlotResult, json: bool) -> Result<()> {
    if json {
        let outcome = Retrieval::Plot(result.clone());
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render::render_plot(result, &mut io::stdout().lock())?;
    }
    Ok(())
}
