//! CLI for plotfinder: look up a film on Wikipedia and print its plot.

mod commands;
mod prompt;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use plotfinder_core::config::{self, PlotfinderConfig};
use plotfinder_core::PageId;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use commands::{run_completions, run_config, run_man, run_plot, run_search, PlotOptions};

/// Top-level CLI for plotfinder.
#[derive(Debug, Parser)]
#[command(name = "plotfinder", version)]
#[command(about = "Find a movie's plot summary on Wikipedia", long_about = None)]
pub struct Cli {
    /// Wikipedia language edition to query (overrides the config), e.g. "de".
    #[arg(long, global = true, value_name = "CODE")]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the plot of a film, asking which article is meant when several match.
    Plot {
        /// Film title; several words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Page id of the article to use (as listed by `plotfinder search`).
        #[arg(long, value_name = "PAGE_ID", conflicts_with = "pick")]
        choice: Option<PageId>,

        /// Take the N-th search result (1-based) instead of prompting.
        #[arg(long, value_name = "N")]
        pick: Option<NonZeroUsize>,

        /// Show the article summary even when a plot section exists.
        #[arg(long)]
        summary: bool,

        /// Never prompt; print the candidates and fail when the title is ambiguous.
        #[arg(long)]
        no_prompt: bool,

        /// Also save the plot to `<DIR>/<Title>_plot.txt` (default: current directory).
        #[arg(
            long,
            value_name = "DIR",
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "."
        )]
        save: Option<PathBuf>,

        /// Replace an existing saved plot file.
        #[arg(long, requires = "save")]
        overwrite: bool,

        /// Print the outcome as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List the articles matching a title, best suggestion marked.
    Search {
        /// Film title; several words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Print the candidates as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show the config file location and the effective settings.
    Config,

    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the roff man page.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = effective_config(config::load_or_init()?, cli.lang.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Plot {
                title,
                choice,
                pick,
                summary,
                no_prompt,
                save,
                overwrite,
                json,
            } => {
                if summary {
                    cfg.prefer_plot_section = false;
                }
                let opts = PlotOptions {
                    title: title.join(" "),
                    choice,
                    pick,
                    no_prompt,
                    save,
                    overwrite,
                    json,
                };
                run_plot(&cfg, opts).await?;
            }
            CliCommand::Search { title, json } => run_search(&cfg, &title.join(" "), json).await?,
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

/// Applies command-line overrides on top of the loaded config.
fn effective_config(mut cfg: PlotfinderConfig, lang: Option<&str>) -> Result<PlotfinderConfig> {
    if let Some(lang) = lang {
        cfg.language = lang.trim().to_string();
        cfg.validate().context("--lang")?;
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests;
