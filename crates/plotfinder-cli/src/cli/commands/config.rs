//! `plotfinder config` – where the config lives and what is in effect.

use anyhow::Result;
use plotfinder_core::config::{self, PlotfinderConfig};

pub fn run_config(cfg: &PlotfinderConfig) -> Result<()> {
    println!("# config file: {}", config::config_path()?.display());
    println!("# endpoint:    {}", cfg.endpoint());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
