use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::MIN_RESULTS;

/// Global configuration loaded from `~/.config/plotfinder/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotfinderConfig {
    /// Wikipedia language edition, e.g. "en" or "de".
    pub language: String,
    /// Full API endpoint override (mirrors, tests). When unset the endpoint is
    /// derived from `language`.
    pub api_base_url: Option<String>,
    /// Maximum number of search hits offered for disambiguation.
    pub max_results: usize,
    /// Sentences requested for the summary fallback (1..=10).
    pub summary_sentences: u32,
    /// Section headings treated as the plot, tried in order, case-insensitive.
    pub plot_headings: Vec<String>,
    /// Use a plot section when one exists; when false, always show the summary.
    pub prefer_plot_section: bool,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for PlotfinderConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            api_base_url: None,
            max_results: 10,
            summary_sentences: 3,
            plot_headings: vec!["Plot".to_string()],
            prefer_plot_section: true,
            user_agent: concat!("plotfinder/", env!("CARGO_PKG_VERSION"), " (movie plot lookup)")
                .to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

impl PlotfinderConfig {
    /// Action API endpoint for this configuration.
    pub fn endpoint(&self) -> String {
        match &self.api_base_url {
            Some(url) => url.clone(),
            None => format!("https://{}.wikipedia.org/w/api.php", self.language),
        }
    }

    /// Rejects values the provider would refuse or that make retrieval meaningless.
    pub fn validate(&self) -> Result<()> {
        let lang_ok = !self.language.is_empty()
            && self
                .language
                .chars()
                .all(|c| c.is_ascii_alphabetic() || c == '-');
        if !lang_ok {
            bail!("invalid language code: {:?}", self.language);
        }
        if self.max_results < MIN_RESULTS {
            bail!(
                "max_results must be at least {MIN_RESULTS}, got {}",
                self.max_results
            );
        }
        if !(1..=10).contains(&self.summary_sentences) {
            bail!(
                "summary_sentences must be between 1 and 10, got {}",
                self.summary_sentences
            );
        }
        if self.plot_headings.iter().all(|h| h.trim().is_empty()) {
            bail!("plot_headings must contain at least one heading");
        }
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            bail!("timeouts must be at least 1 second");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("plotfinder")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PlotfinderConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<PlotfinderConfig> {
    if !path.exists() {
        let default_cfg = PlotfinderConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PlotfinderConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
