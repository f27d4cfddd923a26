//! Saving a plot as a plain-text file named after the article.

mod sanitize;

pub use sanitize::sanitize_stem;

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::types::PlotResult;

/// Used when the title sanitizes to nothing.
const DEFAULT_FILENAME: &str = "plot.txt";
const SUFFIX: &str = "_plot.txt";

/// Filename for a saved plot, e.g. `Avatar (2009 film)` -> `Avatar_(2009_film)_plot.txt`.
pub fn plot_filename(source_title: &str) -> String {
    let stem = sanitize_stem(source_title, 255 - SUFFIX.len());
    if stem.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        format!("{stem}{SUFFIX}")
    }
}

/// Writes the plot text to `dir/<plot_filename>` and returns the path.
///
/// Creates `dir` if needed. An existing file is only replaced when
/// `overwrite` is set.
pub fn save_plot(result: &PlotResult, dir: &Path, overwrite: bool) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(plot_filename(result.source_title()));

    let mut options = fs::OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = match options.open(&path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            bail!("{} already exists; use --overwrite to replace it", path.display())
        }
        Err(e) => return Err(e).with_context(|| format!("open {}", path.display())),
    };

    let text = result.text();
    file.write_all(text.as_bytes())
        .and_then(|()| {
            if text.ends_with('\n') {
                Ok(())
            } else {
                file.write_all(b"\n")
            }
        })
        .with_context(|| format!("write {}", path.display()))?;

    tracing::info!(path = %path.display(), fallback = result.is_fallback(), "saved plot");
    Ok(path)
}
