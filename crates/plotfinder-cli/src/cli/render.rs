//! Text output for candidates and plots.

use plotfinder_core::{CandidateMatch, PlotResult};
use std::io::{self, Write};

/// Numbered candidate list (1-based), the suggested entry marked with `*`.
pub fn write_candidates<W: Write>(
    candidates: &[CandidateMatch],
    suggested: Option<usize>,
    out: &mut W,
) -> io::Result<()> {
    for (i, c) in candidates.iter().enumerate() {
        let mark = if Some(i) == suggested { '*' } else { ' ' };
        writeln!(out, "{mark}{:>3}. {:<10} {}", i + 1, c.page_id, c.title)?;
    }
    Ok(())
}

pub fn render_plot<W: Write>(result: &PlotResult, out: &mut W) -> io::Result<()> {
    let title = result.source_title();
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    if result.is_fallback() {
        writeln!(out, "(No plot section found; showing the article summary instead.)")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", result.text().trim_end())?;
    if let Some(url) = result.source_url() {
        writeln!(out)?;
        writeln!(out, "Source: {url}")?;
    }
    Ok(())
}
