//! Interactive disambiguation prompt.

use anyhow::{bail, Context, Result};
use plotfinder_core::CandidateMatch;
use std::io::{BufRead, Write};

use super::render::write_candidates;

const MAX_ATTEMPTS: usize = 3;

/// Lists `candidates` and reads a 1-based choice from `input`.
///
/// An empty line takes `default`. Returns the 0-based index.
pub fn choose_candidate<R: BufRead, W: Write>(
    candidates: &[CandidateMatch],
    default: usize,
    input: &mut R,
    output: &mut W,
) -> Result<usize> {
    if candidates.is_empty() {
        bail!("nothing to choose from");
    }
    let default = default.min(candidates.len() - 1);

    writeln!(output, "Several articles match. Which one did you mean?")?;
    write_candidates(candidates, Some(default), output)?;

    let mut line = String::new();
    for _ in 0..MAX_ATTEMPTS {
        write!(output, "Choice [1-{}] (default {}): ", candidates.len(), default + 1)?;
        output.flush()?;

        line.clear();
        let n = input.read_line(&mut line).context("read choice")?;
        if n == 0 {
            bail!("no choice made (end of input)");
        }
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<usize>() {
            Ok(k) if (1..=candidates.len()).contains(&k) => return Ok(k - 1),
            _ => writeln!(
                output,
                "Please enter a number between 1 and {}.",
                candidates.len()
            )?,
        }
    }
    bail!("no valid choice after {MAX_ATTEMPTS} attempts")
}
