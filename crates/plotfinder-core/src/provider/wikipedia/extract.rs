//! Split a plain-text extract (`explaintext=1&exsectionformat=wiki`) into sections.
//!
//! Headings appear on their own line as `== Plot ==`, `=== Casting ===`, and
//! so on; the number of `=` on each side is the level (2..=6). Text before
//! the first heading is the lead and does not belong to any section.

use crate::types::Section;

/// Parses an extract into top-level sections, nesting deeper headings.
pub(super) fn parse_sections(extract: &str) -> Vec<Section> {
    let mut roots: Vec<Section> = Vec::new();
    let mut open: Vec<(usize, Section)> = Vec::new();
    let mut body = String::new();

    for line in extract.lines() {
        if let Some((level, heading)) = parse_heading(line) {
            flush_body(&mut open, &mut body);
            close_until(&mut open, &mut roots, level);
            open.push((level, Section::new(heading, String::new())));
        } else if !open.is_empty() {
            body.push_str(line);
            body.push('\n');
        }
    }

    flush_body(&mut open, &mut body);
    close_until(&mut open, &mut roots, 0);
    roots
}

/// Returns `(level, heading)` for a line like `=== Casting ===`.
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let line = line.trim();
    let opening = line.bytes().take_while(|&b| b == b'=').count();
    let closing = line.bytes().rev().take_while(|&b| b == b'=').count();
    if !(2..=6).contains(&opening) || opening != closing || line.len() <= opening * 2 {
        return None;
    }
    let heading = line[opening..line.len() - closing].trim();
    if heading.is_empty() {
        None
    } else {
        Some((opening, heading))
    }
}

fn flush_body(open: &mut [(usize, Section)], body: &mut String) {
    if let Some((_, section)) = open.last_mut() {
        section.body = body.trim().to_string();
    }
    body.clear();
}

/// Closes every open section at `level` or deeper, attaching each to its parent.
fn close_until(open: &mut Vec<(usize, Section)>, roots: &mut Vec<Section>, level: usize) {
    while let Some((top, _)) = open.last() {
        if *top < level {
            break;
        }
        let Some((_, done)) = open.pop() else { break };
        match open.last_mut() {
            Some((_, parent)) => parent.subsections.push(done),
            None => roots.push(done),
        }
    }
}
