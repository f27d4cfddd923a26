//! Heading lookup over a section tree.

use crate::types::Section;

/// Case-insensitive, whitespace-trimmed heading comparison.
pub fn heading_matches(heading: &str, wanted: &str) -> bool {
    heading.trim().to_lowercase() == wanted.trim().to_lowercase()
}

/// Depth-first search for the first section titled `wanted` with a non-blank body.
///
/// A matching section with an empty body does not stop the search; a later
/// (or nested) section with the same heading may still have text.
pub fn find_section<'a>(sections: &'a [Section], wanted: &str) -> Option<&'a Section> {
    for section in sections {
        if heading_matches(&section.heading, wanted) && !section.body.trim().is_empty() {
            return Some(section);
        }
        if let Some(found) = find_section(&section.subsections, wanted) {
            return Some(found);
        }
    }
    None
}

/// First usable section for any of `headings`, trying each heading in order.
pub fn find_first<'a>(sections: &'a [Section], headings: &[String]) -> Option<&'a Section> {
    headings
        .iter()
        .filter(|h| !h.trim().is_empty())
        .find_map(|h| find_section(sections, h))
}
