//! Normalization of user-typed movie titles.

use crate::error::PlotError;

/// A non-blank movie title ready to send to the provider's search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Trims whitespace and trailing sentence punctuation (`Inception.` -> `Inception`).
    ///
    /// Case is left alone; matching is up to the provider.
    pub fn parse(raw: &str) -> Result<Self, PlotError> {
        let cleaned = raw
            .trim()
            .trim_end_matches(['.', ',', ';', ':', '!', '?'])
            .trim_end();
        if cleaned.is_empty() {
            return Err(PlotError::InvalidQuery);
        }
        Ok(Self(cleaned.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
