// ABOUTME: Error types shared by the deck-list extraction pipelines.
// ABOUTME: Provides DeckError with Malformed (template mismatch) and Parse (lexical) variants.

use thiserror::Error;

/// Errors surfaced by the listing and deck-page parsers.
///
/// Parsers never recover from these; the caller decides whether to skip the
/// page or abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The document does not match the expected page template
    /// (missing byline, deck-text field, table, or tooltip sub-element).
    #[error("malformed page: {0}")]
    Malformed(String),

    /// A line or field does not have the expected lexical shape.
    #[error("failed to parse deck list: {0}")]
    Parse(String),
}

impl DeckError {
    /// Creates a Malformed error describing the missing structure.
    pub fn malformed(msg: impl Into<String>) -> Self {
        DeckError::Malformed(msg.into())
    }

    /// Creates a Parse error describing the offending input.
    pub fn parse(msg: impl Into<String>) -> Self {
        DeckError::Parse(msg.into())
    }

    /// Returns true if the page did not match the expected template.
    pub fn is_malformed(&self) -> bool {
        matches!(self, DeckError::Malformed(_))
    }

    /// Returns true if a line or field failed to parse.
    pub fn is_parse(&self) -> bool {
        matches!(self, DeckError::Parse(_))
    }
}

/// Result alias used across the parsing crates.
pub type Result<T> = std::result::Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = DeckError::malformed("no span.author element");
        assert_eq!(err.to_string(), "malformed page: no span.author element");

        let err = DeckError::parse("line \"x Bolt\": invalid count");
        assert!(err.to_string().starts_with("failed to parse deck list:"));
    }

    #[test]
    fn predicates_match_variant() {
        assert!(DeckError::malformed("x").is_malformed());
        assert!(!DeckError::malformed("x").is_parse());
        assert!(DeckError::parse("x").is_parse());
    }
}
