//! Query templates: literal words plus wildcard placeholders.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Marker word for a single-word wildcard.
const SINGLE_MARKER: &str = "_";

/// Marker word for a span wildcard.
const SPAN_MARKER: &str = "%";

/// One token of a template.
///
/// The wildcard kind is decided once, at parse time, so the matcher
/// branches on the variant instead of re-testing marker strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Must equal the corresponding query word exactly.
    Literal(String),
    /// Matches exactly one query word, captured verbatim (`_`).
    Single,
    /// Matches zero or more consecutive query words, captured as one
    /// space-joined string (`%`).
    Span,
}

/// An ordered sequence of tokens describing an expected query shape.
///
/// Parsed from a whitespace-separated pattern string where `_` is a
/// single-word wildcard and `%` a span wildcard:
///
/// ```rust
/// use wikifact_patact::Template;
///
/// let template = Template::parse("what is the hex triplet of _");
/// assert_eq!(template.capture_slots(), 1);
/// ```
///
/// Two adjacent wildcards (`% %`, `% _`) are not supported; matching
/// behavior for such templates is unspecified. This is a precondition
/// on template authors, not a checked invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    /// Parses a pattern string into a template.
    pub fn parse(pattern: &str) -> Self {
        let tokens = pattern
            .split_whitespace()
            .map(|word| match word {
                SINGLE_MARKER => Token::Single,
                SPAN_MARKER => Token::Span,
                _ => Token::Literal(word.to_string()),
            })
            .collect();
        Self { tokens }
    }

    /// The parsed tokens in template order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of wildcard tokens, which is the number of values a
    /// successful match captures.
    pub fn capture_slots(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| !matches!(t, Token::Literal(_)))
            .count()
    }
}

impl FromStr for Template {
    type Err = Infallible;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(pattern))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match token {
                Token::Literal(text) => f.write_str(text)?,
                Token::Single => f.write_str(SINGLE_MARKER)?,
                Token::Span => f.write_str(SPAN_MARKER)?,
            }
        }
        Ok(())
    }
}
