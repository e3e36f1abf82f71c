//! Error types for infobox lookups.

use thiserror::Error;

/// Result type alias for infobox operations.
pub type Result<T> = std::result::Result<T, InfoboxError>;

/// Error type for infobox lookup operations.
///
/// The `Display` strings of [`NoInfobox`](InfoboxError::NoInfobox) and
/// [`NoProperty`](InfoboxError::NoProperty) are the explanations shown
/// to the person asking, so they name the missing piece rather than the
/// failing code path.
#[derive(Debug, Error)]
pub enum InfoboxError {
    /// HTTP transport or decode failure talking to the MediaWiki API.
    #[error("infobox: http error: {0}")]
    Http(#[from] ureq::Error),

    /// The API answered with an error payload.
    #[error("infobox: api error: {0}")]
    Api(String),

    /// The page exists but carries no infobox.
    #[error("Page has no infobox")]
    NoInfobox,

    /// The infobox lacks the requested property.
    #[error("{0}")]
    NoProperty(String),
}
