//! Action effect types.

use thiserror::Error;

/// Result of running an action: answer lines, or a propagated effect.
pub type ActionResult = Result<Vec<String>, ActionError>;

/// Effects an action can raise instead of returning answers.
///
/// The dispatcher never catches these. Either effect aborts the table
/// scan, drops any answers already accumulated, and surfaces to the
/// caller of [`dispatch`](crate::PatternTable::dispatch).
#[derive(Debug, Error)]
pub enum ActionError {
    /// The action asked to end the session.
    #[error("session terminated")]
    Terminate,

    /// A lookup in an external source failed. The payload is the
    /// human-readable explanation.
    #[error("{0}")]
    Lookup(String),
}
