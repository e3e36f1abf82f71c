//! Pattern-action table and dispatch.

use crate::error::ActionResult;
use crate::template::Template;

/// Reply returned when no template in the table matches a query.
pub const DONT_UNDERSTAND: &str = "I don't understand.";

/// Reply returned when templates matched but no action produced output.
pub const NO_ANSWERS: &str = "None.";

/// A handler bound to a template. Receives the captured wildcard values
/// in template order and returns zero or more answer lines.
pub type Action = Box<dyn Fn(&[String]) -> ActionResult + Send + Sync>;

/// An immutable (template, action) pair.
struct Entry {
    template: Template,
    action: Action,
}

/// Ordered, immutable table of pattern-action entries.
///
/// Built exactly once through [`PatternTable::builder`]. Dispatch only
/// borrows the table, so it can be shared read-only for the lifetime of
/// the process without synchronization.
pub struct PatternTable {
    entries: Vec<Entry>,
}

impl PatternTable {
    /// Creates a builder for assembling a table.
    pub fn builder() -> PatternTableBuilder {
        PatternTableBuilder {
            entries: Vec::new(),
        }
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Matches a query against every entry in table order and runs the
    /// action of each entry whose template matches.
    ///
    /// There is no early exit on first match: every matching action
    /// runs, and the answers concatenate in table order. When nothing
    /// matched the result is the single line [`DONT_UNDERSTAND`]; when
    /// entries matched but produced no answers it is [`NO_ANSWERS`].
    ///
    /// An action effect aborts the scan and propagates; answers already
    /// accumulated are dropped.
    pub fn dispatch<S: AsRef<str>>(&self, query: &[S]) -> ActionResult {
        let mut match_count = 0;
        let mut results = Vec::new();

        for entry in &self.entries {
            let Some(captured) = entry.template.captures(query) else {
                continue;
            };
            match_count += 1;
            results.extend((entry.action)(&captured)?);
        }

        tracing::debug!(
            matches = match_count,
            answers = results.len(),
            "dispatch complete"
        );

        if match_count == 0 {
            Ok(vec![DONT_UNDERSTAND.to_string()])
        } else if results.is_empty() {
            Ok(vec![NO_ANSWERS.to_string()])
        } else {
            Ok(results)
        }
    }
}

/// Builder for assembling a [`PatternTable`].
///
/// Registration order is table order: it decides the order actions run
/// for multi-matching queries and the order their answers concatenate.
/// Actions must exist by the time the table is built; binding them here
/// replaces any reliance on forward references.
pub struct PatternTableBuilder {
    entries: Vec<Entry>,
}

impl PatternTableBuilder {
    /// Registers a (pattern, action) entry. The pattern is parsed with
    /// [`Template::parse`].
    pub fn entry<F>(self, pattern: &str, action: F) -> Self
    where
        F: Fn(&[String]) -> ActionResult + Send + Sync + 'static,
    {
        self.template_entry(Template::parse(pattern), action)
    }

    /// Registers an entry with an already-parsed template.
    pub fn template_entry<F>(mut self, template: Template, action: F) -> Self
    where
        F: Fn(&[String]) -> ActionResult + Send + Sync + 'static,
    {
        self.entries.push(Entry {
            template,
            action: Box::new(action),
        });
        self
    }

    /// Builds the immutable table.
    pub fn build(self) -> PatternTable {
        PatternTable {
            entries: self.entries,
        }
    }
}
