//! Wildcard template matching and pattern-action dispatch.
//!
//! This crate routes tokenized natural-language queries to handlers by
//! matching them against word-level templates:
//! - `when was % born` - `%` absorbs a run of words, captured as one string
//! - `what is the hex triplet of _` - `_` captures exactly one word
//! - `bye` - literal words must match exactly
//!
//! Templates are tried against a query in table order; every entry that
//! matches runs its action, and the answers concatenate in table order.
//!
//! # Example
//!
//! ```rust
//! use wikifact_patact::{PatternTable, Template};
//!
//! let template = Template::parse("when was % born");
//! let captured = template.captures(&["when", "was", "marie", "curie", "born"]);
//! assert_eq!(captured, Some(vec!["marie curie".to_string()]));
//!
//! let table = PatternTable::builder()
//!     .entry("hello %", |args| Ok(vec![format!("hi {}", args[0])]))
//!     .build();
//! let answers = table.dispatch(&["hello", "world"]).unwrap();
//! assert_eq!(answers, vec!["hi world".to_string()]);
//! ```

mod error;
mod matcher;
mod table;
mod template;

pub use error::{ActionError, ActionResult};
pub use table::{Action, PatternTable, PatternTableBuilder, DONT_UNDERSTAND, NO_ANSWERS};
pub use template::{Template, Token};

#[cfg(test)]
mod tests;
