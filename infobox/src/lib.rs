//! Synchronous Wikipedia infobox lookup.
//!
//! This crate answers property questions by fetching a page's rendered
//! HTML from the MediaWiki API, slicing out the first infobox, and
//! pulling the requested field out of its text with a regular
//! expression.
//!
//! # Example
//!
//! ```rust,no_run
//! use wikifact_infobox::Client;
//!
//! let client = Client::new();
//! let date = client.birth_date("marie curie")?;
//! println!("born {date}");
//! # Ok::<(), wikifact_infobox::InfoboxError>(())
//! ```

mod client;
mod error;
pub mod props;
mod scrape;

pub use client::{Client, DEFAULT_ENDPOINT};
pub use error::{InfoboxError, Result};
pub use scrape::{clean_text, element_text, first_infobox};
