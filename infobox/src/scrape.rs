//! Minimal infobox extraction from rendered page HTML.
//!
//! Infobox markup is regular enough that a small forward scanner
//! covers it: find the first `<table>` carrying the `infobox` class,
//! take the balanced table slice, drop the tags, and normalize the
//! remaining text. No HTML parser dependency is involved.

use once_cell::sync::Lazy;
use regex::Regex;

static BR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());
static NEWLINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

/// Returns the first `<table>` element whose opening tag carries the
/// `infobox` class, as a slice of the input spanning the balanced
/// `<table>...</table>` range. Returns `None` when the page has no
/// infobox or the markup is unbalanced.
pub fn first_infobox(html: &str) -> Option<&str> {
    let lower = html.to_ascii_lowercase();
    let mut from = 0;

    loop {
        let start = lower[from..].find("<table")? + from;
        let tag_end = lower[start..].find('>')? + start;
        if lower[start..tag_end].contains("infobox") {
            let end = balanced_table_end(&lower, tag_end + 1)?;
            return Some(&html[start..end]);
        }
        from = tag_end + 1;
    }
}

/// Scans forward from just past an opening `<table ...>` tag to the end
/// of its matching `</table>`, counting nested tables.
fn balanced_table_end(lower: &str, mut from: usize) -> Option<usize> {
    let mut depth = 1;
    while depth > 0 {
        let open = lower[from..].find("<table");
        let close = lower[from..].find("</table");
        match (open, close) {
            (Some(open), Some(close)) if open < close => {
                depth += 1;
                from += open + "<table".len();
            }
            (_, Some(close)) => {
                depth -= 1;
                from += close + "</table".len();
            }
            _ => return None,
        }
    }
    let end = lower[from..].find('>')? + from;
    Some(end + 1)
}

/// Returns the text content of an HTML fragment: `<br>` becomes a
/// newline, every other tag is dropped, and the entities that occur in
/// infobox markup are decoded.
pub fn element_text(html: &str) -> String {
    let with_breaks = BR_RE.replace_all(html, "\n");
    let stripped = TAG_RE.replace_all(&with_breaks, "");
    decode_entities(&stripped)
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        // Last, so "&amp;lt;" does not double-decode.
        .replace("&amp;", "&")
}

/// Normalizes extracted text: non-printable and non-ASCII characters
/// become spaces, runs of spaces collapse to one, runs of newlines
/// collapse to one.
pub fn clean_text(text: &str) -> String {
    let ascii: String = text
        .chars()
        .map(|c| if is_printable_ascii(c) { c } else { ' ' })
        .collect();
    let no_dup_spaces = SPACES_RE.replace_all(&ascii, " ");
    NEWLINES_RE.replace_all(&no_dup_spaces, "\n").into_owned()
}

fn is_printable_ascii(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\n' | '\t' | '\r')
}
