//! Infobox property extractors.
//!
//! Each property is one regex with a named capture group, run over the
//! cleaned infobox text. The patterns are anchored on the infobox row
//! labels Wikipedia uses ("Born", "Polar radius", "Decided", ...), and
//! each failure message names the field that was missing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::client::Client;
use crate::error::{InfoboxError, Result};

static BIRTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?si)Born\D*(?P<birth>\d{4}-\d{2}-\d{2})").unwrap());
static RADIUS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?si)Polar radius.*?(?: ?\d+ )?(?P<radius>[\d,.]+).*?km").unwrap());
static DECIDED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?si)Decided\s+(?P<ddate>[a-z]+\s\d{1,2},\s\d{4})").unwrap());
static HEX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?si)(?P<color>#\w{6})").unwrap());
static RGB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?si)\(r, g, b\)\n(?P<rgb>\(\d+, \d+, \d+\))").unwrap());

impl Client {
    /// Birth date of a person, in xxxx-xx-xx form.
    pub fn birth_date(&self, title: &str) -> Result<String> {
        birth_date(&self.first_infobox_text(title)?)
    }

    /// Polar radius of a planet, in km.
    pub fn polar_radius(&self, title: &str) -> Result<String> {
        polar_radius(&self.first_infobox_text(title)?)
    }

    /// Decision date of a court case.
    pub fn decision_date(&self, title: &str) -> Result<String> {
        decision_date(&self.first_infobox_text(title)?)
    }

    /// Hex triplet of a color, in #xxxxxx form.
    pub fn hex_triplet(&self, title: &str) -> Result<String> {
        hex_triplet(&self.first_infobox_text(title)?)
    }

    /// RGB value of a color, in (r, g, b) form.
    pub fn rgb_value(&self, title: &str) -> Result<String> {
        rgb_value(&self.first_infobox_text(title)?)
    }
}

/// Extracts a birth date from infobox text.
pub fn birth_date(text: &str) -> Result<String> {
    get_match(
        &BIRTH_RE,
        "birth",
        text,
        "Page infobox has no birth information. At least none in xxxx-xx-xx format",
    )
}

/// Extracts a polar radius from infobox text.
pub fn polar_radius(text: &str) -> Result<String> {
    get_match(
        &RADIUS_RE,
        "radius",
        text,
        "Page infobox has no polar radius information.",
    )
}

/// Extracts a trial decision date from infobox text.
pub fn decision_date(text: &str) -> Result<String> {
    get_match(
        &DECIDED_RE,
        "ddate",
        text,
        "Page infobox has no decision date information. At least none in Month-xx-xxxx format",
    )
}

/// Extracts a hex triplet from infobox text.
pub fn hex_triplet(text: &str) -> Result<String> {
    get_match(
        &HEX_RE,
        "color",
        text,
        "Page infobox has no hex triplet information. At least none in the #xxxxxx format",
    )
}

/// Extracts an (r, g, b) value from infobox text.
pub fn rgb_value(text: &str) -> Result<String> {
    get_match(
        &RGB_RE,
        "rgb",
        text,
        "Page infobox has no RGB information. At least none in the (r, g, b) format",
    )
}

/// Runs a property regex over infobox text and returns the named group,
/// or a lookup failure carrying `error_text`.
fn get_match(re: &Regex, group: &str, text: &str, error_text: &str) -> Result<String> {
    let captures = re
        .captures(text)
        .ok_or_else(|| InfoboxError::NoProperty(error_text.to_string()))?;
    Ok(captures[group].to_string())
}
