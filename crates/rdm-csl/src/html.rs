//! HTML stripping for rich-text fields
//!
//! Record descriptions are stored as sanitized HTML. Citation managers expect
//! plain text, so tags and comments are dropped and character references
//! decoded.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref COMMENT_REGEX: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();

    // Only things that look like markup: `<tag ...>`, `</tag>`, `<!DOCTYPE ...>`.
    // A bare `<` followed by a space or digit stays text.
    static ref TAG_REGEX: Regex = Regex::new(r"(?s)<(?:/?[A-Za-z][^>]*|![^>]*)>").unwrap();

    static ref ENTITY_REGEX: Regex =
        Regex::new(r"&(?:#(?P<dec>[0-9]{1,7})|#[xX](?P<hex>[0-9a-fA-F]{1,6})|(?P<name>[A-Za-z]+));").unwrap();
}

/// Remove HTML markup from a string and return trimmed plain text
pub fn strip_html(input: &str) -> String {
    let without_comments = COMMENT_REGEX.replace_all(input, "");
    let without_tags = TAG_REGEX.replace_all(&without_comments, "");
    decode_entities(&without_tags).trim().to_string()
}

/// Decode named and numeric character references.
///
/// Unknown names and invalid code points are left untouched.
pub fn decode_entities(input: &str) -> String {
    ENTITY_REGEX
        .replace_all(input, |caps: &Captures| {
            let decoded = if let Some(dec) = caps.name("dec") {
                dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
            } else if let Some(hex) = caps.name("hex") {
                u32::from_str_radix(hex.as_str(), 16)
                    .ok()
                    .and_then(char::from_u32)
            } else {
                caps.name("name").and_then(|name| named_entity(name.as_str()))
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{00A0}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        "hellip" => '\u{2026}',
        "copy" => '\u{00A9}',
        "reg" => '\u{00AE}',
        "deg" => '\u{00B0}',
        "plusmn" => '\u{00B1}',
        "times" => '\u{00D7}',
        "micro" => '\u{00B5}',
        _ => return None,
    };
    Some(c)
}
