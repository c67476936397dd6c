//! Recognizing tag shapes and extracting attributes.
//!
//! `rest` always starts at a `<` character. A closing shape is tried
//! before an opening shape: the opening shape's attribute run would
//! otherwise swallow inputs like `</div>`. When neither shape matches
//! (no word character after `<`, or no `>` before end of input) the
//! scanner reports nothing and the caller treats the `<` as inert.

use super::token::TagToken;
use wren_dom::Attribute;

/// Word characters permitted in a tag name.
///
/// Matches `[A-Za-z0-9_]`, so a name like `3` scans successfully and is
/// rejected later by the whitelist check rather than here.
const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Recognize the tag at the start of `rest`, which must begin with `<`.
///
/// Returns `None` when the text forms no recognizable tag; the caller
/// advances one character and rescans.
#[must_use]
pub fn scan_tag(rest: &str) -> Option<TagToken> {
    scan_close_tag(rest).or_else(|| scan_open_tag(rest))
}

/// `</` + word characters + optional whitespace + `>`.
fn scan_close_tag(rest: &str) -> Option<TagToken> {
    let bytes = rest.as_bytes();
    if !rest.starts_with("</") {
        return None;
    }

    let mut i = 2;
    while i < bytes.len() && is_word_byte(bytes[i]) {
        i += 1;
    }
    if i == 2 {
        return None;
    }
    let name_end = i;

    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if bytes.get(i) != Some(&b'>') {
        return None;
    }

    Some(TagToken::Close {
        name: rest[2..name_end].to_ascii_lowercase(),
        len: i + 1,
    })
}

/// `<` + word characters + non-`>` attribute run + optional `/` + `>`.
fn scan_open_tag(rest: &str) -> Option<TagToken> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'<') {
        return None;
    }

    let mut i = 1;
    while i < bytes.len() && is_word_byte(bytes[i]) {
        i += 1;
    }
    if i == 1 {
        return None;
    }
    let name_end = i;

    // The attribute run extends to the first `>`, wherever it is.
    let gt = rest[name_end..].find('>').map(|p| name_end + p)?;

    let raw_attrs = &rest[name_end..gt];
    let trimmed = raw_attrs.trim_end_matches(|c: char| c.is_ascii_whitespace());
    let (attr_text, self_closing) = match trimmed.strip_suffix('/') {
        Some(body) => (body, true),
        None => (raw_attrs, false),
    };

    Some(TagToken::Open {
        name: rest[1..name_end].to_ascii_lowercase(),
        attrs: parse_attributes(attr_text),
        self_closing,
        len: gt + 1,
    })
}

/// Split a raw attribute run into name/value pairs.
///
/// Fragments are separated by ASCII spaces; each fragment splits on its
/// first `=` only, so a value may itself contain `=`. Names are trimmed
/// and lower-cased; a fragment with no `=` becomes an attribute with an
/// empty value. At most one leading and one trailing quote character
/// (`"` or `'`) is stripped from the value; internal quotes are kept
/// as-is. Any attribute named `style` is dropped entirely.
///
/// Malformed fragments degrade to best-effort extraction; this never
/// fails.
#[must_use]
pub fn parse_attributes(raw: &str) -> Vec<Attribute> {
    let mut attrs = Vec::new();

    for part in raw.split(' ').filter(|p| !p.is_empty()) {
        let (name, value) = match part.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (part, None),
        };

        let name = name.trim().to_ascii_lowercase();
        if name == "style" {
            continue;
        }

        let value = value.map_or_else(String::new, strip_quotes);
        attrs.push(Attribute::new(name, value));
    }

    attrs
}

/// Strip at most one leading and one trailing quote character.
fn strip_quotes(value: &str) -> String {
    let mut v = value;
    if let Some(rest) = v.strip_prefix(['"', '\'']) {
        v = rest;
    }
    if let Some(rest) = v.strip_suffix(['"', '\'']) {
        v = rest;
    }
    v.to_string()
}
