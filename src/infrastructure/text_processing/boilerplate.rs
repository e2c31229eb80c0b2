use regex::Regex;
use std::sync::LazyLock;

use crate::domain::Document;

static START_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^.*\bSTART OF TH(?:IS|E) PROJECT GUTENBERG.*$").unwrap()
});

static END_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^.*\bEND OF TH(?:IS|E) PROJECT GUTENBERG.*$").unwrap()
});

/// Removes the publisher header and footer that surround the literary body
/// in distributed plain-text editions.
///
/// Marker lines are matched case-insensitively, tolerating the variable
/// asterisks, punctuation, and title text around the core phrase. With both
/// markers the text strictly between them is returned; with only one, the
/// text after the start marker or before the end marker. Absent markers are
/// a normal case, not an error: the input comes back unchanged.
pub fn strip_boilerplate(raw: &Document) -> Document {
    let text = raw.as_str();

    let start = START_MARKER.find(text);
    let body_start = start.map(|m| m.end());

    // Only look for the footer after the header so a stray "END OF" line in
    // the front matter cannot truncate the body.
    let search_from = body_start.unwrap_or(0);
    let body_end = END_MARKER
        .find(&text[search_from..])
        .map(|m| search_from + m.start());

    let body = match (body_start, body_end) {
        (Some(s), Some(e)) => &text[s..e],
        (Some(s), None) => &text[s..],
        (None, Some(e)) => &text[..e],
        (None, None) => text,
    };

    Document::new(body.trim())
}
