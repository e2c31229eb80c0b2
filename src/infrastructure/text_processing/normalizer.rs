use unicode_normalization::UnicodeNormalization;

use crate::domain::Document;

/// Rewrites a document into canonical plain-text form: NFKC folding,
/// ASCII equivalents for curly quotes and dashes, control characters
/// dropped, whitespace collapsed, and the ends trimmed.
///
/// Whitespace rule: a run containing a newline collapses to a single `'\n'`
/// (so a paragraph break in the source becomes one newline), any other run
/// collapses to a single space. Runs that already consist of one `'\n'` or
/// one space map to themselves, which makes the whole transform idempotent.
pub fn normalize(doc: &Document) -> Document {
    let mut result = String::with_capacity(doc.as_str().len());
    let mut pending_break = false;
    let mut break_is_newline = false;

    for ch in doc.as_str().nfkc().map(ascii_equivalent) {
        if ch.is_whitespace() {
            pending_break = true;
            if ch == '\n' || ch == '\r' {
                break_is_newline = true;
            }
            continue;
        }
        if ch.is_control() {
            continue;
        }
        if pending_break && !result.is_empty() {
            result.push(if break_is_newline { '\n' } else { ' ' });
        }
        pending_break = false;
        break_is_newline = false;
        result.push(ch);
    }

    Document::new(result)
}

/// Punctuation variants with a lossless ASCII mapping. Compatibility forms
/// (ligatures, ellipsis, non-breaking space) are already rewritten by NFKC.
fn ascii_equivalent(ch: char) -> char {
    match ch {
        '\u{2018}' | '\u{2019}' => '\'',
        '\u{201C}' | '\u{201D}' => '"',
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}' => '-',
        _ => ch,
    }
}
