//! Shared tokenization for the statistics engine and the summarizer, so
//! both agree on what a word and a sentence are.

/// Honorifics whose trailing period does not end a sentence.
const ABBREVIATIONS: [&str; 10] = [
    "mr", "mrs", "ms", "dr", "st", "prof", "rev", "capt", "jr", "sr",
];

/// Splits `text` into sentences. A sentence ends at `.`, `!`, or `?`
/// followed by whitespace or end of text.
///
/// A period is demoted to a non-boundary when the token before it is a
/// single uppercase letter (an initial, "J.") or a listed honorific. The
/// heuristic misses both ways: unlisted abbreviations ("etc.") split early,
/// and a sentence that genuinely ends on "Mr." is merged with its successor.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();

    while let Some((i, ch)) = iter.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }

        let boundary = iter.peek().is_none_or(|&(_, next)| next.is_whitespace());
        if !boundary {
            continue;
        }

        if ch == '.' && ends_in_abbreviation(&text[start..i]) {
            continue;
        }

        let end = i + ch.len_utf8();
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = end;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

fn ends_in_abbreviation(preceding: &str) -> bool {
    let reversed: String = preceding
        .chars()
        .rev()
        .take_while(|c| c.is_alphanumeric())
        .collect();
    if reversed.is_empty() {
        return false;
    }

    let token: String = reversed.chars().rev().collect();
    if token.chars().count() == 1 {
        return token.chars().all(|c| c.is_uppercase());
    }

    ABBREVIATIONS.contains(&token.to_lowercase().as_str())
}

/// Splits `text` into words: maximal runs of alphanumeric characters, with
/// apostrophes and hyphens kept when they sit between two alphanumerics
/// ("don't", "well-known").
pub fn words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut iter = text.char_indices().peekable();

    while let Some((i, ch)) = iter.next() {
        let next_is_alphanumeric = iter
            .peek()
            .is_some_and(|&(_, next)| next.is_alphanumeric());
        let joins_word = matches!(ch, '\'' | '-') && start.is_some() && next_is_alphanumeric;

        if ch.is_alphanumeric() || joins_word {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            words.push(&text[s..i]);
        }
    }

    if let Some(s) = start {
        words.push(&text[s..]);
    }

    words
}
