use std::collections::HashSet;

use crate::domain::{Document, TextStatistics};

use super::segmentation::{split_sentences, words};

/// Computes descriptive metrics over a normalized document.
///
/// Words and sentences are segmented by the shared rules in
/// `segmentation`. Average word length counts alphanumeric characters only,
/// unique words are case-folded, and every ratio guards its denominator so
/// an empty document yields zeroes instead of a fault. Output is fully
/// deterministic for identical input.
pub fn analyze(doc: &Document) -> TextStatistics {
    let text = doc.as_str();

    let tokens = words(text);
    let word_count = tokens.len();

    let mut unique: HashSet<String> = HashSet::with_capacity(word_count);
    let mut alphanumeric_chars = 0usize;
    for token in &tokens {
        unique.insert(token.to_lowercase());
        alphanumeric_chars += token.chars().filter(|c| c.is_alphanumeric()).count();
    }

    let sentence_count = split_sentences(text).len();

    let average_word_length = if word_count == 0 {
        0.0
    } else {
        alphanumeric_chars as f64 / word_count as f64
    };
    let average_sentence_length = if sentence_count == 0 {
        0.0
    } else {
        word_count as f64 / sentence_count as f64
    };
    let vocabulary_richness = if word_count == 0 {
        0.0
    } else {
        unique.len() as f64 / word_count as f64
    };

    TextStatistics {
        word_count,
        sentence_count,
        unique_word_count: unique.len(),
        average_word_length,
        average_sentence_length,
        vocabulary_richness,
    }
}
