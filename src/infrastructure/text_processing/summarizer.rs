use std::collections::HashMap;

use crate::domain::{Document, Summary};

use super::segmentation::{split_sentences, words};

/// Selects up to `count` representative sentences as an extractive summary.
///
/// Each sentence scores the sum of document-wide case-folded word
/// frequencies over its words, divided by its word count so long sentences
/// gain no length bias. The `count` best sentences win, ties going to the
/// earlier position, and the selection is re-ordered by original position
/// before it is returned. A document with fewer sentences than `count`
/// comes back whole; an empty document yields an empty summary.
pub fn summarize(doc: &Document, count: usize) -> Summary {
    let sentences = split_sentences(doc.as_str());
    if sentences.is_empty() || count == 0 {
        return Summary::default();
    }

    if sentences.len() <= count {
        return Summary::new(sentences.iter().map(|s| s.to_string()).collect());
    }

    let mut frequencies: HashMap<String, usize> = HashMap::new();
    for word in words(doc.as_str()) {
        *frequencies.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(position, sentence)| {
            let tokens = words(sentence);
            if tokens.is_empty() {
                return (position, 0.0);
            }
            let total: usize = tokens
                .iter()
                .map(|w| frequencies.get(&w.to_lowercase()).copied().unwrap_or(0))
                .sum();
            (position, total as f64 / tokens.len() as f64)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut selected: Vec<usize> = scored.into_iter().take(count).map(|(p, _)| p).collect();
    selected.sort_unstable();

    Summary::new(
        selected
            .into_iter()
            .map(|p| sentences[p].to_string())
            .collect(),
    )
}
