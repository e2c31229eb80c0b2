/// Descriptive metrics computed over a single normalized document.
///
/// Counts are non-negative by construction and `vocabulary_richness` stays
/// within `[0, 1]`; an empty document yields all zeroes rather than a
/// division-by-zero fault.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStatistics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub unique_word_count: usize,
    pub average_word_length: f64,
    pub average_sentence_length: f64,
    pub vocabulary_richness: f64,
}

impl TextStatistics {
    pub fn empty() -> Self {
        Self {
            word_count: 0,
            sentence_count: 0,
            unique_word_count: 0,
            average_word_length: 0.0,
            average_sentence_length: 0.0,
            vocabulary_richness: 0.0,
        }
    }
}

impl Default for TextStatistics {
    fn default() -> Self {
        Self::empty()
    }
}
