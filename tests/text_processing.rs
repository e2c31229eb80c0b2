use gutenpress::domain::Document;
use gutenpress::infrastructure::text_processing::{
    analyze, normalize, split_sentences, strip_boilerplate, summarize, words,
};

const GUTENBERG_SAMPLE: &str = "*** START OF THIS PROJECT GUTENBERG EBOOK ***\nHello world. This is a test.\n*** END OF THIS PROJECT GUTENBERG EBOOK ***";

#[test]
fn given_both_markers_when_stripping_then_returns_text_strictly_between_them() {
    let raw = Document::from(GUTENBERG_SAMPLE);
    let stripped = strip_boilerplate(&raw);
    assert_eq!(stripped.as_str(), "Hello world. This is a test.");
}

#[test]
fn given_only_start_marker_when_stripping_then_returns_everything_after_it() {
    let raw = Document::from(
        "Publisher preamble\n*** START OF THIS PROJECT GUTENBERG EBOOK PRIDE ***\nThe body text.",
    );
    let stripped = strip_boilerplate(&raw);
    assert_eq!(stripped.as_str(), "The body text.");
}

#[test]
fn given_only_end_marker_when_stripping_then_returns_everything_before_it() {
    let raw =
        Document::from("The body text.\n*** END OF THIS PROJECT GUTENBERG EBOOK ***\nLicense.");
    let stripped = strip_boilerplate(&raw);
    assert_eq!(stripped.as_str(), "The body text.");
}

#[test]
fn given_no_markers_when_stripping_then_returns_input_unchanged() {
    let raw = Document::from("Just a plain document with no publisher framing.");
    let stripped = strip_boilerplate(&raw);
    assert_eq!(stripped, raw);
}

#[test]
fn given_adjacent_markers_when_stripping_then_returns_empty_document() {
    let raw = Document::from(
        "*** START OF THIS PROJECT GUTENBERG EBOOK ***\n*** END OF THIS PROJECT GUTENBERG EBOOK ***",
    );
    let stripped = strip_boilerplate(&raw);
    assert!(stripped.is_empty());
}

#[test]
fn given_lowercase_markers_when_stripping_then_matches_case_insensitively() {
    let raw = Document::from(
        "*** start of this project gutenberg ebook ***\nBody.\n*** end of this project gutenberg ebook ***",
    );
    let stripped = strip_boilerplate(&raw);
    assert_eq!(stripped.as_str(), "Body.");
}

#[test]
fn given_the_variant_markers_when_stripping_then_matches_marker_family() {
    let raw = Document::from(
        "*** START OF THE PROJECT GUTENBERG EBOOK MOBY DICK ***\nCall me Ishmael.\n*** END OF THE PROJECT GUTENBERG EBOOK MOBY DICK ***",
    );
    let stripped = strip_boilerplate(&raw);
    assert_eq!(stripped.as_str(), "Call me Ishmael.");
}

#[test]
fn given_end_marker_in_front_matter_when_stripping_then_footer_search_starts_after_header() {
    let raw = Document::from(
        "Notes mention the END OF THIS PROJECT GUTENBERG footer.\n*** START OF THIS PROJECT GUTENBERG EBOOK ***\nBody.\n*** END OF THIS PROJECT GUTENBERG EBOOK ***",
    );
    let stripped = strip_boilerplate(&raw);
    assert_eq!(stripped.as_str(), "Body.");
}

#[test]
fn given_any_messy_text_when_normalizing_twice_then_result_is_stable() {
    let inputs = [
        "  Hello   world \t again ",
        "one\n\ntwo\nthree",
        "\u{201C}Quoted\u{201D} \u{2014} yes",
        "",
        "   \n\n  ",
        "a\u{0007}b\u{00A0}c",
    ];
    for input in inputs {
        let once = normalize(&Document::from(input));
        let twice = normalize(&once);
        assert_eq!(twice, once, "normalize must be idempotent for {:?}", input);
    }
}

#[test]
fn given_runs_of_spaces_and_tabs_when_normalizing_then_collapses_to_single_space() {
    let doc = normalize(&Document::from("hello \t  world"));
    assert_eq!(doc.as_str(), "hello world");
}

#[test]
fn given_paragraph_break_when_normalizing_then_collapses_to_single_newline() {
    let doc = normalize(&Document::from("paragraph one\n\n\nparagraph two"));
    assert_eq!(doc.as_str(), "paragraph one\nparagraph two");
}

#[test]
fn given_curly_quotes_and_dashes_when_normalizing_then_maps_to_ascii() {
    let doc = normalize(&Document::from(
        "\u{2018}tis \u{201C}quoted\u{201D} \u{2013} and \u{2014} done",
    ));
    assert_eq!(doc.as_str(), "'tis \"quoted\" - and - done");
}

#[test]
fn given_control_characters_when_normalizing_then_removes_them() {
    let doc = normalize(&Document::from("be\u{0007}ll and de\u{007F}l"));
    assert_eq!(doc.as_str(), "bell and del");
}

#[test]
fn given_surrounding_whitespace_when_normalizing_then_trims_both_ends() {
    let doc = normalize(&Document::from("\n  centered  \n"));
    assert_eq!(doc.as_str(), "centered");
}

#[test]
fn given_empty_input_when_normalizing_then_returns_empty_document() {
    assert!(normalize(&Document::from("")).is_empty());
}

#[test]
fn given_ligatures_when_normalizing_then_folds_to_plain_letters() {
    let doc = normalize(&Document::from("ﬁnding the ﬂood"));
    assert_eq!(doc.as_str(), "finding the flood");
}

#[test]
fn given_empty_document_when_analyzing_then_all_metrics_are_zero() {
    let stats = analyze(&Document::from(""));
    assert_eq!(stats.word_count, 0);
    assert_eq!(stats.sentence_count, 0);
    assert_eq!(stats.unique_word_count, 0);
    assert_eq!(stats.average_word_length, 0.0);
    assert_eq!(stats.average_sentence_length, 0.0);
    assert_eq!(stats.vocabulary_richness, 0.0);
}

#[test]
fn given_gutenberg_sample_when_running_pipeline_then_counts_match() {
    let stripped = strip_boilerplate(&Document::from(GUTENBERG_SAMPLE));
    let normalized = normalize(&stripped);
    let stats = analyze(&normalized);
    assert_eq!(stats.word_count, 6);
    assert_eq!(stats.sentence_count, 2);
}

#[test]
fn given_honorific_abbreviation_when_segmenting_then_does_not_split_after_it() {
    let sentences = split_sentences("Mr. Darcy arrived. He left.");
    assert_eq!(sentences, vec!["Mr. Darcy arrived.", "He left."]);
}

#[test]
fn given_single_initial_when_segmenting_then_does_not_split_after_it() {
    let sentences = split_sentences("J. Smith spoke first.");
    assert_eq!(sentences, vec!["J. Smith spoke first."]);
}

#[test]
fn given_text_without_trailing_terminator_when_segmenting_then_tail_is_a_sentence() {
    let sentences = split_sentences("Complete sentence. Trailing fragment");
    assert_eq!(sentences, vec!["Complete sentence.", "Trailing fragment"]);
}

#[test]
fn given_internal_apostrophes_and_hyphens_when_tokenizing_then_each_is_one_word() {
    assert_eq!(words("don't well-known"), vec!["don't", "well-known"]);
}

#[test]
fn given_trailing_punctuation_when_tokenizing_then_punctuation_is_excluded() {
    assert_eq!(words("stop- 'quoted'"), vec!["stop", "quoted"]);
}

#[test]
fn given_repeated_words_with_mixed_case_when_analyzing_then_unique_count_is_folded() {
    let stats = analyze(&Document::from("The the THE"));
    assert_eq!(stats.word_count, 3);
    assert_eq!(stats.unique_word_count, 1);
    assert!((stats.vocabulary_richness - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn given_known_words_when_analyzing_then_average_word_length_counts_alphanumerics_only() {
    let stats = analyze(&Document::from("ab cd."));
    assert_eq!(stats.average_word_length, 2.0);
}

#[test]
fn given_fewer_sentences_than_requested_when_summarizing_then_returns_all_in_order() {
    let summary = summarize(&Document::from("One. Two. Three."), 5);
    assert_eq!(summary.sentences(), ["One.", "Two.", "Three."]);
}

#[test]
fn given_high_scoring_late_sentence_when_summarizing_then_output_keeps_document_order() {
    let doc = Document::from("Alpha beta. Gamma delta epsilon. Cats cats cats cats.");
    let summary = summarize(&doc, 2);
    assert_eq!(summary.sentences(), ["Alpha beta.", "Cats cats cats cats."]);
}

#[test]
fn given_requested_count_when_summarizing_then_summary_is_no_longer_than_count() {
    let doc = Document::from("One. Two. Three. Four. Five.");
    let summary = summarize(&doc, 2);
    assert_eq!(summary.len(), 2);
}

#[test]
fn given_empty_document_when_summarizing_then_summary_is_empty() {
    assert!(summarize(&Document::from(""), 3).is_empty());
}

#[test]
fn given_zero_count_when_summarizing_then_summary_is_empty() {
    assert!(summarize(&Document::from("One. Two."), 0).is_empty());
}
