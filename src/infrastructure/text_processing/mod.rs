mod boilerplate;
mod normalizer;
mod segmentation;
mod statistics;
mod summarizer;

pub use boilerplate::strip_boilerplate;
pub use normalizer::normalize;
pub use segmentation::{split_sentences, words};
pub use statistics::analyze;
pub use summarizer::summarize;
