mod text_fetcher;

pub use text_fetcher::{FetchError, TextFetcher};
