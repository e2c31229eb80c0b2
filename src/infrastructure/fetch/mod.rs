mod http_fetcher;
mod mock_fetcher;

pub use http_fetcher::{DEFAULT_FETCH_TIMEOUT, HttpTextFetcher};
pub use mock_fetcher::MockTextFetcher;
