mod analyze;
mod clean;
mod health;
mod index;
pub mod payloads;

pub use analyze::analyze_handler;
pub use clean::clean_handler;
pub use health::health_handler;
pub use index::index_handler;
