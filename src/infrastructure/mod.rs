pub mod fetch;
pub mod observability;
pub mod text_processing;
