mod settings;

pub use settings::{FetchSettings, ServerSettings, Settings, SummarySettings};
