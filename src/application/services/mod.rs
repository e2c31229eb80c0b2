mod preprocessing_service;

pub use preprocessing_service::{CleanedDocument, PipelineError, PreprocessingService};
