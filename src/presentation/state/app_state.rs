use std::sync::Arc;

use crate::application::ports::TextFetcher;
use crate::application::services::PreprocessingService;

pub struct AppState<F>
where
    F: TextFetcher,
{
    pub preprocessing_service: Arc<PreprocessingService<F>>,
}

impl<F> Clone for AppState<F>
where
    F: TextFetcher,
{
    fn clone(&self) -> Self {
        Self {
            preprocessing_service: Arc::clone(&self.preprocessing_service),
        }
    }
}
