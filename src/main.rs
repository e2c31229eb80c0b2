use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use gutenpress::application::services::PreprocessingService;
use gutenpress::infrastructure::fetch::HttpTextFetcher;
use gutenpress::infrastructure::observability::{TracingConfig, init_tracing};
use gutenpress::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let fetcher = Arc::new(HttpTextFetcher::new(settings.fetch.timeout));
    let preprocessing_service = Arc::new(PreprocessingService::new(
        Arc::clone(&fetcher),
        settings.summary.sentence_count,
    ));

    let state = AppState {
        preprocessing_service,
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
