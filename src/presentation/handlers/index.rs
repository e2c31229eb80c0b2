use axum::response::Html;

/// Serves the URL-input form for browser use.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../../templates/index.html"))
}
