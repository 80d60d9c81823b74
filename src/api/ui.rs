//! Form UI served at the root path

use axum::response::Html;

const INDEX_HTML: &str = include_str!("index.html");

/// GET / - Serve the downloader form
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
