use axum::http::header;
use axum::response::{Html, IntoResponse};

/// The browser client, embedded at compile time. It talks to the same API
/// this crate serves and re-checks the upload constraints from /api/limits
/// before sending (fail fast; the server check stays authoritative).
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../public/index.html"))
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        include_str!("../../../public/script.js"),
    )
}

pub async fn styles() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../../public/styles.css"),
    )
}
