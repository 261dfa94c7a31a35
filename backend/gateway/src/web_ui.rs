//! Embedded capture UI.
//!
//! A single static page implementing the three capture modalities
//! client-side: file picker, drag-and-drop, and camera snapshot.

use axum::response::Html;

/// Handler for `GET /`.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}
