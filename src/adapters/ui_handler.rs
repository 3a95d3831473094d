use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Compiled Web UI bundle (`trunk build` output)
#[derive(RustEmbed)]
#[folder = "ui/dist"]
#[allow_missing = true]
struct Asset;

pub struct UIHandler;

impl UIHandler {
    pub async fn serve(uri: Uri) -> impl IntoResponse {
        let path = match uri.path().trim_start_matches('/') {
            "" => "index.html",
            path => path,
        };

        match Self::asset(path) {
            Some(response) => response,
            // SPA fallback: unknown paths are client-side routes
            None => Self::asset("index.html").unwrap_or_else(|| {
                tracing::warn!("UI bundle not found; build it with `trunk build` in ui/");
                (StatusCode::NOT_FOUND, "404 Not Found").into_response()
            }),
        }
    }

    fn asset(path: &str) -> Option<Response> {
        Asset::get(path).map(|content| {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        })
    }
}
