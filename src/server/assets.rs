//! Static front end serving with single-page history fallback.
//!
//! Browser navigation to client-side routes (e.g. `/characters/123`) has no matching file
//! on disk, so such requests are answered with `index.html` and the front end resolves the
//! route itself. A request qualifies for the fallback when it is a `GET` or `HEAD`, accepts
//! `text/html` and its last path segment contains no `.`. Everything else is looked up in
//! the asset directory and answered with the unknown-endpoint 404 when missing.

use std::path::{Path, PathBuf};

use axum::{
    body::Body,
    extract::Request,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::server::controller::fallback::unknown_endpoint;

#[derive(Debug, Clone)]
pub struct StaticAssets {
    root: PathBuf,
}

impl StaticAssets {
    /// Serves assets from `root` if it is an existing directory.
    pub fn from_dir(root: impl AsRef<Path>) -> Option<Self> {
        let root = root.as_ref();
        root.is_dir().then(|| Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether an unmatched request may be answered from the asset directory.
    ///
    /// API paths never are, so unknown API calls always get the JSON 404.
    pub fn accepts(&self, request: &Request) -> bool {
        let path = request.uri().path();
        let is_api = path == "/api" || path.starts_with("/api/");

        matches!(*request.method(), Method::GET | Method::HEAD) && !is_api
    }

    /// Answers a request from the asset directory.
    pub async fn serve(&self, request: Request) -> Response {
        let response = if wants_history_fallback(&request) {
            match ServeFile::new(self.root.join("index.html"))
                .oneshot(request)
                .await
            {
                Ok(response) => response.map(Body::new),
                Err(never) => match never {},
            }
        } else {
            match ServeDir::new(&self.root).oneshot(request).await {
                Ok(response) => response.map(Body::new),
                Err(never) => match never {},
            }
        };

        if response.status() == StatusCode::NOT_FOUND {
            return unknown_endpoint().await.into_response();
        }

        response
    }
}

fn wants_history_fallback(request: &Request) -> bool {
    let accepts_html = request
        .headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html") || accept.contains("*/*"));

    let last_segment = request.uri().path().rsplit('/').next().unwrap_or_default();

    accepts_html && !last_segment.contains('.')
}
