//! Access logging.
//!
//! Emits one line per request in the form
//! `<METHOD> <URI> <STATUS> <content-length> - <elapsed> ms`, with `-` standing in for an
//! unknown body length.

use std::time::{Duration, Instant};

use axum::{
    body::HttpBody,
    extract::Request,
    http::{header, Method, StatusCode, Uri},
    middleware::Next,
    response::Response,
};

pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        "{}",
        access_line(
            &method,
            &uri,
            response.status(),
            content_length(&response),
            started.elapsed()
        )
    );

    response
}

fn access_line(
    method: &Method,
    uri: &Uri,
    status: StatusCode,
    content_length: Option<u64>,
    elapsed: Duration,
) -> String {
    let content_length = content_length.map_or_else(|| "-".to_string(), |len| len.to_string());

    format!(
        "{} {} {} {} - {:.3} ms",
        method,
        uri,
        status.as_u16(),
        content_length,
        elapsed.as_secs_f64() * 1000.0
    )
}

fn content_length(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .or_else(|| response.body().size_hint().exact())
}
