// HTML response utilities, including chunked progressive pages
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::Bytes;
use futures::stream::Stream;
use futures::StreamExt;
use std::convert::Infallible;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Build a complete HTML response with the given status
pub fn html_response(status: StatusCode, html: String) -> Response<Body> {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, HTML_CONTENT_TYPE)
        .body(Body::from(html))
        .unwrap_or_else(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
}

/// Create a chunked HTML response; each item is flushed as its own chunk
pub fn chunked_html_stream<S>(stream: S) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = String> + Send + 'static,
{
    let byte_stream = stream.map(|chunk| Ok::<_, Infallible>(Bytes::from(chunk)));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HTML_CONTENT_TYPE)
        .header(header::CACHE_CONTROL, "no-store")
        .body(Body::from_stream(byte_stream))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Render every message from `rx` into a chunk, then close with `tail`
pub fn stream_from_receiver<T, F>(
    mut rx: tokio::sync::mpsc::Receiver<T>,
    render: F,
    tail: String,
) -> impl IntoResponse
where
    T: Send + 'static,
    F: Fn(T) -> String + Send + 'static,
{
    let stream = async_stream::stream! {
        while let Some(msg) = rx.recv().await {
            yield render(msg);
        }
        yield tail;
    };

    match chunked_html_stream(stream) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
