//! Shared test helpers
//!
//! In-process log servers for exercising the client and the fetchers over
//! real HTTP.

use axum::{Json, Router, body::Body, routing::get};
use bytes::Bytes;
use futures_util::{StreamExt, stream};
use std::time::Duration;

/// Delay before each streamed chunk, so chunks leave the server one by one
const CHUNK_DELAY: Duration = Duration::from_millis(20);

/// Serves `app` on an ephemeral local port and returns its base URL
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    format!("http://{}", addr)
}

/// Base URL of a local port with nothing listening on it
pub async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");
    drop(listener);
    format!("http://{}", addr)
}

/// Router serving `/final-logs` with the given lines
pub fn final_logs_app(logs: &'static [&'static str]) -> Router {
    Router::new().route(
        "/final-logs",
        get(move || async move { Json(serde_json::json!({ "logs": logs })) }),
    )
}

/// Router serving `/stream-logs` chunk by chunk; `None` aborts the body
pub fn stream_logs_app(chunks: &'static [Option<&'static str>]) -> Router {
    Router::new().route(
        "/stream-logs",
        get(move || async move {
            let items = chunks
                .iter()
                .map(|chunk| match chunk {
                    Some(text) => Ok(Bytes::from_static(text.as_bytes())),
                    None => Err(std::io::Error::other("producer crashed")),
                })
                .collect::<Vec<_>>();
            let paced = stream::iter(items).then(|item| async move {
                tokio::time::sleep(CHUNK_DELAY).await;
                item
            });
            Body::from_stream(paced)
        }),
    )
}
