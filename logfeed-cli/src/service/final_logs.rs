//! Buffered fetcher
//!
//! Waits for the complete `/final-logs` document, then renders every line
//! at once.

use async_trait::async_trait;
use logfeed_client::LogsClient;
use logfeed_core::domain::display::{DisplayTarget, FINAL_LOGS_ERROR, FINAL_LOGS_TARGET};
use logfeed_core::domain::fetch::FetchState;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::LogsFetcher;

/// Fetches the whole log and replaces the target with the joined lines
pub struct FinalLogsFetcher {
    client: Arc<LogsClient>,
}

impl FinalLogsFetcher {
    /// Creates a new buffered fetcher
    ///
    /// # Arguments
    /// * `client` - Client pointed at the log server
    pub fn new(client: Arc<LogsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LogsFetcher for FinalLogsFetcher {
    fn target_id(&self) -> &'static str {
        FINAL_LOGS_TARGET
    }

    async fn run(&self, target: &dyn DisplayTarget) -> FetchState {
        debug!(
            target_id = target.id(),
            "{} -> {}",
            FetchState::Idle,
            FetchState::Requesting
        );

        match self.client.fetch_final_logs().await {
            Ok(payload) => {
                target.set_content(&payload.joined());
                info!("Final response: {:?}", payload);
                FetchState::Rendered
            }
            Err(e) => {
                error!("Error fetching final logs: {}", e);
                target.set_content(FINAL_LOGS_ERROR);
                FetchState::ErrorDisplayed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::get};
    use logfeed_client::StatusPolicy;
    use logfeed_core::domain::display::MemoryTarget;
    use logfeed_test_support::{final_logs_app, refused_url, serve};

    async fn fetcher_for(app: Router) -> FinalLogsFetcher {
        FinalLogsFetcher::new(Arc::new(LogsClient::new(serve(app).await)))
    }

    #[tokio::test]
    async fn test_renders_joined_lines() {
        let fetcher = fetcher_for(final_logs_app(&["a", "b", "c"])).await;
        let target = MemoryTarget::new(FINAL_LOGS_TARGET);

        let state = fetcher.run(&target).await;

        assert_eq!(state, FetchState::Rendered);
        assert_eq!(target.content(), "a<br>b<br>c");
    }

    #[tokio::test]
    async fn test_malformed_json_shows_error() {
        let app = Router::new().route("/final-logs", get(|| async { "Log entry 1" }));
        let fetcher = fetcher_for(app).await;
        let target = MemoryTarget::new(FINAL_LOGS_TARGET);
        target.set_content("stale");

        let state = fetcher.run(&target).await;

        assert_eq!(state, FetchState::ErrorDisplayed);
        assert_eq!(target.content(), "Error fetching logs");
    }

    #[tokio::test]
    async fn test_missing_logs_field_shows_error() {
        let app = Router::new().route(
            "/final-logs",
            get(|| async { Json(serde_json::json!({ "entries": ["a"] })) }),
        );
        let fetcher = fetcher_for(app).await;
        let target = MemoryTarget::new(FINAL_LOGS_TARGET);

        assert_eq!(fetcher.run(&target).await, FetchState::ErrorDisplayed);
        assert_eq!(target.content(), FINAL_LOGS_ERROR);
    }

    #[tokio::test]
    async fn test_connection_refused_shows_error() {
        let client = Arc::new(LogsClient::new(refused_url().await));
        let fetcher = FinalLogsFetcher::new(client);
        let target = MemoryTarget::new(FINAL_LOGS_TARGET);

        assert_eq!(fetcher.run(&target).await, FetchState::ErrorDisplayed);
        assert_eq!(target.content(), FINAL_LOGS_ERROR);
    }

    #[tokio::test]
    async fn test_error_status_depends_on_policy() {
        let app = Router::new().route(
            "/final-logs",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "logs": ["x"] })),
                )
            }),
        );
        let base = serve(app).await;
        let target = MemoryTarget::new(FINAL_LOGS_TARGET);

        let strict = FinalLogsFetcher::new(Arc::new(LogsClient::new(base.clone())));
        assert_eq!(strict.run(&target).await, FetchState::ErrorDisplayed);
        assert_eq!(target.content(), FINAL_LOGS_ERROR);

        let lenient = FinalLogsFetcher::new(Arc::new(
            LogsClient::new(base).with_status_policy(StatusPolicy::Lenient),
        ));
        assert_eq!(lenient.run(&target).await, FetchState::Rendered);
        assert_eq!(target.content(), "x");
    }

    #[tokio::test]
    async fn test_repeated_runs_render_the_same() {
        let fetcher = fetcher_for(final_logs_app(&["Log entry 1", "Log entry 2"])).await;
        let first = MemoryTarget::new(FINAL_LOGS_TARGET);
        let second = MemoryTarget::new(FINAL_LOGS_TARGET);

        fetcher.run(&first).await;
        fetcher.run(&second).await;

        assert_eq!(first.content(), "Log entry 1<br>Log entry 2");
        assert_eq!(first.content(), second.content());
    }
}
