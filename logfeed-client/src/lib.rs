//! Logfeed HTTP Client
//!
//! A small, type-safe HTTP client for the two log endpoints:
//! - `/final-logs`: the whole log as one JSON document
//! - `/stream-logs`: raw text delivered chunk by chunk
//!
//! # Example
//!
//! ```no_run
//! use logfeed_client::{ChunkReader, LogsClient};
//!
//! #[tokio::main]
//! async fn main() -> logfeed_client::Result<()> {
//!     let client = LogsClient::new("http://127.0.0.1:8000");
//!
//!     let payload = client.fetch_final_logs().await?;
//!     println!("{}", payload.logs.join("\n"));
//!
//!     let mut stream = client.open_log_stream().await?;
//!     loop {
//!         let read = stream.read().await?;
//!         if read.done {
//!             break;
//!         }
//!         print!("{}", String::from_utf8_lossy(&read.chunk));
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod logs;
mod stream;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use logfeed_core::domain::log::LogsPayload;
pub use stream::{ChunkReader, LogStream, ReadResult};

use reqwest::Client;

/// Default location of the log server
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default path of the buffered endpoint
pub const FINAL_LOGS_PATH: &str = "/final-logs";

/// Default path of the streaming endpoint
pub const STREAM_LOGS_PATH: &str = "/stream-logs";

/// How responses with a non-2xx status are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Non-2xx responses fail with [`ClientError::ApiError`]
    #[default]
    Strict,
    /// The status is ignored and the body is consumed as if it succeeded
    Lenient,
}

/// HTTP client for the log endpoints
#[derive(Debug, Clone)]
pub struct LogsClient {
    /// Base URL of the log server (e.g., "http://127.0.0.1:8000")
    base_url: String,
    /// Path of the buffered endpoint
    final_logs_path: String,
    /// Path of the streaming endpoint
    stream_logs_path: String,
    /// Non-2xx handling
    status_policy: StatusPolicy,
    /// HTTP client instance
    client: Client,
}

impl LogsClient {
    /// Create a new logs client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the log server (e.g., "http://127.0.0.1:8000")
    ///
    /// # Example
    /// ```
    /// use logfeed_client::LogsClient;
    ///
    /// let client = LogsClient::new("http://127.0.0.1:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new logs client with a custom HTTP client
    ///
    /// This allows you to configure proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the log server
    /// * `client` - A configured reqwest Client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            final_logs_path: FINAL_LOGS_PATH.to_string(),
            stream_logs_path: STREAM_LOGS_PATH.to_string(),
            status_policy: StatusPolicy::default(),
            client,
        }
    }

    /// Override the endpoint paths
    pub fn with_paths(
        mut self,
        final_logs_path: impl Into<String>,
        stream_logs_path: impl Into<String>,
    ) -> Self {
        self.final_logs_path = final_logs_path.into();
        self.stream_logs_path = stream_logs_path.into();
        self
    }

    /// Set how non-2xx responses are treated
    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }

    /// Get the base URL of the log server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured status policy
    pub fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }

    /// Full URL of the buffered endpoint
    pub fn final_logs_url(&self) -> String {
        format!("{}{}", self.base_url, self.final_logs_path)
    }

    /// Full URL of the streaming endpoint
    pub fn stream_logs_url(&self) -> String {
        format!("{}{}", self.base_url, self.stream_logs_path)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Apply the status policy to a response
    ///
    /// Under [`StatusPolicy::Strict`] a non-2xx status consumes the body as
    /// the error message and fails. Otherwise the response is handed back
    /// untouched.
    async fn check_status(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if status.is_success() || self.status_policy == StatusPolicy::Lenient {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ClientError::api_error(status.as_u16(), error_text))
    }
}
