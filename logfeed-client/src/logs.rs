//! Buffered log endpoint

use crate::LogsClient;
use crate::error::{ClientError, Result};
use logfeed_core::domain::log::LogsPayload;

impl LogsClient {
    /// Fetch the complete log as one JSON document
    ///
    /// Waits for the whole body before parsing it.
    ///
    /// # Returns
    /// The decoded payload
    ///
    /// # Example
    /// ```no_run
    /// # use logfeed_client::LogsClient;
    /// # async fn example() -> logfeed_client::Result<()> {
    /// let client = LogsClient::new("http://127.0.0.1:8000");
    /// let payload = client.fetch_final_logs().await?;
    /// assert!(payload.logs.len() <= 5);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_final_logs(&self) -> Result<LogsPayload> {
        let url = self.final_logs_url();
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let response = self.check_status(response).await?;

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
