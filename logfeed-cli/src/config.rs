//! Configuration module
//!
//! Where the log server lives and how its responses are consumed.

use logfeed_client::{
    DEFAULT_BASE_URL, FINAL_LOGS_PATH, LogsClient, STREAM_LOGS_PATH, StatusPolicy,
};

use crate::service::DecodeMode;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the log server
    pub base_url: String,

    /// Path of the buffered endpoint
    pub final_logs_path: String,

    /// Path of the streaming endpoint
    pub stream_logs_path: String,

    /// Treat non-2xx responses as failures
    pub strict_status: bool,

    /// How characters split across streamed chunks are decoded
    pub decode_mode: DecodeMode,
}

impl Config {
    /// Creates a configuration for `base_url` with default endpoints
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            final_logs_path: FINAL_LOGS_PATH.to_string(),
            stream_logs_path: STREAM_LOGS_PATH.to_string(),
            strict_status: true,
            decode_mode: DecodeMode::default(),
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base_url cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if !self.final_logs_path.starts_with('/') {
            anyhow::bail!("final_logs_path must start with '/'");
        }

        if !self.stream_logs_path.starts_with('/') {
            anyhow::bail!("stream_logs_path must start with '/'");
        }

        Ok(())
    }

    /// Status policy derived from `strict_status`
    pub fn status_policy(&self) -> StatusPolicy {
        if self.strict_status {
            StatusPolicy::Strict
        } else {
            StatusPolicy::Lenient
        }
    }

    /// Builds a client for the configured server
    pub fn client(&self) -> LogsClient {
        LogsClient::new(self.base_url.clone())
            .with_paths(self.final_logs_path.clone(), self.stream_logs_path.clone())
            .with_status_policy(self.status_policy())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.final_logs_path, "/final-logs");
        assert_eq!(config.stream_logs_path, "/stream-logs");
        assert_eq!(config.status_policy(), StatusPolicy::Strict);
        assert_eq!(config.decode_mode, DecodeMode::PerChunk);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.base_url = String::new();
        assert!(config.validate().is_err());

        config.base_url = "127.0.0.1:8000".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://logs.internal".to_string();
        assert!(config.validate().is_ok());

        config.stream_logs_path = "stream-logs".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_uses_config() {
        let mut config = Config::new("http://localhost:9000/".to_string());
        config.final_logs_path = "/logs/final".to_string();
        config.strict_status = false;

        let client = config.client();
        assert_eq!(client.final_logs_url(), "http://localhost:9000/logs/final");
        assert_eq!(client.stream_logs_url(), "http://localhost:9000/stream-logs");
        assert_eq!(client.status_policy(), StatusPolicy::Lenient);
    }
}
