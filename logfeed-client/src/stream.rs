//! Streaming log endpoint
//!
//! The body of `/stream-logs` has no framing of its own. A [`LogStream`]
//! hands out chunks exactly as the transport delivers them, in order, and
//! signals exhaustion with a separate `done` flag so that the terminal read
//! can never be mistaken for a chunk carrying data.

use async_trait::async_trait;
use bytes::Bytes;

use crate::LogsClient;
use crate::error::{ClientError, Result};

/// Outcome of a single read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadResult {
    /// Bytes delivered by this read; empty when `done` is set
    pub chunk: Bytes,
    /// The source is exhausted
    pub done: bool,
}

impl ReadResult {
    /// A read that delivered data
    pub fn data(chunk: impl Into<Bytes>) -> Self {
        Self {
            chunk: chunk.into(),
            done: false,
        }
    }

    /// The terminal read
    pub fn done() -> Self {
        Self {
            chunk: Bytes::new(),
            done: true,
        }
    }
}

/// Incremental reader over a byte source
#[async_trait]
pub trait ChunkReader: Send {
    /// Pulls the next chunk
    ///
    /// Once a read has returned `done`, every later read returns `done` too.
    async fn read(&mut self) -> Result<ReadResult>;
}

/// Reader over the body of a streaming response
#[derive(Debug)]
pub struct LogStream {
    response: Option<reqwest::Response>,
    chunks_read: usize,
}

impl LogStream {
    fn new(response: reqwest::Response) -> Self {
        Self {
            response: Some(response),
            chunks_read: 0,
        }
    }

    /// Number of data chunks delivered so far
    pub fn chunks_read(&self) -> usize {
        self.chunks_read
    }
}

#[async_trait]
impl ChunkReader for LogStream {
    async fn read(&mut self) -> Result<ReadResult> {
        let Some(response) = self.response.as_mut() else {
            return Ok(ReadResult::done());
        };

        match response.chunk().await {
            Ok(Some(chunk)) => {
                self.chunks_read += 1;
                Ok(ReadResult::data(chunk))
            }
            Ok(None) => {
                tracing::debug!("Stream exhausted after {} chunk(s)", self.chunks_read);
                self.response = None;
                Ok(ReadResult::done())
            }
            Err(e) => {
                self.response = None;
                Err(ClientError::StreamFailed(e))
            }
        }
    }
}

impl LogsClient {
    /// Open the streaming endpoint
    ///
    /// Returns as soon as the response headers arrive; the body is pulled
    /// through [`ChunkReader::read`].
    pub async fn open_log_stream(&self) -> Result<LogStream> {
        let url = self.stream_logs_url();
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let response = self.check_status(response).await?;

        Ok(LogStream::new(response))
    }
}
