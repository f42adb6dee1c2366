//! Streaming fetcher
//!
//! Opens `/stream-logs` and appends each chunk to the target as soon as it
//! arrives. Chunks are rendered in the order the transport delivers them.

use async_trait::async_trait;
use logfeed_client::{ChunkReader, LogsClient};
use logfeed_core::domain::display::{DisplayTarget, STREAMING_LOGS_ERROR, STREAMING_LOGS_TARGET};
use logfeed_core::domain::fetch::FetchState;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::LogsFetcher;
use super::decoder::{ChunkDecoder, DecodeMode};

/// Streams the log into the target chunk by chunk
pub struct StreamingLogsFetcher {
    client: Arc<LogsClient>,
    decode_mode: DecodeMode,
}

impl StreamingLogsFetcher {
    /// Creates a new streaming fetcher
    ///
    /// # Arguments
    /// * `client` - Client pointed at the log server
    /// * `decode_mode` - How characters split across chunks are decoded
    pub fn new(client: Arc<LogsClient>, decode_mode: DecodeMode) -> Self {
        Self {
            client,
            decode_mode,
        }
    }

    async fn stream_into(&self, target: &dyn DisplayTarget) -> logfeed_client::Result<usize> {
        let mut stream = self.client.open_log_stream().await?;
        target.set_content("");
        debug!(
            target_id = target.id(),
            "{} -> {}",
            FetchState::Requesting,
            FetchState::Reading
        );

        pump(&mut stream, target, ChunkDecoder::new(self.decode_mode)).await
    }
}

#[async_trait]
impl LogsFetcher for StreamingLogsFetcher {
    fn target_id(&self) -> &'static str {
        STREAMING_LOGS_TARGET
    }

    async fn run(&self, target: &dyn DisplayTarget) -> FetchState {
        debug!(
            target_id = target.id(),
            "{} -> {}",
            FetchState::Idle,
            FetchState::Requesting
        );

        match self.stream_into(target).await {
            Ok(chunks) => {
                debug!("Stream into {} finished after {} chunk(s)", target.id(), chunks);
                FetchState::Rendered
            }
            Err(e) => {
                error!("Error fetching streaming logs: {}", e);
                target.set_content(STREAMING_LOGS_ERROR);
                FetchState::ErrorDisplayed
            }
        }
    }
}

/// Reads `reader` to exhaustion, appending decoded text to `target`
///
/// The terminal read is never appended. Any read error stops the loop and
/// is returned as is; text already appended stays on the target.
///
/// # Returns
/// The number of data chunks appended
pub async fn pump<R>(
    reader: &mut R,
    target: &dyn DisplayTarget,
    mut decoder: ChunkDecoder,
) -> logfeed_client::Result<usize>
where
    R: ChunkReader + ?Sized,
{
    let mut chunks = 0;

    loop {
        let read = reader.read().await?;
        if read.done {
            let rest = decoder.finish();
            if !rest.is_empty() {
                target.append_content(&rest);
            }
            return Ok(chunks);
        }

        info!("Received chunk: {:?}", read.chunk);
        let text = decoder.decode(&read.chunk);
        target.append_content(&text);
        chunks += 1;
    }
}
