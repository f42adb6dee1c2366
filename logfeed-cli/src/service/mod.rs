//! Service layer
//!
//! Fetchers pull logs from the server and render them into a display
//! target. Each one owns the whole lifecycle of a single fetch, including
//! failure: errors are caught here, logged, and turned into a static
//! message on the target. Nothing is rethrown to the caller.
//!
//! All fetchers are trait-based so commands can drive them uniformly.

mod decoder;
mod final_logs;
mod streaming_logs;

use async_trait::async_trait;
use logfeed_core::domain::display::DisplayTarget;
use logfeed_core::domain::fetch::FetchState;

pub use decoder::DecodeMode;
pub use final_logs::FinalLogsFetcher;
pub use streaming_logs::StreamingLogsFetcher;

/// A single fetch-and-render operation
#[async_trait]
pub trait LogsFetcher: Send + Sync {
    /// Identifier of the display target this fetcher renders into
    fn target_id(&self) -> &'static str;

    /// Performs the fetch and renders into `target`
    ///
    /// # Returns
    /// The terminal state, either `Rendered` or `ErrorDisplayed`
    async fn run(&self, target: &dyn DisplayTarget) -> FetchState;
}

/// Runs two fetchers concurrently on the current task
///
/// There is no coordination between them; they interleave at their await
/// points and each touches only its own target.
pub async fn run_both(
    first: &dyn LogsFetcher,
    first_target: &dyn DisplayTarget,
    second: &dyn LogsFetcher,
    second_target: &dyn DisplayTarget,
) -> (FetchState, FetchState) {
    tokio::join!(first.run(first_target), second.run(second_target))
}
