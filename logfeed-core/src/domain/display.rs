//! Display targets
//!
//! A display target is an addressable output region whose text can be fully
//! replaced or appended to. Fetchers receive one by reference instead of
//! writing into global state, so the same fetcher can render to a terminal
//! or to an in-memory buffer under test.

use std::sync::{Mutex, PoisonError};

/// Identifier of the region the final (buffered) view renders into
pub const FINAL_LOGS_TARGET: &str = "final-logs";

/// Identifier of the region streamed chunks are appended to
pub const STREAMING_LOGS_TARGET: &str = "streaming-logs";

/// Shown in place of the final view when fetching fails
pub const FINAL_LOGS_ERROR: &str = "Error fetching logs";

/// Shown in place of the streamed view when fetching fails
pub const STREAMING_LOGS_ERROR: &str = "Error fetching streaming logs";

/// Output sink for rendered log content
///
/// Implementations use interior mutability so a target can be shared
/// across tasks behind a plain reference.
pub trait DisplayTarget: Send + Sync {
    /// Identifier of this region
    fn id(&self) -> &str;

    /// Replaces the whole content
    fn set_content(&self, content: &str);

    /// Appends to the existing content
    fn append_content(&self, content: &str);

    /// Returns a snapshot of the current content
    fn content(&self) -> String;
}

/// In-memory display target
#[derive(Debug)]
pub struct MemoryTarget {
    id: String,
    content: Mutex<String>,
}

impl MemoryTarget {
    /// Creates an empty target with the given identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: Mutex::new(String::new()),
        }
    }
}

impl DisplayTarget for MemoryTarget {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_content(&self, content: &str) {
        let mut current = self.content.lock().unwrap_or_else(PoisonError::into_inner);
        current.clear();
        current.push_str(content);
    }

    fn append_content(&self, content: &str) {
        let mut current = self.content.lock().unwrap_or_else(PoisonError::into_inner);
        current.push_str(content);
    }

    fn content(&self) -> String {
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
