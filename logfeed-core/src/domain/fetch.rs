//! Fetch lifecycle

/// Lifecycle state of a single fetch
///
/// `Idle -> Requesting -> Reading* -> Rendered | ErrorDisplayed`.
/// Only the streaming fetcher passes through `Reading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Requesting,
    Reading,
    Rendered,
    ErrorDisplayed,
}

impl FetchState {
    /// Whether the fetch has finished, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchState::Rendered | FetchState::ErrorDisplayed)
    }
}

impl std::fmt::Display for FetchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FetchState::Idle => "idle",
            FetchState::Requesting => "requesting",
            FetchState::Reading => "reading",
            FetchState::Rendered => "rendered",
            FetchState::ErrorDisplayed => "error-displayed",
        };
        write!(f, "{}", s)
    }
}
