//! Terminal display target
//!
//! Mirrors every mutation of a display target onto a writer (stdout in the
//! binary). Replacements are printed as a labelled block with `<br>` turned
//! into newlines; appended chunks are written through and flushed at once so
//! streamed text shows up as it arrives.

use colored::Colorize;
use logfeed_core::domain::display::{DisplayTarget, MemoryTarget};
use logfeed_core::domain::log::LINE_BREAK;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Display target backed by a terminal (or any writer)
pub struct TerminalTarget<W: Write + Send> {
    inner: MemoryTarget,
    out: Mutex<W>,
}

impl TerminalTarget<io::Stdout> {
    /// Creates a target that writes to stdout
    pub fn stdout(id: impl Into<String>) -> Self {
        Self::new(id, io::stdout())
    }
}

impl<W: Write + Send> TerminalTarget<W> {
    pub fn new(id: impl Into<String>, out: W) -> Self {
        Self {
            inner: MemoryTarget::new(id),
            out: Mutex::new(out),
        }
    }

    /// Consumes the target and returns the writer
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            warn!("Failed to write to display {}: {}", self.inner.id(), e);
        }
    }
}

impl<W: Write + Send> DisplayTarget for TerminalTarget<W> {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn set_content(&self, content: &str) {
        self.inner.set_content(content);
        if content.is_empty() {
            return;
        }
        let rendered = content.replace(LINE_BREAK, "\n");
        let header = format!("[{}]", self.inner.id()).bold();
        self.emit(&format!("{}\n{}\n", header, rendered));
    }

    fn append_content(&self, content: &str) {
        self.inner.append_content(content);
        self.emit(content);
    }

    fn content(&self) -> String {
        self.inner.content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_renders_line_breaks() {
        colored::control::set_override(false);
        let target = TerminalTarget::new("final-logs", Vec::new());

        target.set_content("a<br>b");

        assert_eq!(target.content(), "a<br>b");
        let out = String::from_utf8(target.into_writer()).unwrap();
        assert_eq!(out, "[final-logs]\na\nb\n");
    }

    #[test]
    fn test_append_writes_through() {
        let target = TerminalTarget::new("streaming-logs", Vec::new());

        target.set_content("");
        target.append_content("He");
        target.append_content("llo");

        assert_eq!(target.content(), "Hello");
        let out = String::from_utf8(target.into_writer()).unwrap();
        assert_eq!(out, "Hello");
    }
}
