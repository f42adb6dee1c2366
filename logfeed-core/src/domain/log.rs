//! Log domain types

use serde::{Deserialize, Serialize};

/// Separator placed between log lines in the rendered final view
pub const LINE_BREAK: &str = "<br>";

/// Complete response of the `/final-logs` endpoint
///
/// The `logs` field is required; nothing else about the payload is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogsPayload {
    pub logs: Vec<String>,
}

impl LogsPayload {
    /// Joins all log lines with [`LINE_BREAK`]
    pub fn joined(&self) -> String {
        self.logs.join(LINE_BREAK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_uses_line_break() {
        let payload = LogsPayload {
            logs: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        };
        assert_eq!(payload.joined(), "a<br>b<br>c");
    }

    #[test]
    fn test_joined_empty() {
        let payload = LogsPayload { logs: Vec::new() };
        assert_eq!(payload.joined(), "");
    }

    #[test]
    fn test_deserialize_requires_logs_field() {
        let ok: LogsPayload = serde_json::from_str(r#"{"logs":["x"],"extra":1}"#).unwrap();
        assert_eq!(ok.logs, vec!["x".to_string()]);

        let missing = serde_json::from_str::<LogsPayload>(r#"{"lines":["x"]}"#);
        assert!(missing.is_err());
    }
}
