//! Operation log format module
//!
//! Every request outcome is recorded as one structured line. Two formats:
//! - `kv` (default): `path=..,method=..,unix_op=..,response_code=..,err=..`
//! - `json`: one JSON object per line

use chrono::{DateTime, Local};

/// One request outcome, ready for the operation log.
#[derive(Debug, Clone)]
pub struct OperationLogEntry {
    /// Outcome timestamp
    pub time: DateTime<Local>,
    /// Resolved filesystem path (or the raw URL path when resolution failed)
    pub path: String,
    /// HTTP method
    pub method: String,
    /// Logical operation name (`cat`, `ls`, `touch`, ...), when one ran
    pub operation: Option<&'static str>,
    /// Response status code
    pub status: u16,
    /// Error cause, when the outcome was a failure
    pub error: Option<String>,
}

impl OperationLogEntry {
    /// Create an entry with the current timestamp
    pub fn new(path: String, method: String, status: u16) -> Self {
        Self {
            time: Local::now(),
            path,
            method,
            operation: None,
            status,
            error: None,
        }
    }

    /// Format the entry according to the configured log format
    pub fn format(&self, format: &str) -> String {
        match format {
            "json" => self.format_json(),
            _ => self.format_kv(),
        }
    }

    /// Single comma-separated key/value line, timestamp first
    fn format_kv(&self) -> String {
        let mut line = format!(
            "{} path={},method={}",
            self.time.format("%Y/%m/%d %H:%M:%S"),
            self.path,
            self.method,
        );
        if let Some(op) = self.operation {
            line.push_str(&format!(",unix_op={op} {}", self.path));
        }
        line.push_str(&format!(",response_code={}", self.status));
        if let Some(err) = &self.error {
            line.push_str(&format!(",err={err}"));
        }
        line
    }

    /// One JSON object per line
    fn format_json(&self) -> String {
        serde_json::json!({
            "time": self.time.to_rfc3339(),
            "path": self.path,
            "method": self.method,
            "unix_op": self.operation,
            "response_code": self.status,
            "err": self.error,
        })
        .to_string()
    }
}
