//! Shared types for taillog
//!
//! This crate contains the log entry model used by the parser and formatter.

use std::fmt;

use serde_json::Value;

mod text;

// ============================================================================
// Field Names
// ============================================================================

pub const SESSION_KEY: &str = "session";
pub const TIMESTAMP_KEY: &str = "timestamp";
pub const LEVEL_KEY: &str = "level";
pub const SOURCE_KEY: &str = "source";
pub const MESSAGE_KEY: &str = "message";

/// Text rendered in place of a field that is missing or null
pub const ABSENT_MARKER: &str = "None";

// ============================================================================
// Log Types
// ============================================================================

/// A single extracted field of a log entry
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FieldValue {
    /// Key missing or JSON `null`
    #[default]
    Absent,
    /// JSON string, kept unquoted
    Text(String),
    /// Any other JSON value (number, bool, array, object), rendered literal-style
    Json(Value),
}

impl FieldValue {
    /// Look up `key` in a JSON object
    pub fn lookup(fields: &serde_json::Map<String, Value>, key: &str) -> Self {
        fields.get(key).cloned().map(Self::from).unwrap_or_default()
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(s) => Self::Text(s),
            other => Self::Json(other),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so that width/alignment specifiers apply to every variant
        match self {
            Self::Absent => f.pad(ABSENT_MARKER),
            Self::Text(s) => f.pad(s),
            Self::Json(v) => f.pad(&text::render(v)),
        }
    }
}

/// A single log entry
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogEntry {
    /// 1-based line number within the input
    pub line_number: u64,

    /// Original raw log line, terminator stripped
    pub raw: String,

    /// Session identifier (a UUID by convention, never validated)
    pub session: FieldValue,

    /// Timestamp, opaque
    pub timestamp: FieldValue,

    pub level: FieldValue,

    pub source: FieldValue,

    pub message: FieldValue,
}

impl LogEntry {
    /// Build an entry from a parsed JSON object
    pub fn from_fields(
        line_number: u64,
        raw: String,
        fields: &serde_json::Map<String, Value>,
    ) -> Self {
        Self {
            line_number,
            raw,
            session: FieldValue::lookup(fields, SESSION_KEY),
            timestamp: FieldValue::lookup(fields, TIMESTAMP_KEY),
            level: FieldValue::lookup(fields, LEVEL_KEY),
            source: FieldValue::lookup(fields, SOURCE_KEY),
            message: FieldValue::lookup(fields, MESSAGE_KEY),
        }
    }
}
