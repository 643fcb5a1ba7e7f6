use serde_json::Value;

use taillog_types::LogEntry;

use crate::error::TailError;

/// UTF-8 byte order mark
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Log parser for turning one JSON Lines record into a LogEntry
pub struct LogParser;

impl LogParser {
    /// Parse a raw line (terminator allowed) into a LogEntry
    pub fn parse(raw: &[u8], line_number: u64) -> Result<LogEntry, TailError> {
        let raw = raw.strip_prefix(BOM).unwrap_or(raw);

        // Trailing "\n" / "\r\n" is JSON whitespace, so the line is parsed as-is
        let value: Value = serde_json::from_slice(raw).map_err(|source| TailError::InvalidJson {
            line: line_number,
            source,
        })?;

        let Some(fields) = value.as_object() else {
            return Err(TailError::NotAnObject {
                line: line_number,
                kind: Self::kind_of(&value),
            });
        };

        Ok(LogEntry::from_fields(
            line_number,
            Self::raw_text(raw),
            fields,
        ))
    }

    /// Lossy text of the line without its terminator
    fn raw_text(raw: &[u8]) -> String {
        let trimmed = raw.strip_suffix(b"\n").unwrap_or(raw);
        let trimmed = trimmed.strip_suffix(b"\r").unwrap_or(trimmed);
        String::from_utf8_lossy(trimmed).into_owned()
    }

    fn kind_of(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taillog_types::FieldValue;

    #[test]
    fn test_parse_full_entry() {
        let line = br#"{"session":"abc-123","timestamp":"2023-01-01T00:00:00Z","level":"INFO","source":"auth","message":"login ok"}
"#;
        let entry = LogParser::parse(line, 1).unwrap();
        assert_eq!(entry.session, FieldValue::Text("abc-123".into()));
        assert_eq!(entry.timestamp, FieldValue::Text("2023-01-01T00:00:00Z".into()));
        assert_eq!(entry.level, FieldValue::Text("INFO".into()));
        assert_eq!(entry.source, FieldValue::Text("auth".into()));
        assert_eq!(entry.message, FieldValue::Text("login ok".into()));
        assert!(!entry.raw.ends_with('\n'));
    }

    #[test]
    fn test_parse_missing_fields() {
        let entry = LogParser::parse(b"{}\r\n", 1).unwrap();
        assert_eq!(entry, LogEntry::from_fields(1, "{}".to_string(), &Default::default()));
        assert_eq!(entry.message, FieldValue::Absent);
    }

    #[test]
    fn test_leading_bom_is_skipped() {
        let line = b"\xEF\xBB\xBF{\"timestamp\":\"t\",\"level\":\"I\"}\n";
        let entry = LogParser::parse(line, 1).unwrap();
        assert_eq!(entry.timestamp, FieldValue::Text("t".into()));
        assert_eq!(entry.level, FieldValue::Text("I".into()));
        assert_eq!(entry.raw, "{\"timestamp\":\"t\",\"level\":\"I\"}");

        // any line, not only the first
        assert!(LogParser::parse(b"\xEF\xBB\xBF{}\n", 5).is_ok());
    }

    #[test]
    fn test_non_finite_numbers_are_invalid_json() {
        let err = LogParser::parse(b"{\"timestamp\":NaN}\n", 1).unwrap_err();
        assert!(matches!(err, TailError::InvalidJson { line: 1, .. }));

        let err = LogParser::parse(b"{\"level\":-Infinity}\n", 2).unwrap_err();
        assert!(matches!(err, TailError::InvalidJson { line: 2, .. }));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = LogParser::parse(b"not json\n", 7).unwrap_err();
        assert!(matches!(err, TailError::InvalidJson { line: 7, .. }));
    }

    #[test]
    fn test_blank_line_is_invalid_json() {
        let err = LogParser::parse(b"\n", 2).unwrap_err();
        assert!(matches!(err, TailError::InvalidJson { line: 2, .. }));
    }

    #[test]
    fn test_non_utf8_is_invalid_json() {
        let err = LogParser::parse(b"{\"message\":\"\xff\"}\n", 1).unwrap_err();
        assert!(matches!(err, TailError::InvalidJson { .. }));
    }

    #[test]
    fn test_non_object_is_an_error() {
        let err = LogParser::parse(b"[1, 2]\n", 3).unwrap_err();
        assert!(matches!(
            err,
            TailError::NotAnObject {
                line: 3,
                kind: "array"
            }
        ));

        let err = LogParser::parse(b"\"text\"", 4).unwrap_err();
        assert!(matches!(err, TailError::NotAnObject { kind: "string", .. }));
    }

    #[test]
    fn test_parse_multibyte_utf8() {
        let line = "{\"message\":\"╭──╮ ünïcödé\"}\n".as_bytes();
        let entry = LogParser::parse(line, 1).unwrap();
        assert_eq!(entry.message, FieldValue::Text("╭──╮ ünïcödé".into()));
    }
}
