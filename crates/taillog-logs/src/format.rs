use taillog_types::LogEntry;

/// Minimum width of the level column
pub const LEVEL_WIDTH: usize = 8;

/// Render an entry as `<timestamp> <level:<8> <source> => <message>` (no trailing newline)
pub fn format_entry(entry: &LogEntry) -> String {
    format!(
        "{} {:<width$} {} => {}",
        entry.timestamp,
        entry.level,
        entry.source,
        entry.message,
        width = LEVEL_WIDTH
    )
}
