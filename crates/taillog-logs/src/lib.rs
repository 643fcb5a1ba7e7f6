//! Log processing for taillog
//!
//! This crate provides line reading, JSON parsing, and column formatting.

mod error;
mod format;
mod parser;
mod reader;
mod tail;

pub use error::TailError;
pub use format::{format_entry, LEVEL_WIDTH};
pub use parser::LogParser;
pub use reader::{LineReader, RawLine};
pub use tail::{tail, tail_path, TailSummary};

// Re-export types used in our public API
pub use taillog_types::{FieldValue, LogEntry};
