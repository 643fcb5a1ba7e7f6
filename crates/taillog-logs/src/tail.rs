use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::TailError;
use crate::format::format_entry;
use crate::parser::LogParser;
use crate::reader::LineReader;

/// Outcome of a completed run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TailSummary {
    /// Lines written to the output
    pub lines: u64,
}

/// Format every line of `reader` into `writer`, stopping at the first error.
///
/// Lines written before an error stay written; the writer is flushed either way.
pub fn tail<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<TailSummary, TailError> {
    let mut summary = TailSummary::default();
    let result = emit_lines(reader, writer, &mut summary);
    let flushed = writer.flush().map_err(TailError::Write);

    result?;
    flushed?;

    tracing::debug!(lines = summary.lines, "finished formatting");
    Ok(summary)
}

fn emit_lines<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    summary: &mut TailSummary,
) -> Result<(), TailError> {
    for line in LineReader::new(reader) {
        let line = line?;
        let entry = LogParser::parse(&line.bytes, line.number)?;
        tracing::trace!(line = entry.line_number, raw = %entry.raw, "formatting entry");

        writeln!(writer, "{}", format_entry(&entry)).map_err(TailError::Write)?;
        summary.lines += 1;
    }
    Ok(())
}

/// Open `path` and format it into `writer`; the file is closed on return
pub fn tail_path<W: Write>(path: &Path, writer: &mut W) -> Result<TailSummary, TailError> {
    let file = File::open(path).map_err(|source| TailError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "opened log file");

    tail(BufReader::new(file), writer)
}
