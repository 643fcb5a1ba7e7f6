use std::io;
use std::path::PathBuf;

/// Errors that abort a formatting run
#[derive(Debug, thiserror::Error)]
pub enum TailError {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line}")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: invalid JSON")]
    InvalidJson {
        line: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: expected a JSON object, found {kind}")]
    NotAnObject { line: u64, kind: &'static str },

    #[error("failed to write output")]
    Write(#[source] io::Error),
}

impl TailError {
    /// True when the output side went away (e.g. piped into `head`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
