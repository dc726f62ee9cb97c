//! Error types for the metric sources.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SourceError>;

/// Why a data source could not produce a value.
///
/// None of these ever reach the reader of a report: the assembler turns
/// them into a placeholder or drops the section.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to run {program}: {reason}")]
    Command { program: String, reason: String },

    #[error("{program} exited with status {code}")]
    NonZeroExit { program: String, code: i32 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),
}

impl SourceError {
    pub fn parse(msg: impl Into<String>) -> Self {
        SourceError::Parse(msg.into())
    }

    /// True when the source is simply absent on this machine (tool not
    /// installed, file missing) rather than present but misbehaving.
    pub fn is_missing(&self) -> bool {
        match self {
            SourceError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            SourceError::Unavailable(_) => true,
            _ => false,
        }
    }
}
