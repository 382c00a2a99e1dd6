//! Crate-level error types.

use std::fmt;

/// Errors produced by the synview crate.
#[derive(Debug)]
pub enum SynviewError {
    /// Failed to download or cache a structure payload.
    StructureFetch(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for SynviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StructureFetch(msg) => {
                write!(f, "structure fetch error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for SynviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SynviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
