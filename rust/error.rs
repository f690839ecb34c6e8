use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("required tool {tool} not found; {hint}")]
    MissingDependency { tool: &'static str, hint: &'static str },

    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to extract text from {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("cannot write extraction report: {0}")]
    Console(#[source] io::Error),
}

/// Coarse category of an [`ExtractError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingDependency,
    FileAccess,
    Parse,
}

impl ExtractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::MissingDependency { .. } => ErrorKind::MissingDependency,
            ExtractError::FileAccess { .. } | ExtractError::Console(_) => ErrorKind::FileAccess,
            ExtractError::Parse { .. } => ErrorKind::Parse,
        }
    }

    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExtractError::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ExtractError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
