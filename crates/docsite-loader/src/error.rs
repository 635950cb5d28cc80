//! Error types for docsite-loader

use crate::format::FragmentFormat;
use std::path::PathBuf;

/// Result type for docsite-loader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while acquiring fragments
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} fragment `{origin}`: {message}")]
    Parse {
        origin: String,
        format: FragmentFormat,
        message: String,
    },

    #[error("Unsupported fragment format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Fragment `{origin}` must be a mapping at the root, found {found}")]
    InvalidRoot { origin: String, found: &'static str },

    #[error("Invalid assignment `{input}`: {reason}")]
    InvalidAssignment { input: String, reason: String },

    /// Resolution error from docsite-core
    #[error(transparent)]
    Core(#[from] docsite_core::Error),
}

impl Error {
    pub fn parse(
        origin: impl Into<String>,
        format: FragmentFormat,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            origin: origin.into(),
            format,
            message: message.into(),
        }
    }

    pub fn assignment(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAssignment {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
