//! Error handling module for the fermat-tok CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use fermat_lex::LexError;
use thiserror::Error;

/// Main error type for the fermat-tok CLI application.
#[derive(Error, Debug)]
pub enum TokError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input source cannot be opened.
    #[error("open {}: {source}", path.display())]
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Error when a source fails to tokenize to completion.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when a TOML configuration file is malformed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TokError {
    /// Renders the error as a one-line diagnostic for stderr.
    ///
    /// Lexical errors with partial text append it, with trailing line
    /// terminators trimmed, so the offending input is visible.
    pub fn diagnostic(&self) -> String {
        match self {
            TokError::Lex(err) => match err.partial().map(|p| p.trim_end_matches(['\r', '\n'])) {
                Some(partial) if !partial.is_empty() => format!("{} at: {}", err, partial),
                _ => err.to_string(),
            },
            other => other.to_string(),
        }
    }
}

/// Result type alias using TokError.
pub type Result<T> = std::result::Result<T, TokError>;
