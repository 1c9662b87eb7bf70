//! Lexical error types.

use thiserror::Error;

use crate::stream::Location;

/// An error that aborts the current call to
/// [`Lexer::next_token`](crate::Lexer::next_token).
///
/// End of input is not an error; it is reported as `Ok(None)`.
#[derive(Error, Debug)]
pub enum LexError {
    /// A double-quoted string reached end of input before its closing quote.
    #[error("missing closing double quote")]
    UnterminatedDoubleQuote {
        /// Text collected so far, opening quote included.
        partial: String,
        /// Location of the opening quote.
        location: Location,
    },

    /// A single-quoted string reached end of input before its closing quote.
    #[error("missing closing single quote")]
    UnterminatedSingleQuote {
        /// Text collected so far, opening quote included.
        partial: String,
        /// Location of the opening quote.
        location: Location,
    },

    /// The underlying source failed. Fatal for the source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LexError {
    /// Returns the partially scanned lexeme, if the error has one.
    pub fn partial(&self) -> Option<&str> {
        match self {
            LexError::UnterminatedDoubleQuote { partial, .. }
            | LexError::UnterminatedSingleQuote { partial, .. } => Some(partial),
            LexError::Io(_) => None,
        }
    }

    /// Returns where the failing lexeme started, if known.
    pub fn location(&self) -> Option<Location> {
        match self {
            LexError::UnterminatedDoubleQuote { location, .. }
            | LexError::UnterminatedSingleQuote { location, .. } => Some(*location),
            LexError::Io(_) => None,
        }
    }
}

/// Result type alias for lexer operations.
pub type LexResult<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unterminated_display() {
        let err = LexError::UnterminatedDoubleQuote {
            partial: "\"abc".to_string(),
            location: Location::START,
        };
        assert_eq!(err.to_string(), "missing closing double quote");
        assert_eq!(err.partial(), Some("\"abc"));

        let err = LexError::UnterminatedSingleQuote {
            partial: "'x".to_string(),
            location: Location { line: 2, column: 5 },
        };
        assert_eq!(err.to_string(), "missing closing single quote");
        assert_eq!(err.location(), Some(Location { line: 2, column: 5 }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LexError = io_err.into();
        assert!(matches!(err, LexError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: file not found");
        assert_eq!(err.partial(), None);
    }
}
