//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::LexResult;
use crate::stream::{CharStream, Location};
use crate::token::Token;
use crate::unicode::{is_digit, is_ident_start, is_space};

/// Switches that alter how lexemes are recognised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerOptions {
    /// Scan `.name` as a single [`TokenKind::Command`](crate::TokenKind::Command)
    /// token instead of a [`TokenKind::Dot`](crate::TokenKind::Dot) followed by
    /// an identifier. Off by default.
    pub dot_commands: bool,
}

/// Pull-based lexer over a single input source.
///
/// Each call to [`next_token`](Self::next_token) skips whitespace and scans
/// exactly one lexeme using the stream's single character of lookahead.
/// A lexer is never reused across sources; dropping it releases the source.
pub struct Lexer<R: Read> {
    /// Name of the source, for diagnostics.
    source_name: String,

    /// Character stream for source traversal.
    pub(crate) stream: CharStream<R>,

    /// Recognition switches.
    pub(crate) options: LexerOptions,

    /// Where the current token starts.
    pub(crate) token_start: Location,

    /// Set once the iterator has reported end of input or an error.
    finished: bool,
}

impl Lexer<File> {
    /// Opens a file and creates a lexer over it.
    ///
    /// The file is closed when the returned lexer is dropped.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::open_with_options(path, LexerOptions::default())
    }

    /// Opens a file and creates a lexer with the given options.
    pub fn open_with_options(path: impl AsRef<Path>, options: LexerOptions) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), ?options, "opened source");
        Ok(Lexer::new(path.display().to_string(), file).with_options(options))
    }
}

impl<R: Read> Lexer<R> {
    /// Creates a new lexer over a byte reader.
    ///
    /// # Example
    ///
    /// ```
    /// use fermat_lex::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::new("<inline>", "x1 42".as_bytes());
    /// assert_eq!(lexer.next_token().unwrap().unwrap().kind(), TokenKind::Identifier);
    /// assert_eq!(lexer.next_token().unwrap().unwrap().kind(), TokenKind::Number);
    /// assert!(lexer.next_token().unwrap().is_none());
    /// ```
    pub fn new(source_name: impl Into<String>, reader: R) -> Self {
        Self {
            source_name: source_name.into(),
            stream: CharStream::new(reader),
            options: LexerOptions::default(),
            token_start: Location::START,
            finished: false,
        }
    }

    /// Replaces the lexer's options.
    pub fn with_options(mut self, options: LexerOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the next token from the source.
    ///
    /// This is the main entry point for tokenization. It skips whitespace,
    /// then dispatches on the first character of the lexeme.
    ///
    /// # Returns
    /// `Ok(Some(token))`, `Ok(None)` at end of input, or the error that
    /// aborted the current lexeme.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        let first = match self.skip_whitespace()? {
            Some(c) => c,
            None => return Ok(None),
        };

        self.token_start = self.stream.location();

        let result = match first {
            c if is_ident_start(c) => self.lex_identifier(),
            '.' => self.lex_dot(),
            '"' => self.lex_double_quoted(),
            '\'' => self.lex_single_quoted(),
            c if is_digit(c) => self.lex_number(),
            c => self.lex_punct(c),
        };

        match &result {
            Ok(token) => trace!(kind = %token.kind(), text = token.text(), "token"),
            Err(err) => debug!(
                source = %self.source_name,
                at = %self.token_start,
                error = %err,
                "lexical error"
            ),
        }
        result.map(Some)
    }

    /// Returns the name of the source being lexed.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Returns the options in effect.
    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// Returns where the most recent token started.
    pub fn token_start(&self) -> Location {
        self.token_start
    }

    /// Returns the location of the next unread character.
    pub fn location(&self) -> Location {
        self.stream.location()
    }

    /// Returns the number of characters consumed from the source.
    pub fn consumed(&self) -> usize {
        self.stream.consumed()
    }

    /// Skips whitespace and returns the first character after it, unconsumed.
    fn skip_whitespace(&mut self) -> io::Result<Option<char>> {
        loop {
            match self.stream.peek()? {
                Some(c) if is_space(c) => {
                    self.stream.get()?;
                },
                other => return Ok(other),
            }
        }
    }

    /// Consumes characters into `text` while `accept` holds.
    ///
    /// Stops at the first rejected character or at end of input.
    pub(crate) fn eat_while(
        &mut self,
        text: &mut String,
        accept: impl Fn(char) -> bool,
    ) -> io::Result<()> {
        while let Some(c) = self.stream.peek()? {
            if !accept(c) {
                break;
            }
            self.stream.get()?;
            text.push(c);
        }
        Ok(())
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            },
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Lexer<R> {}

impl<R: Read> std::fmt::Debug for Lexer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("source_name", &self.source_name)
            .field("options", &self.options)
            .field("token_start", &self.token_start)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexError;
    use crate::token::TokenKind;
    use std::io::Write;

    fn lexer(source: &str) -> Lexer<&[u8]> {
        Lexer::new("test", source.as_bytes())
    }

    #[test]
    fn test_whitespace_only_is_end_of_input() {
        let mut lx = lexer(" \t\u{0B}\u{0C}\r\n  ");
        assert!(lx.next_token().unwrap().is_none());
        assert!(lx.next_token().unwrap().is_none());
    }

    #[test]
    fn test_empty_source() {
        let mut lx = lexer("");
        assert!(lx.next_token().unwrap().is_none());
    }

    #[test]
    fn test_token_start_tracks_lines() {
        let mut lx = lexer("a\n  bc");
        lx.next_token().unwrap();
        assert_eq!(lx.token_start(), Location { line: 1, column: 1 });
        lx.next_token().unwrap();
        assert_eq!(lx.token_start(), Location { line: 2, column: 3 });
    }

    #[test]
    fn test_position_after_identifier() {
        let mut lx = lexer("abc+");
        lx.next_token().unwrap();
        assert_eq!(lx.location(), Location { line: 1, column: 4 });
        assert_eq!(lx.stream.peek().unwrap(), Some('+'));
    }

    #[test]
    fn test_consumed_counts_characters() {
        let mut lx = lexer("αβ 1");
        lx.next_token().unwrap();
        assert_eq!(lx.consumed(), 2);
        lx.next_token().unwrap();
        assert_eq!(lx.consumed(), 4);
    }

    #[test]
    fn test_iterator_stops_at_end() {
        let tokens: Vec<_> = lexer("a b c").collect::<Result<_, _>>().unwrap();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_iterator_fuses_after_error() {
        let mut lx = lexer("x \"open y z");
        assert!(matches!(lx.next(), Some(Ok(_))));
        assert!(matches!(
            lx.next(),
            Some(Err(LexError::UnterminatedDoubleQuote { .. }))
        ));
        assert!(lx.next().is_none());
        assert!(lx.next().is_none());
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "foo(1)").unwrap();

        let lx = Lexer::open(file.path()).unwrap();
        assert_eq!(lx.source_name(), file.path().display().to_string());
        let kinds: Vec<_> = lx.map(|t| t.unwrap().kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::OParen,
                TokenKind::Number,
                TokenKind::CParen
            ]
        );
    }

    #[test]
    fn test_open_missing_file() {
        let err = Lexer::open("/nonexistent/fermat/input.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_options_default_off() {
        assert!(!lexer("").options().dot_commands);
        let lx = lexer("").with_options(LexerOptions { dot_commands: true });
        assert!(lx.options().dot_commands);
    }
}
