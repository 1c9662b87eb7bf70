//! Character stream over a buffered reader.
//!
//! This module provides the `CharStream` struct which decodes a byte source
//! into Unicode scalar values and offers exactly one character of lookahead.
//! It also tracks line/column information for error reporting.

use std::io::{self, ErrorKind, Read};

use utf8_read::{Char, Error, Reader};

/// A 1-based line/column position in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
}

impl Location {
    /// The location of the first character of any input.
    pub const START: Location = Location { line: 1, column: 1 };
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A stream of characters with a single character of lookahead.
///
/// The stream reads from any [`Read`] source through a [`utf8_read::Reader`],
/// which buffers the input and returns multi-byte characters whole even when
/// they straddle two reads. Every byte of a malformed sequence decodes to its
/// own U+FFFD, so decoding resumes one byte after a bad lead byte.
///
/// # Example
///
/// ```
/// use fermat_lex::stream::CharStream;
///
/// let mut stream = CharStream::new("ab".as_bytes());
///
/// assert_eq!(stream.peek().unwrap(), Some('a'));
/// assert_eq!(stream.get().unwrap(), Some('a'));
/// assert_eq!(stream.get().unwrap(), Some('b'));
/// assert_eq!(stream.get().unwrap(), None);
/// ```
pub struct CharStream<R: Read> {
    /// The UTF-8 decoder over the byte source.
    reader: Reader<R>,

    /// A character that was peeked but not yet consumed.
    lookahead: Option<char>,

    /// Replacement characters still owed for the last malformed sequence.
    pending_replacements: usize,

    /// Location of the next character to be consumed.
    location: Location,

    /// Number of characters consumed so far.
    consumed: usize,
}

impl<R: Read> CharStream<R> {
    /// Creates a new stream over the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: Reader::new(reader),
            lookahead: None,
            pending_replacements: 0,
            location: Location::START,
            consumed: 0,
        }
    }

    /// Returns the next character without consuming it.
    ///
    /// Repeated calls without an intervening [`get`](Self::get) return the
    /// same character. Returns `Ok(None)` at end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use fermat_lex::stream::CharStream;
    ///
    /// let mut stream = CharStream::new("xy".as_bytes());
    /// assert_eq!(stream.peek().unwrap(), Some('x'));
    /// assert_eq!(stream.peek().unwrap(), Some('x'));
    /// ```
    pub fn peek(&mut self) -> io::Result<Option<char>> {
        if let Some(c) = self.lookahead {
            return Ok(Some(c));
        }
        let next = self.read_char()?;
        self.lookahead = next;
        Ok(next)
    }

    /// Consumes and returns the next character.
    ///
    /// Takes the peeked character if there is one, otherwise reads a fresh
    /// character from the source. Returns `Ok(None)` at end of input.
    pub fn get(&mut self) -> io::Result<Option<char>> {
        let next = match self.lookahead.take() {
            Some(c) => Some(c),
            None => self.read_char()?,
        };
        if let Some(c) = next {
            self.advance_location(c);
        }
        Ok(next)
    }

    /// Returns the location of the next character to be consumed.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Returns the number of characters consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    fn advance_location(&mut self, c: char) {
        self.consumed += 1;
        if c == '\n' {
            self.location.line += 1;
            self.location.column = 1;
        } else {
            self.location.column += 1;
        }
    }

    /// Decodes one character from the reader.
    fn read_char(&mut self) -> io::Result<Option<char>> {
        if self.pending_replacements > 0 {
            self.pending_replacements -= 1;
            return Ok(Some(char::REPLACEMENT_CHARACTER));
        }

        loop {
            match self.reader.next_char() {
                Ok(Char::Char(c)) => return Ok(Some(c)),
                Ok(Char::Eof) | Ok(Char::NoData) => return Ok(None),
                // One replacement per byte of the bad sequence.
                Err(Error::MalformedUtf8(_, len)) => {
                    self.pending_replacements = len.saturating_sub(1);
                    return Ok(Some(char::REPLACEMENT_CHARACTER));
                },
                Err(Error::IoError(e)) if e.kind() == ErrorKind::Interrupted => continue,
                Err(Error::IoError(e)) => return Err(e),
            }
        }
    }
}
