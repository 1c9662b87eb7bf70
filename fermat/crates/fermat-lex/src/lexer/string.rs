//! String literal lexing.
//!
//! This module handles double-quoted and single-quoted strings. Both keep
//! their delimiting quotes in the token text; they differ in how escape
//! sequences are resolved.

use std::io::Read;

use crate::error::{LexError, LexResult};
use crate::stream::Location;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// The two quoting styles and their escape rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Quote {
    /// `"..."`: `\n` and `\t` become newline and tab, any other escaped
    /// character is emitted without the backslash.
    Double,
    /// `'...'`: only `\'` and `\\` are escapes; anything else keeps its
    /// backslash.
    Single,
}

impl Quote {
    fn delimiter(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }

    fn kind(self) -> TokenKind {
        match self {
            Quote::Double => TokenKind::DqString,
            Quote::Single => TokenKind::SqString,
        }
    }

    /// Appends the resolution of `\c` to `text`.
    fn push_escaped(self, c: char, text: &mut String) {
        match self {
            Quote::Double => text.push(match c {
                'n' => '\n',
                't' => '\t',
                other => other,
            }),
            Quote::Single => {
                if c != '\'' && c != '\\' {
                    text.push('\\');
                }
                text.push(c);
            },
        }
    }

    fn unterminated(self, partial: String, location: Location) -> LexError {
        match self {
            Quote::Double => LexError::UnterminatedDoubleQuote { partial, location },
            Quote::Single => LexError::UnterminatedSingleQuote { partial, location },
        }
    }
}

impl<R: Read> Lexer<R> {
    /// Lexes a double-quoted string.
    ///
    /// # Returns
    ///
    /// `Token` of kind `TokenKind::DqString` with the quotes kept and
    /// escapes resolved, or `LexError::UnterminatedDoubleQuote` carrying
    /// the partial text.
    pub(crate) fn lex_double_quoted(&mut self) -> LexResult<Token> {
        self.lex_quoted(Quote::Double)
    }

    /// Lexes a single-quoted string.
    ///
    /// # Returns
    ///
    /// `Token` of kind `TokenKind::SqString`, or
    /// `LexError::UnterminatedSingleQuote` carrying the partial text.
    pub(crate) fn lex_single_quoted(&mut self) -> LexResult<Token> {
        self.lex_quoted(Quote::Single)
    }

    fn lex_quoted(&mut self, quote: Quote) -> LexResult<Token> {
        let start = self.token_start;
        let mut text = String::new();

        // Opening quote; the dispatcher has already peeked it.
        if let Some(open) = self.stream.get()? {
            text.push(open);
        }

        let mut in_escape = false;
        loop {
            let c = match self.stream.get()? {
                Some(c) => c,
                None => return Err(quote.unterminated(text, start)),
            };

            if in_escape {
                in_escape = false;
                quote.push_escaped(c, &mut text);
                continue;
            }

            if c == '\\' {
                in_escape = true;
                continue;
            }

            text.push(c);
            if c == quote.delimiter() {
                return Ok(Token::new(quote.kind(), text));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_one(source: &str) -> LexResult<Token> {
        let mut lexer = Lexer::new("test", source.as_bytes());
        lexer.next_token().map(|t| t.expect("expected a token"))
    }

    #[test]
    fn test_simple_double_quoted() {
        let token = lex_one("\"hello\"").unwrap();
        assert_eq!(token, Token::new(TokenKind::DqString, "\"hello\""));
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(lex_one("\"\"").unwrap().text(), "\"\"");
        assert_eq!(lex_one("''").unwrap().text(), "''");
    }

    #[test]
    fn test_double_quoted_newline_escape() {
        let token = lex_one(r#""a\nb""#).unwrap();
        assert_eq!(token.text(), "\"a\nb\"");
    }

    #[test]
    fn test_double_quoted_tab_escape() {
        let token = lex_one(r#""a\tb""#).unwrap();
        assert_eq!(token.text(), "\"a\tb\"");
    }

    #[test]
    fn test_double_quoted_other_escapes_drop_backslash() {
        assert_eq!(lex_one(r#""\q\r\0""#).unwrap().text(), "\"qr0\"");
        assert_eq!(lex_one(r#""say \"hi\"""#).unwrap().text(), "\"say \"hi\"\"");
        assert_eq!(lex_one(r#""a\\b""#).unwrap().text(), "\"a\\b\"");
    }

    #[test]
    fn test_double_quoted_single_quote_inside() {
        assert_eq!(lex_one(r#""it's""#).unwrap().text(), "\"it's\"");
    }

    #[test]
    fn test_double_quoted_spans_lines() {
        let token = lex_one("\"line1\nline2\"").unwrap();
        assert_eq!(token.text(), "\"line1\nline2\"");
    }

    #[test]
    fn test_single_quoted_passthrough() {
        let token = lex_one(r"'a\qb'").unwrap();
        assert_eq!(token, Token::new(TokenKind::SqString, r"'a\qb'"));
    }

    #[test]
    fn test_single_quoted_backslash_escape() {
        let token = lex_one(r"'a\\b'").unwrap();
        assert_eq!(token.text(), r"'a\b'");
    }

    #[test]
    fn test_single_quoted_quote_escape() {
        let token = lex_one(r"'it\'s'").unwrap();
        assert_eq!(token.text(), "'it's'");
    }

    #[test]
    fn test_single_quoted_n_not_translated() {
        let token = lex_one(r"'a\nb'").unwrap();
        assert_eq!(token.text(), r"'a\nb'");
    }

    #[test]
    fn test_unterminated_double_quote() {
        let err = lex_one("\"abc").unwrap_err();
        match err {
            LexError::UnterminatedDoubleQuote { partial, location } => {
                assert_eq!(partial, "\"abc");
                assert_eq!(location, Location::START);
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_single_quote() {
        let err = lex_one("  'abc\n").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedSingleQuote { .. }));
        assert_eq!(err.partial(), Some("'abc\n"));
        assert_eq!(err.location(), Some(Location { line: 1, column: 3 }));
    }

    #[test]
    fn test_unterminated_after_escaped_quote() {
        let err = lex_one(r#""abc\""#).unwrap_err();
        assert_eq!(err.partial(), Some("\"abc\""));
    }

    #[test]
    fn test_trailing_backslash_is_unterminated() {
        let err = lex_one("\"abc\\").unwrap_err();
        assert_eq!(err.to_string(), "missing closing double quote");
        assert_eq!(err.partial(), Some("\"abc"));
    }

    #[test]
    fn test_string_followed_by_tokens() {
        let mut lexer = Lexer::new("test", r#""a" 'b' c"#.as_bytes());
        let kinds: Vec<_> = (&mut lexer).map(|t| t.unwrap().kind()).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::DqString, TokenKind::SqString, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(lex_one("\"héllo ✓\"").unwrap().text(), "\"héllo ✓\"");
    }
}
