//! Dot and punctuation lexing.
//!
//! Every punctuation character is a token of its own; there are no
//! multi-character operators.

use std::io::Read;

use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<R: Read> Lexer<R> {
    /// Lexes a `.`.
    ///
    /// By default a dot is always a lone `TokenKind::Dot`, whatever follows
    /// it. With `LexerOptions::dot_commands` set it starts a command instead.
    pub(crate) fn lex_dot(&mut self) -> LexResult<Token> {
        if self.options.dot_commands {
            return self.lex_command();
        }
        self.stream.get()?;
        Ok(Token::new(TokenKind::Dot, "."))
    }

    /// Lexes a dot-command such as `.exit`.
    ///
    /// The dot is followed greedily by letters, digits and underscores; a
    /// dot with nothing after it is still a command.
    fn lex_command(&mut self) -> LexResult<Token> {
        let mut text = String::new();
        if let Some(dot) = self.stream.get()? {
            text.push(dot);
        }
        self.eat_while(&mut text, is_ident_continue)?;
        Ok(Token::new(TokenKind::Command, text))
    }

    /// Lexes the single punctuation character `c`, already peeked.
    ///
    /// Handles: `( ) [ ] { } , ; : ^ + - * /`, and reports every other
    /// character as `TokenKind::Punct`.
    pub(crate) fn lex_punct(&mut self, c: char) -> LexResult<Token> {
        self.stream.get()?;
        let kind = TokenKind::from_punct(c).unwrap_or(TokenKind::Punct);
        Ok(Token::new(kind, c.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LexerOptions;

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new("test", source.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap()
    }

    fn lex_all_with_commands(source: &str) -> Vec<Token> {
        Lexer::new("test", source.as_bytes())
            .with_options(LexerOptions { dot_commands: true })
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_each_punctuation_char() {
        let expected = [
            ("(", TokenKind::OParen),
            (")", TokenKind::CParen),
            ("{", TokenKind::OBrace),
            ("}", TokenKind::CBrace),
            ("[", TokenKind::OBracket),
            ("]", TokenKind::CBracket),
            (",", TokenKind::Comma),
            (";", TokenKind::Semi),
            (":", TokenKind::Colon),
            ("^", TokenKind::Caret),
            ("+", TokenKind::Plus),
            ("-", TokenKind::Minus),
            ("*", TokenKind::Mult),
            ("/", TokenKind::Div),
        ];
        for (source, kind) in expected {
            assert_eq!(lex_all(source), vec![Token::new(kind, source)]);
        }
    }

    #[test]
    fn test_call_expression() {
        assert_eq!(
            lex_all("(a,1)"),
            vec![
                Token::new(TokenKind::OParen, "("),
                Token::new(TokenKind::Identifier, "a"),
                Token::new(TokenKind::Comma, ","),
                Token::new(TokenKind::Number, "1"),
                Token::new(TokenKind::CParen, ")"),
            ]
        );
    }

    #[test]
    fn test_no_multi_char_operators() {
        let kinds: Vec<_> = lex_all("//*").iter().map(Token::kind).collect();
        assert_eq!(kinds, vec![TokenKind::Div, TokenKind::Div, TokenKind::Mult]);
    }

    #[test]
    fn test_unknown_chars_are_punct() {
        for source in ["%", "=", "!", "@", "#", "\\", "€", "\0"] {
            assert_eq!(lex_all(source), vec![Token::new(TokenKind::Punct, source)]);
        }
    }

    #[test]
    fn test_bare_dot() {
        assert_eq!(lex_all("."), vec![Token::new(TokenKind::Dot, ".")]);
    }

    #[test]
    fn test_dot_never_command_by_default() {
        let tokens = lex_all(".exit .quit");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Dot, "."),
                Token::new(TokenKind::Identifier, "exit"),
                Token::new(TokenKind::Dot, "."),
                Token::new(TokenKind::Identifier, "quit"),
            ]
        );
        assert!(tokens.iter().all(|t| t.kind() != TokenKind::Command));
    }

    #[test]
    fn test_consecutive_dots() {
        let tokens = lex_all("...");
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| t.kind() == TokenKind::Dot));
    }

    #[test]
    fn test_dot_command_opt_in() {
        assert_eq!(
            lex_all_with_commands(".exit now"),
            vec![
                Token::new(TokenKind::Command, ".exit"),
                Token::new(TokenKind::Identifier, "now"),
            ]
        );
    }

    #[test]
    fn test_dot_command_lone_dot() {
        assert_eq!(
            lex_all_with_commands(". x"),
            vec![
                Token::new(TokenKind::Command, "."),
                Token::new(TokenKind::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn test_dot_command_stops_at_punct() {
        let tokens = lex_all_with_commands(".load_2(");
        assert_eq!(tokens[0], Token::new(TokenKind::Command, ".load_2"));
        assert_eq!(tokens[1].kind(), TokenKind::OParen);
    }
}
