//! Identifier lexing.

use std::io::Read;

use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<R: Read> Lexer<R> {
    /// Lexes an identifier.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits or underscores. Scanning stops at the first other character
    /// or at end of input.
    ///
    /// # Returns
    ///
    /// `Token` of kind `TokenKind::Identifier`
    pub(crate) fn lex_identifier(&mut self) -> LexResult<Token> {
        let mut text = String::new();
        self.eat_while(&mut text, is_ident_continue)?;
        Ok(Token::new(TokenKind::Identifier, text))
    }
}
