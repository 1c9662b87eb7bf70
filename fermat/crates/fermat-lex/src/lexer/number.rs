//! Number literal lexing.

use std::io::Read;

use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::unicode::is_digit;
use crate::Lexer;

impl<R: Read> Lexer<R> {
    /// Lexes a number literal.
    ///
    /// A number is a maximal run of decimal digits. There is no sign,
    /// decimal point or exponent; `1.5` is three tokens.
    pub(crate) fn lex_number(&mut self) -> LexResult<Token> {
        let mut text = String::new();
        self.eat_while(&mut text, is_digit)?;
        Ok(Token::new(TokenKind::Number, text))
    }
}
