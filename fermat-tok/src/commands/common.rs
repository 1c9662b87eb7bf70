//! Common types and utilities for fermat-tok commands.
//!
//! Output formatting shared by the dump command and its tests.

use fermat_lex::{Token, TokenKind};

/// Argument that stands for standard input.
pub const STDIN_ARG: &str = "-";

/// Name printed in place of standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Command lexemes that end the current source.
pub const EXIT_COMMANDS: &[&str] = &[".exit", ".quit"];

/// Returns the text to print for a token.
///
/// Quoted strings lose their delimiters when `strip_quotes` is set; every
/// other kind prints its lexeme as is.
pub fn display_text(token: &Token, strip_quotes: bool) -> &str {
    match token.kind() {
        TokenKind::DqString | TokenKind::SqString => {
            if strip_quotes {
                token.unquoted()
            } else {
                token.text()
            }
        },
        TokenKind::Invalid
        | TokenKind::Identifier
        | TokenKind::Number
        | TokenKind::Punct
        | TokenKind::Command
        | TokenKind::Dot
        | TokenKind::OParen
        | TokenKind::CParen
        | TokenKind::OBracket
        | TokenKind::CBracket
        | TokenKind::OBrace
        | TokenKind::CBrace
        | TokenKind::Comma
        | TokenKind::Semi
        | TokenKind::Colon
        | TokenKind::Caret
        | TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Mult
        | TokenKind::Div => token.text(),
    }
}

/// Formats one line of the token dump.
pub fn render_token(token: &Token, strip_quotes: bool) -> String {
    format!("Token: {}: {}", token.kind(), display_text(token, strip_quotes))
}

/// Standard output message templates.
pub mod output_messages {
    /// Prefix for error diagnostics on stderr.
    pub const ERROR: &str = "ERROR:";

    /// Prefix for notices on stderr.
    pub const NOTICE: &str = "NOTICE:";
}
