//! Token type definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact text of the lexeme it was
//! scanned from.

use std::fmt;

/// The closed set of token categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Error sentinel. Never returned by the lexer.
    Invalid,
    /// `[letter_][letter digit _]*`
    Identifier,
    /// A run of decimal digits.
    Number,
    /// A double-quoted string, quotes included.
    DqString,
    /// A single-quoted string, quotes included.
    SqString,
    /// Any single character without a dedicated kind.
    Punct,
    /// A dot-command such as `.exit`. Only produced when dot-commands are
    /// enabled in [`LexerOptions`](crate::LexerOptions).
    Command,
    /// `.`
    Dot,
    /// `(`
    OParen,
    /// `)`
    CParen,
    /// `[`
    OBracket,
    /// `]`
    CBracket,
    /// `{`
    OBrace,
    /// `}`
    CBrace,
    /// `,`
    Comma,
    /// `;`
    Semi,
    /// `:`
    Colon,
    /// `^`
    Caret,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Div,
}

impl TokenKind {
    /// Classifies a single punctuation character.
    ///
    /// Returns `None` for characters without a dedicated kind; the lexer
    /// reports those as [`TokenKind::Punct`].
    ///
    /// # Example
    ///
    /// ```
    /// use fermat_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_punct('('), Some(TokenKind::OParen));
    /// assert_eq!(TokenKind::from_punct('%'), None);
    /// ```
    pub fn from_punct(c: char) -> Option<TokenKind> {
        let kind = match c {
            '(' => TokenKind::OParen,
            ')' => TokenKind::CParen,
            '[' => TokenKind::OBracket,
            ']' => TokenKind::CBracket,
            '{' => TokenKind::OBrace,
            '}' => TokenKind::CBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semi,
            ':' => TokenKind::Colon,
            '^' => TokenKind::Caret,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Mult,
            '/' => TokenKind::Div,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns the upper-case name used when dumping tokens.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Invalid => "INVALID",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::DqString => "DQSTRING",
            TokenKind::SqString => "SQSTRING",
            TokenKind::Punct => "PUNCT",
            TokenKind::Command => "COMMAND",
            TokenKind::Dot => "DOT",
            TokenKind::OParen => "OPAREN",
            TokenKind::CParen => "CPAREN",
            TokenKind::OBracket => "OBRACKET",
            TokenKind::CBracket => "CBRACKET",
            TokenKind::OBrace => "OBRACE",
            TokenKind::CBrace => "CBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Semi => "SEMI",
            TokenKind::Colon => "COLON",
            TokenKind::Caret => "CARET",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Div => "DIV",
        }
    }

    /// Returns true for the two quoted-string kinds.
    pub fn is_string(self) -> bool {
        matches!(self, TokenKind::DqString | TokenKind::SqString)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Returns the token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the lexeme text.
    ///
    /// For quoted strings this includes the quotes, with escape sequences
    /// already resolved.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text of a quoted string without its delimiters.
    ///
    /// Other kinds return their text unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use fermat_lex::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::DqString, "\"hi\"");
    /// assert_eq!(token.unquoted(), "hi");
    /// ```
    pub fn unquoted(&self) -> &str {
        if !self.kind.is_string() {
            return &self.text;
        }
        let mut chars = self.text.chars();
        chars.next();
        chars.next_back();
        chars.as_str()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.text)
    }
}
