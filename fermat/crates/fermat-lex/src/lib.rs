//! fermat-lex - Pull-based tokenizer
//!
//! This crate turns a character stream into classified lexical tokens:
//! identifiers, numbers, quoted strings, dots and single-character
//! punctuation. Tokens are produced one at a time on demand; there is no
//! parser and no multi-character operator.
//!
//! # Example Usage
//!
//! ```
//! use fermat_lex::{Lexer, Token, TokenKind};
//!
//! let mut lexer = Lexer::new("<inline>", "f(x, 'y')".as_bytes());
//!
//! assert_eq!(
//!     lexer.next_token().unwrap(),
//!     Some(Token::new(TokenKind::Identifier, "f"))
//! );
//!
//! // Or iterate over the rest
//! let kinds: Vec<TokenKind> = lexer.map(|t| t.unwrap().kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::OParen, TokenKind::Identifier, TokenKind::Comma,
//!      TokenKind::SqString, TokenKind::CParen]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`stream`] - Character stream with one character of lookahead
//! - [`lexer`] - Main lexer implementation
//! - [`token`] - Token type definitions
//! - [`error`] - Lexical errors
//! - [`unicode`] - Character classes
//!
//! # Token Categories
//!
//! - **Identifier**: `[letter_][letter digit _]*`
//! - **Number**: one or more decimal digits of any script (no sign, point or exponent)
//! - **DqString**: `"..."` with `\n`, `\t` and `\<c>` escapes
//! - **SqString**: `'...'` where only `\'` and `\\` are escapes
//! - **Dot**: `.`
//! - **Punctuation**: `( ) [ ] { } , ; : ^ + - * /`, everything else is `Punct`
//! - **Command**: `.name`, only with [`LexerOptions::dot_commands`]
//!
//! End of input is `Ok(None)` from [`Lexer::next_token`], never an error.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod stream;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use error::{LexError, LexResult};
pub use lexer::{Lexer, LexerOptions};
pub use stream::{CharStream, Location};
pub use token::{Token, TokenKind};
