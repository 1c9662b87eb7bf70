//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier lexing
//! - `number` - Number literal lexing
//! - `string` - Double- and single-quoted string lexing
//! - `punct` - Dot, dot-command and single-character punctuation lexing

mod core;
mod identifier;
mod number;
mod punct;
mod string;

pub use self::core::{Lexer, LexerOptions};
