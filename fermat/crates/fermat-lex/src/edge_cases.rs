//! Edge case tests for fermat-lex
