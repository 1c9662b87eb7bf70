//! Command modules for the fermat-tok CLI.
//!
//! The only command dumps the token stream of each input source.

pub mod common;
pub mod dump;
pub mod traits;

// Re-export command types
pub use dump::{DumpArgs, DumpCommand};
pub use traits::Command;
