//! Command trait and common types for the fermat-tok CLI.

use crate::error::Result;

/// Standard command trait.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command against the process's stdout and stderr.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Common output type for commands that don't return data.
pub type NoOutput = ();

/// Outcome of a multi-source run.
///
/// This is the accumulator threaded through the source loop: each source
/// is recorded as processed or failed, and the run succeeds only if none
/// failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult<T = NoOutput> {
    /// The command output data.
    pub data: T,

    /// Number of sources that completed.
    pub items_processed: usize,

    /// Number of sources that failed to open or to tokenize.
    pub items_failed: usize,

    /// Execution time in milliseconds.
    pub execution_time_ms: u64,
}

impl<T> CommandResult<T> {
    /// Create an empty result around `data`.
    pub fn new(data: T) -> Self {
        Self {
            data,
            items_processed: 0,
            items_failed: 0,
            execution_time_ms: 0,
        }
    }

    /// Whether every item succeeded.
    pub fn success(&self) -> bool {
        self.items_failed == 0
    }

    /// Record one successful item.
    pub fn record_processed(&mut self) {
        self.items_processed += 1;
    }

    /// Record one failed item.
    pub fn record_failed(&mut self) {
        self.items_failed += 1;
    }

    /// Set the execution time.
    pub fn with_execution_time_ms(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = time_ms;
        self
    }
}
