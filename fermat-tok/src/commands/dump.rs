//! Dump command implementation.
//!
//! Tokenizes each input source in order and prints one line per token.
//! A failing source is reported on stderr and the run moves on to the next
//! one, unless fail-fast is set.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use fermat_lex::{Lexer, LexerOptions, TokenKind};
use tracing::{debug, info};

use crate::commands::common::{output_messages, render_token, EXIT_COMMANDS, STDIN_ARG, STDIN_NAME};
use crate::commands::traits::{Command, CommandResult};
use crate::error::{Result, TokError};

/// Arguments for the dump command.
#[derive(Debug, Clone)]
pub struct DumpArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Sources to tokenize, in order.
    pub inputs: Vec<PathBuf>,
    /// Options handed to every lexer.
    pub options: LexerOptions,
    /// Print quoted strings without their quotes.
    pub strip_quotes: bool,
    /// Stop after the first failing source.
    pub fail_fast: bool,
}

impl Default for DumpArgs {
    fn default() -> Self {
        Self {
            verbose: false,
            inputs: Vec::new(),
            options: LexerOptions::default(),
            strip_quotes: true,
            fail_fast: false,
        }
    }
}

/// How a single source finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    /// Every token was printed.
    Completed {
        /// Tokens printed.
        tokens: usize,
    },
    /// An exit command ended the source early.
    Exited {
        /// Tokens printed before the command.
        tokens: usize,
    },
    /// The source was not tokenized.
    Skipped,
}

impl SourceOutcome {
    fn tokens(&self) -> usize {
        match self {
            SourceOutcome::Completed { tokens } | SourceOutcome::Exited { tokens } => *tokens,
            SourceOutcome::Skipped => 0,
        }
    }
}

/// Dump command handler.
pub struct DumpCommand {
    args: DumpArgs,
}

impl DumpCommand {
    /// Runs over every source, writing tokens to `out` and diagnostics to `err`.
    ///
    /// Per-source failures are counted in the result. Only a failure to
    /// write the output itself is returned as an error.
    pub fn run<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> Result<CommandResult<usize>> {
        let start_time = Instant::now();
        let mut result = CommandResult::new(0);

        for input in &self.args.inputs {
            match self.dump_source(input, out, err) {
                Ok(outcome) => {
                    result.data += outcome.tokens();
                    result.record_processed();
                },
                Err(e @ (TokError::Open { .. } | TokError::Lex(_))) => {
                    writeln!(err, "{} {}", output_messages::ERROR, e.diagnostic())?;
                    result.record_failed();
                    if self.args.fail_fast {
                        debug!(path = %input.display(), "stopping after first failure");
                        break;
                    }
                },
                Err(e) => return Err(e),
            }
        }
        out.flush()?;

        let result = result.with_execution_time_ms(start_time.elapsed().as_millis() as u64);
        self.log_completion(&result);
        Ok(result)
    }

    /// Tokenizes one source.
    fn dump_source<O: Write, E: Write>(
        &self,
        input: &Path,
        out: &mut O,
        err: &mut E,
    ) -> Result<SourceOutcome> {
        if input.as_os_str() == STDIN_ARG {
            writeln!(out, "{}", STDIN_NAME)?;
            return Ok(SourceOutcome::Skipped);
        }

        let lexer = Lexer::open_with_options(input, self.args.options).map_err(|source| {
            TokError::Open {
                path: input.to_path_buf(),
                source,
            }
        })?;
        self.dump_tokens(lexer, out, err)
    }

    /// Prints the tokens of an already-open source.
    fn dump_tokens<R: Read, O: Write, E: Write>(
        &self,
        mut lexer: Lexer<R>,
        out: &mut O,
        err: &mut E,
    ) -> Result<SourceOutcome> {
        let mut tokens = 0;

        loop {
            let token = match lexer.next_token() {
                Ok(Some(token)) => token,
                Ok(None) => break,
                Err(e) => {
                    debug!(
                        "{}:{}: {}",
                        lexer.source_name(),
                        e.location().unwrap_or_else(|| lexer.token_start()),
                        e
                    );
                    return Err(e.into());
                },
            };

            if token.kind() == TokenKind::Command {
                if EXIT_COMMANDS.contains(&token.text()) {
                    writeln!(
                        err,
                        "{} Exiting the program due to token {:?}",
                        output_messages::NOTICE,
                        token.text()
                    )?;
                    return Ok(SourceOutcome::Exited { tokens });
                }
                writeln!(err, "{} Invalid COMMAND: {}", output_messages::NOTICE, token.text())?;
            } else {
                writeln!(out, "{}", render_token(&token, self.args.strip_quotes))?;
            }
            tokens += 1;
        }

        debug!(
            source = lexer.source_name(),
            tokens,
            chars = lexer.consumed(),
            "source finished"
        );
        Ok(SourceOutcome::Completed { tokens })
    }

    /// Log completion statistics if verbose.
    fn log_completion(&self, result: &CommandResult<usize>) {
        if self.args.verbose {
            info!(
                sources = result.items_processed,
                failed = result.items_failed,
                tokens = result.data,
                elapsed_ms = result.execution_time_ms,
                "dump finished"
            );
        }
    }
}

impl Command for DumpCommand {
    type Args = DumpArgs;
    type Output = CommandResult<usize>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        let mut out = io::BufWriter::new(stdout.lock());
        let mut err = stderr.lock();
        self.run(&mut out, &mut err)
    }

    fn name() -> &'static str {
        "dump"
    }
}
