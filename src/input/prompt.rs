//! Console prompting with bounded retries

use std::io::Write;

use tracing::{debug, warn};

use super::source::LineSource;
use crate::error::{PlannerError, PlannerResult};
use crate::models::EntryError;

/// Writes prompts and messages to `out`, reads answers from `source`
pub struct Prompter<S, W> {
    source: S,
    out: W,
    max_attempts: Option<u32>,
    currency_symbol: String,
}

impl<S: LineSource, W: Write> Prompter<S, W> {
    /// Create a prompter with unbounded retries and a `$` currency symbol
    pub fn new(source: S, out: W) -> Self {
        Self {
            source,
            out,
            max_attempts: None,
            currency_symbol: "$".to_string(),
        }
    }

    /// Stop retrying after `max_attempts` consecutive invalid entries
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Write `prompt` without a newline and read the answer
    ///
    /// End of input is fatal for the session.
    pub fn ask(&mut self, prompt: &str, field: &'static str) -> PlannerResult<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        match self.source.next_line()? {
            Some(line) => Ok(line),
            None => {
                // Keep the next message off the prompt line
                writeln!(self.out)?;
                Err(PlannerError::EndOfInput { field })
            }
        }
    }

    /// Write one line of output
    pub fn say(&mut self, line: &str) -> PlannerResult<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Run `attempt` until it produces a value
    ///
    /// Each rejected entry is reported to the user and the attempt repeated.
    /// With a limit set, that many consecutive rejections end the session.
    pub fn retry<T, F>(&mut self, field: &'static str, mut attempt: F) -> PlannerResult<T>
    where
        F: FnMut(&mut Self) -> PlannerResult<Result<T, EntryError>>,
    {
        let mut failures: u32 = 0;

        loop {
            match attempt(self)? {
                Ok(value) => return Ok(value),
                Err(entry_error) => {
                    failures += 1;
                    debug!(field, failures, error = %entry_error, "rejected entry");

                    let message = self.describe(&entry_error);
                    self.say(&message)?;

                    if let Some(limit) = self.max_attempts {
                        if failures >= limit {
                            warn!(field, attempts = failures, "giving up after repeated invalid input");
                            return Err(PlannerError::TooManyAttempts {
                                field,
                                attempts: failures,
                            });
                        }
                    }
                }
            }
        }
    }

    /// User-facing text for a rejected entry
    fn describe(&self, error: &EntryError) -> String {
        match error {
            EntryError::ExceedsBudget { remaining } => format!(
                "This would exceed your budget. You have {} remaining.",
                remaining.format_with_symbol(&self.currency_symbol)
            ),
            other => format!("{}. Please try again.", other),
        }
    }

    /// Give back the output writer
    pub fn into_writer(self) -> W {
        self.out
    }
}
