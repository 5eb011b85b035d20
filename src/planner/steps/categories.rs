//! Categories step
//!
//! Collects (category, amount) pairs until the user types `done`.

use std::io::Write;

use tracing::{debug, info};

use crate::error::PlannerResult;
use crate::input::{LineSource, Prompter};
use crate::models::category::is_done_sentinel;
use crate::models::{AllocationOutcome, BudgetSession, EntryError, Money};

/// One completed pass through the name/amount prompts
enum Entry {
    Finished,
    Allocate { name: String, amount: Money },
}

/// Categories step
pub struct CategoriesStep {
    allow_overspend: bool,
}

impl CategoriesStep {
    pub fn new(allow_overspend: bool) -> Self {
        Self { allow_overspend }
    }

    /// Run the categories step, recording entries into `session`
    ///
    /// Returns the number of entries accepted, counting overwrites.
    pub fn run<S: LineSource, W: Write>(
        &self,
        prompter: &mut Prompter<S, W>,
        session: &mut BudgetSession,
    ) -> PlannerResult<usize> {
        prompter.say("")?;
        prompter.say("Enter your grocery categories and budget per category.")?;
        prompter.say("Type 'done' when finished.")?;
        prompter.say("")?;

        let mut accepted = 0;

        loop {
            let entry = prompter.retry("category entry", |p| self.read_entry(p, session))?;

            match entry {
                Entry::Finished => break,
                Entry::Allocate { name, amount } => {
                    match session.allocate(name.as_str(), amount)? {
                        AllocationOutcome::Added => {
                            info!(category = %name, amount = %amount, "category added")
                        }
                        AllocationOutcome::Replaced { previous } => debug!(
                            category = %name,
                            previous = %previous,
                            amount = %amount,
                            "category amount replaced"
                        ),
                    }
                    accepted += 1;
                }
            }
        }

        info!(categories = session.len(), "category entry finished");
        Ok(accepted)
    }

    fn read_entry<S: LineSource, W: Write>(
        &self,
        prompter: &mut Prompter<S, W>,
        session: &BudgetSession,
    ) -> PlannerResult<Result<Entry, EntryError>> {
        let raw_name = prompter.ask("Category name (or 'done'): ", "category name")?;
        let name = raw_name.trim();

        if is_done_sentinel(name) {
            return Ok(Ok(Entry::Finished));
        }
        if name.is_empty() {
            return Ok(Err(EntryError::EmptyCategoryName));
        }

        let prompt = format!("Budget for {}: {}", name, prompter.currency_symbol());
        let raw_amount = prompter.ask(&prompt, "category amount")?;

        let amount = match parse_amount(&raw_amount) {
            Ok(amount) => amount,
            Err(e) => return Ok(Err(e)),
        };

        if !self.allow_overspend {
            if let Err(e) = session.check_fits(name, amount) {
                return Ok(Err(e));
            }
        }

        Ok(Ok(Entry::Allocate {
            name: name.to_string(),
            amount,
        }))
    }
}

/// Parse and validate one line of category amount input
pub fn parse_amount(line: &str) -> Result<Money, EntryError> {
    let amount =
        Money::parse(line).map_err(|_| EntryError::InvalidAmount(line.trim().to_string()))?;

    if amount.is_negative() {
        return Err(EntryError::NegativeAmount);
    }

    Ok(amount)
}
